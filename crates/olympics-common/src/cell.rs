//! Cell conversion helpers for Polars `AnyValue`s.
//!
//! Source CSVs mix strings, integers, floats and nulls in the same logical
//! field. These two readers are the only place that branches on cell type.

use polars::prelude::AnyValue;

/// Reads a cell as trimmed text, `None` for nulls and blank strings.
///
/// Whole floats print without a fractional part, so a code read as `40.0`
/// compares equal to the string `"40"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use olympics_common::cell_text;
///
/// assert_eq!(cell_text(AnyValue::Null), None);
/// assert_eq!(cell_text(AnyValue::Int64(13)), Some("13".to_string()));
/// assert_eq!(cell_text(AnyValue::String(" FRA ")), Some("FRA".to_string()));
/// ```
pub fn cell_text(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => float_text(f64::from(v)),
        AnyValue::Float64(v) => float_text(v),
        other => match cell_integer(&other) {
            Some(v) => v.to_string(),
            None => other.to_string().trim_matches('"').to_string(),
        },
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reads a cell as a finite number, `None` for nulls and non-numeric text.
pub fn cell_number(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Float32(v) => f64::from(v),
        AnyValue::Float64(v) => v,
        AnyValue::String(s) => s.trim().parse().ok()?,
        AnyValue::StringOwned(s) => s.trim().parse().ok()?,
        other => cell_integer(&other)? as f64,
    };
    number.is_finite().then_some(number)
}

fn cell_integer(value: &AnyValue<'_>) -> Option<i128> {
    match *value {
        AnyValue::Int8(v) => Some(i128::from(v)),
        AnyValue::Int16(v) => Some(i128::from(v)),
        AnyValue::Int32(v) => Some(i128::from(v)),
        AnyValue::Int64(v) => Some(i128::from(v)),
        AnyValue::UInt8(v) => Some(i128::from(v)),
        AnyValue::UInt16(v) => Some(i128::from(v)),
        AnyValue::UInt32(v) => Some(i128::from(v)),
        AnyValue::UInt64(v) => Some(i128::from(v)),
        _ => None,
    }
}

fn float_text(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_none() {
        assert_eq!(cell_text(AnyValue::Null), None);
        assert_eq!(cell_text(AnyValue::String("   ")), None);
        assert_eq!(cell_text(AnyValue::String(" USA ")), Some("USA".to_string()));
    }

    #[test]
    fn numbers_read_as_text() {
        assert_eq!(cell_text(AnyValue::Int32(42)), Some("42".to_string()));
        assert_eq!(cell_text(AnyValue::Float64(1.0)), Some("1".to_string()));
        assert_eq!(cell_text(AnyValue::Float64(2.25)), Some("2.25".to_string()));
        assert_eq!(cell_text(AnyValue::Boolean(true)), Some("true".to_string()));
    }

    #[test]
    fn numbers_from_mixed_cells() {
        assert_eq!(cell_number(AnyValue::Int64(8)), Some(8.0));
        assert_eq!(cell_number(AnyValue::UInt32(3)), Some(3.0));
        assert_eq!(cell_number(AnyValue::String(" 4 ")), Some(4.0));
        assert_eq!(cell_number(AnyValue::String("n/a")), None);
        assert_eq!(cell_number(AnyValue::String("")), None);
        assert_eq!(cell_number(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(cell_number(AnyValue::Null), None);
        assert_eq!(cell_number(AnyValue::Boolean(true)), None);
    }
}
