//! Plain-text rendering of page reports.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use olympics_model::{
    AthleteReport, CategoryCount, FilterOptions, GlobalReport, GroupTotal, MedalKind,
    OverviewReport, SportsReport,
};

/// Renders the overview page.
pub fn render_overview(report: &OverviewReport, styled: bool) -> String {
    let kpis = &report.kpis;
    let mut out = String::new();

    let mut table = new_table(vec!["Metric", "Value"], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in [
        ("Athletes", kpis.athletes as u64),
        ("Countries", kpis.countries as u64),
        ("Sports", kpis.sports as u64),
        ("Medals", kpis.medals),
        ("Events", kpis.events as u64),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    push_section(&mut out, "Key figures", &table);

    let mut table = new_table(vec!["Medal", "Count", "Share"], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in &report.shares {
        table.add_row(vec![
            medal_cell(share.medal),
            Cell::new(share.count),
            Cell::new(format!("{:.1}%", share.percent)),
        ]);
    }
    push_section(&mut out, "Medal distribution", &table);

    push_section(
        &mut out,
        "Top countries",
        &group_table("Country", &report.top_countries, true, styled),
    );
    out
}

/// Renders the global analysis page.
pub fn render_global(report: &GlobalReport, styled: bool) -> String {
    let mut out = String::new();
    push_section(
        &mut out,
        "Medals by continent",
        &group_table("Continent", &report.continents, false, styled),
    );
    push_section(
        &mut out,
        "Top countries",
        &group_table("Country", &report.top_countries, true, styled),
    );

    let mut table = new_table(vec!["Continent", "Country", "Medal", "Count"], styled);
    align_column(&mut table, 3, CellAlignment::Right);
    for leaf in &report.hierarchy {
        table.add_row(vec![
            Cell::new(&leaf.continent),
            Cell::new(&leaf.country),
            medal_cell(leaf.medal),
            Cell::new(leaf.count),
        ]);
    }
    push_section(&mut out, "Continent / country / medal", &table);
    out
}

/// Renders the athlete performance page.
pub fn render_athletes(report: &AthleteReport, styled: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Athletes: {}", report.athletes);
    out.push('\n');

    let mut table = new_table(vec!["Gender", "Athletes"], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &report.genders {
        table.add_row(vec![Cell::new(&entry.gender), Cell::new(entry.count)]);
    }
    push_section(&mut out, "Gender split", &table);

    let mut table = new_table(vec!["Age group", "Athletes"], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for bucket in &report.ages.buckets {
        table.add_row(vec![
            Cell::new(bucket.age_group.label()),
            Cell::new(bucket.count),
        ]);
    }
    push_section(&mut out, "Age distribution", &table);
    let mean = report
        .ages
        .mean_age
        .map_or_else(|| "-".to_string(), |mean| format!("{mean:.1}"));
    let _ = writeln!(
        out,
        "Mean age: {mean} ({} without a usable birth date or out of range)",
        report.ages.excluded
    );
    out.push('\n');

    push_section(
        &mut out,
        "Top countries",
        &count_table("Country", "Athletes", &report.top_countries, styled),
    );
    push_section(
        &mut out,
        "Top sports",
        &count_table("Sport", "Athletes", &report.top_sports, styled),
    );
    out
}

/// Renders the sports and events page.
pub fn render_sports(report: &SportsReport, styled: bool) -> String {
    let mut out = String::new();

    let mut table = new_table(vec!["Metric", "Value"], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    let disciplines = report
        .disciplines
        .map_or_else(|| dim_cell("N/A", styled), Cell::new);
    table.add_row(vec![Cell::new("Sports"), Cell::new(report.sports)]);
    table.add_row(vec![Cell::new("Events"), Cell::new(report.events)]);
    table.add_row(vec![Cell::new("Disciplines"), disciplines]);
    let venue_sports = report
        .venue_sports
        .map_or_else(|| dim_cell("N/A", styled), Cell::new);
    table.add_row(vec![Cell::new("Venues"), Cell::new(report.venues)]);
    table.add_row(vec![Cell::new("Sports at venues"), venue_sports]);
    push_section(&mut out, "Key figures", &table);

    push_section(
        &mut out,
        "Events by sport",
        &count_table("Sport", "Events", &report.events_by_sport, styled),
    );

    let mut table = new_table(vec!["Discipline", "Gold", "Silver", "Bronze", "Total"], styled);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &report.medals_by_discipline {
        table.add_row(vec![
            Cell::new(&row.discipline),
            Cell::new(row.medals.gold),
            Cell::new(row.medals.silver),
            Cell::new(row.medals.bronze),
            bold_cell(row.total, styled),
        ]);
    }
    push_section(&mut out, "Medals by discipline", &table);

    let mut table = new_table(vec!["Sport", "Event"], styled);
    for entry in &report.event_details {
        table.add_row(vec![
            optional_cell(entry.sport.as_deref(), styled),
            optional_cell(entry.event.as_deref(), styled),
        ]);
    }
    push_section(&mut out, "Events detail", &table);

    let mut table = new_table(vec!["Venue", "Sports"], styled);
    for entry in &report.venue_list {
        table.add_row(vec![
            optional_cell(entry.name.as_deref(), styled),
            optional_cell(entry.sports.as_deref(), styled),
        ]);
    }
    push_section(&mut out, "Venues", &table);

    if let Some(sport) = &report.schedule_sport {
        let mut table = new_table(vec!["Event", "Venue", "Start", "End"], styled);
        for entry in &report.schedule {
            table.add_row(vec![
                Cell::new(&entry.event),
                optional_cell(entry.venue.as_deref(), styled),
                optional_cell(entry.start.as_deref(), styled),
                optional_cell(entry.end.as_deref(), styled),
            ]);
        }
        push_section(&mut out, &format!("Schedule: {sport}"), &table);
    }
    out
}

/// Renders the values offered by each filter.
pub fn render_options(options: &FilterOptions, styled: bool) -> String {
    let mut out = String::new();
    for (title, values) in [
        ("Countries", &options.countries),
        ("Sports", &options.sports),
        ("Continents", &options.continents),
    ] {
        let mut table = new_table(vec![title], styled);
        for value in values {
            table.add_row(vec![Cell::new(value)]);
        }
        push_section(&mut out, title, &table);
    }
    out
}

fn push_section(out: &mut String, title: &str, table: &Table) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{table}");
    out.push('\n');
}

fn group_table(label: &str, groups: &[GroupTotal], ranked: bool, styled: bool) -> Table {
    let mut headers = Vec::with_capacity(6);
    if ranked {
        headers.push("#");
    }
    headers.extend([label, "Gold", "Silver", "Bronze", "Total"]);
    let offset = usize::from(ranked);

    let mut table = new_table(headers, styled);
    for index in 0..offset {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for index in offset + 1..offset + 5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (rank, group) in groups.iter().enumerate() {
        let mut row = Vec::with_capacity(6);
        if ranked {
            row.push(Cell::new(rank + 1));
        }
        row.extend([
            Cell::new(&group.name),
            Cell::new(group.medals.gold),
            Cell::new(group.medals.silver),
            Cell::new(group.medals.bronze),
            bold_cell(group.total, styled),
        ]);
        table.add_row(row);
    }
    table
}

fn count_table(label: &str, unit: &str, counts: &[CategoryCount], styled: bool) -> Table {
    let mut table = new_table(vec![label, unit], styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
    }
    table
}

fn new_table(headers: Vec<&str>, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(headers.into_iter().map(|label| header_cell(label, styled)));
    apply_table_style(&mut table, styled);
    table
}

pub fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str, styled: bool) -> Cell {
    let cell = Cell::new(label);
    if styled {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn medal_cell(kind: MedalKind) -> Cell {
    let color = match kind {
        MedalKind::Gold => Color::Yellow,
        MedalKind::Silver => Color::Grey,
        MedalKind::Bronze => Color::DarkYellow,
    };
    Cell::new(kind.label()).fg(color)
}

fn bold_cell<T: ToString>(value: T, styled: bool) -> Cell {
    let cell = Cell::new(value);
    if styled {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn optional_cell(value: Option<&str>, styled: bool) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-", styled),
    }
}

fn dim_cell<T: ToString>(value: T, styled: bool) -> Cell {
    let cell = Cell::new(value);
    if styled {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}
