use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown medal kind: {0}")]
    UnknownMedalKind(String),
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
