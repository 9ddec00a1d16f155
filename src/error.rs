use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Start date must be on or before end date")]
    InvalidRange,

    #[error(
        "Limit of {limit} concurrent approved leave reached at {campus} for the selected dates"
    )]
    LimitReached { campus: String, limit: u32 },

    #[error("Please complete the required field: {0}")]
    MissingField(&'static str),

    #[error("Please map a column for: {}", .0.join(", "))]
    UnmappedColumns(Vec<String>),

    #[error("No valid rows found")]
    NoValidRows,

    #[error("Leave record not found: {0}")]
    NotFound(Uuid),

    #[error("Campus already exists: {0}")]
    DuplicateCampus(String),

    #[error("Could not import file: {0}")]
    InvalidDocument(String),

    #[error("Storage error: {0}")]
    Io(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        log::error!("Storage error: {}", error);
        AppError::Io(error)
    }
}
