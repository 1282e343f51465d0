use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Layout Validation Error: {0}")]
    Validation(String),

    #[error("Unknown steno system '{0}' (expected one of: lapwing, mejiro)")]
    UnknownSystem(String),
}

pub type DrillResult<T> = Result<T, DrillError>;
