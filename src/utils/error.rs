use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unable to decode {path} with any supported encoding")]
    DecodeError { path: String },

    #[error("Data directory not found: {path}")]
    MissingDataDirError { path: String },

    #[error("Template not found: {path}")]
    TemplateNotFoundError { path: String },

    #[error("Destination already exists: {path}")]
    DestinationExistsError { path: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
