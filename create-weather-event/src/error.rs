use thiserror::Error;

/// Failures of a single ingest call.
/// The kinds are kept apart so the Lambda adapter can tell a malformed request from a backend outage.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to parse the weather event: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to serialize the stored weather event: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl IngestError {
    /// A short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::Parse(_) => "parse",
            IngestError::Storage(_) => "storage",
            IngestError::Serialize(_) => "serialize",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("The partition key locationName is missing or empty")]
    MissingKey,
    #[error("No item found for locationName {0}")]
    NotFound(String),
    #[error("Failed to put item into {table}: {message}")]
    Put { table: String, message: String },
    #[error("Failed to get item from {table}: {message}")]
    Get { table: String, message: String },
    #[error("Failed to create table {table}: {message}")]
    CreateTable { table: String, message: String },
    #[error("Failed to convert the item: {0}")]
    Mapping(#[from] serde_dynamo::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0} env var")]
    MissingVar(&'static str),
}
