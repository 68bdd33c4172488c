//! A Lambda function that stores weather observations in DynamoDB, keyed by location name,
//! and returns each stored record as it was read back from the table.

pub mod config;
pub mod error;
pub mod handler;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, IngestError, StorageError};
pub use handler::{function_handler, WeatherEventIngestHandler};
pub use store::{DynamoStore, MemoryStore, WeatherEventStore};
pub use types::{RequestEnvelope, ResponseEnvelope, WeatherEvent};
