//! Persistence of weather events, keyed by `locationName`.
//!
//! Both implementations have upsert semantics: a put for an existing key replaces the item
//! without any version check.
use crate::error::StorageError;
use crate::types::WeatherEvent;
use std::future::Future;

mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// The partition key attribute of the locations table
pub const PARTITION_KEY: &str = "locationName";

pub trait WeatherEventStore: Send + Sync {
    /// Inserts the event or overwrites the existing one with the same `location_name`.
    fn put_item(&self, event: &WeatherEvent) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Point lookup by the partition key. Returns None if there is no such item.
    fn get_item(&self, location_name: &str) -> impl Future<Output = Result<Option<WeatherEvent>, StorageError>> + Send;
}

/// Returns the partition key of the event or an error if it is empty.
/// DynamoDB rejects empty key values, so the same rule applies to all stores.
pub(crate) fn partition_key(event: &WeatherEvent) -> Result<&str, StorageError> {
    if event.location_name.is_empty() {
        return Err(StorageError::MissingKey);
    }
    Ok(&event.location_name)
}
