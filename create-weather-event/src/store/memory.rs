use super::{partition_key, WeatherEventStore};
use crate::error::StorageError;
use crate::types::WeatherEvent;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// An in-process table for local runs and tests.
/// Follows the same upsert and key rules as the DynamoDB store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, WeatherEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl WeatherEventStore for MemoryStore {
    async fn put_item(&self, event: &WeatherEvent) -> Result<(), StorageError> {
        let key = partition_key(event)?.to_string();
        self.items.write().await.insert(key, event.clone());
        Ok(())
    }

    async fn get_item(&self, location_name: &str) -> Result<Option<WeatherEvent>, StorageError> {
        Ok(self.items.read().await.get(location_name).cloned())
    }
}
