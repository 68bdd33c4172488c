use super::{partition_key, WeatherEventStore, PARTITION_KEY};
use crate::config::Config;
use crate::error::StorageError;
use crate::types::WeatherEvent;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use std::collections::HashMap;
use tracing::debug;

type Item = HashMap<String, AttributeValue>;

/// Weather events stored in a DynamoDB table with `locationName` as the partition key.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Uses an already configured client, e.g. one pointing at DynamoDB Local.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = config.sdk_config().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Creates the locations table with on-demand billing.
    /// Only needed for local setups, the deployed table is managed outside of this function.
    pub async fn create_table(&self) -> Result<(), StorageError> {
        let create_table_error = |message: String| StorageError::CreateTable {
            table: self.table_name.clone(),
            message,
        };

        let key_schema = KeySchemaElement::builder()
            .attribute_name(PARTITION_KEY)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| create_table_error(e.to_string()))?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(PARTITION_KEY)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| create_table_error(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| create_table_error(DisplayErrorContext(&e).to_string()))?;

        debug!("Table created: {}", self.table_name);

        Ok(())
    }
}

impl WeatherEventStore for DynamoStore {
    async fn put_item(&self, event: &WeatherEvent) -> Result<(), StorageError> {
        partition_key(event)?;
        let item = to_attributes(event)?;

        debug!("PutItem into {}: {:?}", self.table_name, item);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StorageError::Put {
                table: self.table_name.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    async fn get_item(&self, location_name: &str) -> Result<Option<WeatherEvent>, StorageError> {
        debug!("GetItem from {}: {}", self.table_name, location_name);

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(location_name.to_string()))
            .send()
            .await
            .map_err(|e| StorageError::Get {
                table: self.table_name.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        match output.item {
            Some(item) => Ok(Some(from_attributes(item)?)),
            None => Ok(None),
        }
    }
}

/// Absent values are stored as NULL attributes.
fn to_attributes(event: &WeatherEvent) -> Result<Item, StorageError> {
    Ok(to_item(event)?)
}

fn from_attributes(item: Item) -> Result<WeatherEvent, StorageError> {
    Ok(from_item(item)?)
}
