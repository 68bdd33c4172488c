use crate::config::Config;
use crate::error::{IngestError, StorageError};
use crate::store::{DynamoStore, WeatherEventStore};
use crate::types::{RequestEnvelope, ResponseEnvelope, WeatherEvent};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, error, info};

/// Stores the weather event from the request body and returns it as it was read back from the table.
/// Holds no state other than the store handle, so one instance serves all invocations of the process.
pub struct WeatherEventIngestHandler<S> {
    store: S,
}

impl WeatherEventIngestHandler<DynamoStore> {
    /// Builds the DynamoDB client from the config.
    pub async fn from_config(config: &Config) -> Self {
        Self::new(DynamoStore::from_config(config).await)
    }
}

impl<S: WeatherEventStore> WeatherEventIngestHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses the body, upserts the event, reads it back and returns it with status 200.
    /// The response body is always built from the read-back item, not from the request.
    pub async fn apply(&self, request: RequestEnvelope) -> Result<ResponseEnvelope, IngestError> {
        let stored = self.put_item(&request.body).await?;
        let body = serde_json::to_string(&stored).map_err(IngestError::Serialize)?;

        Ok(ResponseEnvelope::ok(body))
    }

    /// Returns the item as read back after the write.
    pub async fn put_item(&self, body: &str) -> Result<WeatherEvent, IngestError> {
        let event = WeatherEvent::from_json(body)?;

        self.store.put_item(&event).await?;

        let stored = self
            .store
            .get_item(&event.location_name)
            .await?
            .ok_or_else(|| StorageError::NotFound(event.location_name.clone()))?;

        info!("Stored weather event for {}", stored.location_name);

        Ok(stored)
    }
}

/// The adapter between the Lambda runtime and the ingest handler.
/// Any failure is returned as an invocation error with the message of the inner error.
pub async fn function_handler<S: WeatherEventStore>(
    handler: &WeatherEventIngestHandler<S>,
    event: LambdaEvent<RequestEnvelope>,
) -> Result<ResponseEnvelope, Error> {
    let (request, ctx) = event.into_parts();

    debug!("Request ID: {}", ctx.request_id);
    debug!("Body: {}", request.body);

    match handler.apply(request).await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Ingest failed ({}): {}", e.kind(), e);
            Err(Error::from(e.to_string()))
        }
    }
}
