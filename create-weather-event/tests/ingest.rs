use create_weather_event::{
    function_handler, IngestError, MemoryStore, RequestEnvelope, StorageError, WeatherEvent, WeatherEventIngestHandler,
    WeatherEventStore,
};
use lambda_runtime::{Context, LambdaEvent};

const BROOKLYN: &str =
    r#"{"locationName":"Brooklyn","temperature":91.0,"timestamp":1564428897,"latitude":40.70,"longitude":-73.99}"#;

fn brooklyn() -> WeatherEvent {
    WeatherEvent {
        location_name: "Brooklyn".to_string(),
        temperature: Some(91.0),
        timestamp: Some(1564428897),
        latitude: Some(40.70),
        longitude: Some(-73.99),
    }
}

fn request(body: &str) -> RequestEnvelope {
    RequestEnvelope { body: body.to_string() }
}

#[tokio::test]
async fn apply_returns_stored_event() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let response = handler.apply(request(BROOKLYN)).await.expect("expected Ok(_) value");

    assert_eq!(response.status_code, 200);

    // key order may differ, values must match
    let expected: serde_json::Value = serde_json::from_str(BROOKLYN).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn apply_body_matches_serialized_event() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());
    let json = serde_json::to_string(&brooklyn()).unwrap();

    let response = handler.apply(request(&json)).await.unwrap();

    assert_eq!(response.body, json);
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn put_item_persists_event() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let stored = handler.put_item(BROOKLYN).await.unwrap();

    assert_eq!(stored, brooklyn());
    assert_eq!(handler.store().get_item("Brooklyn").await.unwrap(), Some(brooklyn()));
}

#[tokio::test]
async fn last_write_wins() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());
    let second = WeatherEvent {
        temperature: Some(64.5),
        timestamp: Some(1564430000),
        ..brooklyn()
    };

    handler.apply(request(BROOKLYN)).await.unwrap();
    let response = handler
        .apply(request(&serde_json::to_string(&second).unwrap()))
        .await
        .unwrap();

    let returned: WeatherEvent = serde_json::from_str(&response.body).unwrap();
    assert_eq!(returned, second);
    assert_eq!(handler.store().get_item("Brooklyn").await.unwrap(), Some(second));
    assert_eq!(handler.store().len().await, 1);
}

#[tokio::test]
async fn truncated_json_fails() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let result = handler.apply(request(&BROOKLYN[5..])).await;

    assert!(matches!(result, Err(IngestError::Parse(_))));
    assert!(handler.store().is_empty().await);
}

#[tokio::test]
async fn incompatible_shape_fails() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let result = handler.apply(request(r#"{"locationName":"Brooklyn","temperature":"hot"}"#)).await;

    assert!(matches!(result, Err(IngestError::Parse(_))));
}

#[tokio::test]
async fn array_body_fails() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let result = handler.apply(request(r#"["Brooklyn",91.0,1564428897,40.7,-73.99]"#)).await;

    assert!(matches!(result, Err(IngestError::Parse(_))));
    assert!(handler.store().is_empty().await);
}

#[tokio::test]
async fn unknown_field_fails() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let result = handler.apply(request(r#"{"locationName":"Brooklyn","temperature":91.0,"humidity":80}"#)).await;

    assert!(matches!(result, Err(IngestError::Parse(_))));
    assert!(handler.store().is_empty().await);
}

#[tokio::test]
async fn missing_fields_are_stored_as_null() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let response = handler.apply(request(r#"{"locationName":"Oslo"}"#)).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["locationName"], "Oslo");
    assert!(body["temperature"].is_null());
    assert!(body["timestamp"].is_null());
}

#[tokio::test]
async fn missing_location_name_is_a_storage_error() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());

    let result = handler.apply(request(r#"{"temperature":10.0}"#)).await;

    assert!(matches!(result, Err(IngestError::Storage(StorageError::MissingKey))));
}

/// A store that accepts writes but never finds anything, e.g. a lagging replica
struct ForgetfulStore;

impl WeatherEventStore for ForgetfulStore {
    async fn put_item(&self, _event: &WeatherEvent) -> Result<(), StorageError> {
        Ok(())
    }

    async fn get_item(&self, _location_name: &str) -> Result<Option<WeatherEvent>, StorageError> {
        Ok(None)
    }
}

#[tokio::test]
async fn empty_read_back_fails() {
    let handler = WeatherEventIngestHandler::new(ForgetfulStore);

    let result = handler.apply(request(BROOKLYN)).await;

    match result {
        Err(IngestError::Storage(StorageError::NotFound(key))) => assert_eq!(key, "Brooklyn"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn function_handler_returns_envelope() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());
    let event = LambdaEvent::new(request(BROOKLYN), Context::default());

    let response = function_handler(&handler, event).await.expect("expected Ok(_) value");

    let envelope = serde_json::to_value(&response).unwrap();
    assert_eq!(envelope["statusCode"], 200);
    let body: WeatherEvent = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, brooklyn());
}

#[tokio::test]
async fn function_handler_raises_invocation_error() {
    let handler = WeatherEventIngestHandler::new(MemoryStore::new());
    let event = LambdaEvent::new(request(&BROOKLYN[5..]), Context::default());

    let err = function_handler(&handler, event).await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse the weather event"));
}
