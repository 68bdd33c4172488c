use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single weather observation as stored in the locations table.
/// `location_name` is the partition key, so a new observation for the same location
/// replaces the previous one.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeatherEvent {
    /// E.g. Brooklyn
    #[serde(default)]
    pub location_name: String,
    pub temperature: Option<f64>,
    /// Epoch seconds, e.g. 1564428897
    pub timestamp: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WeatherEvent {
    /// Parses the JSON text of a request body.
    /// Only a JSON object is accepted, serde would otherwise also take the fields as a positional array.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(body)?;
        serde_json::from_value(Value::Object(fields))
    }
}

/// The invocation payload. `body` holds the raw JSON text of a [WeatherEvent].
///
/// ```json
/// { "body": "{\"locationName\":\"Brooklyn\",\"temperature\":91.0,\"timestamp\":1564428897,\"latitude\":40.7,\"longitude\":-73.99}" }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RequestEnvelope {
    pub body: String,
}

/// The value returned to the Lambda runtime on success.
/// `body` is the JSON of the record as it was read back from the table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn ok(body: String) -> Self {
        Self { status_code: 200, body }
    }
}
