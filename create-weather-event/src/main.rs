use create_weather_event::{function_handler, Config, WeatherEventIngestHandler};
use lambda_runtime::{service_fn, Error};
use std::env::var;
use std::str::FromStr;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(None); // use the env var or the default

    // the config is read once and stays the same for all invocations
    let config = Config::from_env()?;
    info!(
        "Table: {}, region: {}, endpoint: {}",
        config.table_name,
        config.region.as_deref().unwrap_or("default"),
        config.endpoint_url.as_deref().unwrap_or("default")
    );

    let handler = WeatherEventIngestHandler::from_config(&config).await;
    let handler = &handler;

    if let Err(e) = lambda_runtime::run(service_fn(move |event| function_handler(handler, event))).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

const TRACING_LEVEL_ENV_VAR: &str = "WEATHER_EVENT_TRACING_LEVEL";

/// Initializes the tracing subscriber.
/// * tracing_level: pass None to take it from WEATHER_EVENT_TRACING_LEVEL env var or default to INFO
fn init_tracing(tracing_level: Option<tracing::Level>) {
    let (tracing_level, invalid_level) = match tracing_level {
        Some(v) => (v, None),
        None => match parse_tracing_level(var(TRACING_LEVEL_ENV_VAR).ok().as_deref()) {
            Ok(v) => (v, None),
            Err(v) => (tracing::Level::INFO, Some(v)),
        },
    };

    // CloudWatch adds its own timestamps and does not render colors
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_ansi(false)
        .without_time()
        .compact()
        .init();

    if let Some(v) = invalid_level {
        warn!(
            "Invalid tracing level in {}: {}. Use trace, debug, info, warn or error. Using INFO.",
            TRACING_LEVEL_ENV_VAR, v
        );
    }
}

/// Returns INFO if the value is not set or the unparsed value if it is not a valid level.
fn parse_tracing_level(value: Option<&str>) -> Result<tracing::Level, String> {
    match value {
        None => Ok(tracing::Level::INFO),
        Some(v) => tracing::Level::from_str(v.trim()).map_err(|_| v.to_string()),
    }
}
