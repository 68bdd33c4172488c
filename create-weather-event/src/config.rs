use crate::error::ConfigError;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_types::region::Region;
use std::env::var;
use tracing::debug;

/// Name of the DynamoDB table with the weather events
pub const TABLE_ENV_VAR: &str = "LOCATIONS_TABLE";
/// Set by AWS in the Lambda environment
pub const REGION_ENV_VAR: &str = "AWS_REGION";
/// Optional, e.g. http://localhost:8000 for DynamoDB Local
pub const ENDPOINT_ENV_VAR: &str = "LOCATIONS_TABLE_ENDPOINT";

/// Read once at start-up and never changed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// E.g. locations
    pub table_name: String,
    /// E.g. eu-north-1. The SDK default provider chain is used if None.
    pub region: Option<String>,
    /// Overrides the DynamoDB endpoint, e.g. http://localhost:8000
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Creates a new Config instance from the environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Same as `from_env`, but the values come from `lookup`.
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let table_name = lookup(TABLE_ENV_VAR).ok_or(ConfigError::MissingVar(TABLE_ENV_VAR))?;
        let region = lookup(REGION_ENV_VAR);
        let endpoint_url = lookup(ENDPOINT_ENV_VAR);

        Ok(Self {
            table_name,
            region,
            endpoint_url,
        })
    }

    /// Loads the AWS SDK config with the region and endpoint overrides applied.
    pub async fn sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            debug!("DynamoDB endpoint override: {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }
}
