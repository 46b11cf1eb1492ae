use std::fmt;

use crate::{error::WeatherError, model::Units};

pub const DEFAULT_GEOCODE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const DEFAULT_ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Runtime configuration for one lookup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub units: Units,
    pub geocode_url: String,
    pub onecall_url: String,
}

impl Config {
    /// Environment variable holding the OpenWeather API key.
    pub const API_KEY_VAR: &'static str = "WEATHER_API_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            units: Units::default(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            onecall_url: DEFAULT_ONECALL_URL.to_string(),
        }
    }

    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup. An empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = lookup(Self::API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey { var: Self::API_KEY_VAR })?;

        Ok(Self::new(api_key))
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Point both requests somewhere else, e.g. a mock server.
    pub fn with_endpoints(
        mut self,
        geocode_url: impl Into<String>,
        onecall_url: impl Into<String>,
    ) -> Self {
        self.geocode_url = geocode_url.into();
        self.onecall_url = onecall_url.into();
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("units", &self.units)
            .field("geocode_url", &self.geocode_url)
            .field("onecall_url", &self.onecall_url)
            .finish()
    }
}
