use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{Endpoint, WeatherError},
    model::{Coordinates, GeocodeMatch, OneCallResponse, Units},
};

use super::WeatherProvider;

const EXCLUDED_SECTIONS: &str = "minutely,hourly,daily,alerts";

/// Client for the OpenWeather geocoding and One Call endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    geocode_url: String,
    onecall_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            geocode_url: config.geocode_url.clone(),
            onecall_url: config.onecall_url.clone(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        debug!(%endpoint, url, "sending request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| WeatherError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::Transport { endpoint, source })?;

        if !status.is_success() {
            warn!(%endpoint, %status, "request rejected");
            return Err(WeatherError::Status { endpoint, status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::malformed(endpoint, format!("invalid JSON: {e}")))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn geocode(
        &self,
        city: &str,
        state: &str,
    ) -> Result<Option<Coordinates>, WeatherError> {
        let query = [
            ("q", format!("{city},{state},US")),
            ("limit", "1".to_string()),
            ("appid", self.api_key.clone()),
        ];

        let matches: Vec<GeocodeMatch> =
            self.get_json(Endpoint::Geocoding, &self.geocode_url, &query).await?;

        match matches.first() {
            Some(found) => {
                info!(place = %found.label(), lat = found.lat, lon = found.lon, "resolved location");
                Ok(Some(found.coordinates()))
            }
            None => {
                info!(city, state, "no geocoding match");
                Ok(None)
            }
        }
    }

    async fn current_conditions(
        &self,
        coords: Coordinates,
        units: Units,
    ) -> Result<OneCallResponse, WeatherError> {
        let query = [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("exclude", EXCLUDED_SECTIONS.to_string()),
            ("units", units.as_str().to_string()),
        ];

        self.get_json(Endpoint::CurrentConditions, &self.onecall_url, &query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("nope"), "nope");
    }

    #[test]
    fn long_body_is_truncated() {
        let body = "x".repeat(500);
        let out = truncate_body(&body);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = format!("{}°{}", "a".repeat(199), "b".repeat(50));
        let out = truncate_body(&body);
        assert_eq!(out, format!("{}...", "a".repeat(199)));
    }

    #[test]
    fn provider_takes_endpoints_from_config() {
        let cfg = Config::new("KEY").with_endpoints("http://geo", "http://onecall");
        let provider = OpenWeatherProvider::new(&cfg);

        assert_eq!(provider.geocode_url, "http://geo");
        assert_eq!(provider.onecall_url, "http://onecall");
        assert_eq!(provider.api_key, "KEY");
    }
}
