use crate::{
    error::WeatherError,
    model::{Coordinates, OneCallResponse, Units},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Remote source of coordinates and current conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a US city/state pair. `Ok(None)` means no match.
    async fn geocode(
        &self,
        city: &str,
        state: &str,
    ) -> Result<Option<Coordinates>, WeatherError>;

    /// Fetch the current-conditions payload for a coordinate pair.
    async fn current_conditions(
        &self,
        coords: Coordinates,
        units: Units,
    ) -> Result<OneCallResponse, WeatherError>;
}
