use std::io::Write;

use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::WeatherError,
    location::LocationSource,
    model::Units,
    provider::{OpenWeatherProvider, WeatherProvider},
    report::{CurrentConditions, write_report},
};

pub const CITY_NOT_FOUND: &str = "City not found. Please check the city and state name.";
pub const COORDINATES_UNAVAILABLE: &str = "Failed to retrieve coordinates.";
pub const WEATHER_UNAVAILABLE: &str = "Failed to retrieve weather data.";

/// How a run ended when no error occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reported(CurrentConditions),
    LocationNotFound,
    WeatherUnavailable,
}

/// Geocode, fetch current conditions, print the report.
#[derive(Debug)]
pub struct Pipeline<P = OpenWeatherProvider> {
    provider: P,
    units: Units,
}

impl Pipeline<OpenWeatherProvider> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(OpenWeatherProvider::new(config), config.units)
    }
}

impl<P: WeatherProvider> Pipeline<P> {
    pub fn new(provider: P, units: Units) -> Self {
        Self { provider, units }
    }

    /// Run one lookup, writing diagnostics and the report to `out`.
    ///
    /// Errors are returned before anything is written for the failing step.
    #[instrument(skip_all)]
    pub async fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<Outcome, WeatherError>
    where
        S: LocationSource + ?Sized,
        W: Write + ?Sized,
    {
        let city = source.city()?;
        let state = source.state()?;
        debug!(%city, %state, "looking up location");

        let Some(coords) = self.provider.geocode(&city, &state).await? else {
            writeln!(out, "{CITY_NOT_FOUND}").map_err(WeatherError::Output)?;
            writeln!(out, "{COORDINATES_UNAVAILABLE}").map_err(WeatherError::Output)?;
            return Ok(Outcome::LocationNotFound);
        };

        let payload = self.provider.current_conditions(coords, self.units).await?;
        if payload.current.is_none() {
            writeln!(out, "{WEATHER_UNAVAILABLE}").map_err(WeatherError::Output)?;
            return Ok(Outcome::WeatherUnavailable);
        }

        let conditions = CurrentConditions::from_payload(&payload)?;
        write_report(out, &conditions).map_err(WeatherError::Output)?;

        Ok(Outcome::Reported(conditions))
    }
}
