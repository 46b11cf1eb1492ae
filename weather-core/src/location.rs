use crate::error::WeatherError;

/// Where the city and state for a lookup come from.
pub trait LocationSource {
    fn city(&mut self) -> Result<String, WeatherError>;
    fn state(&mut self) -> Result<String, WeatherError>;
}

/// Pre-supplied city and state.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    pub city: String,
    pub state: String,
}

impl FixedLocation {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self { city: city.into(), state: state.into() }
    }
}

impl LocationSource for FixedLocation {
    fn city(&mut self) -> Result<String, WeatherError> {
        Ok(self.city.clone())
    }

    fn state(&mut self) -> Result<String, WeatherError> {
        Ok(self.state.clone())
    }
}
