use serde::Deserialize;
use serde_json::Number;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Unit system requested from the current-conditions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    Standard,
    Metric,
    #[default]
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a direct geocoding response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeMatch {
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl GeocodeMatch {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// "New York, New York, US" style label for logging.
    pub fn label(&self) -> String {
        [self.name.as_deref(), self.state.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Payload of the current-conditions endpoint.
///
/// Every field is optional; validation happens when the payload is turned
/// into [`crate::CurrentConditions`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OneCallResponse {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub timezone_offset: Option<i64>,
    pub current: Option<CurrentSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentSection {
    pub dt: Option<i64>,
    /// Numbers stay as sent so they print the way the API wrote them.
    pub temp: Option<Number>,
    pub feels_like: Option<Number>,
    pub humidity: Option<u8>,
    pub wind_speed: Option<Number>,
    /// Meters.
    pub visibility: Option<f64>,
    #[serde(default)]
    pub weather: Vec<WeatherEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherEntry {
    pub id: Option<u32>,
    pub main: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_default_to_imperial() {
        assert_eq!(Units::default(), Units::Imperial);
        assert_eq!(Units::default().as_str(), "imperial");
        assert_eq!(Units::Metric.to_string(), "metric");
    }

    #[test]
    fn geocode_match_label_skips_missing_parts() {
        let m: GeocodeMatch = serde_json::from_str(
            r#"{"name":"Albany","lat":42.65,"lon":-73.75,"country":"US"}"#,
        )
        .expect("valid match");

        assert_eq!(m.label(), "Albany, US");
        assert_eq!(m.coordinates(), Coordinates::new(42.65, -73.75));
    }

    #[test]
    fn one_call_response_tolerates_missing_fields() {
        let parsed: OneCallResponse =
            serde_json::from_str(r#"{"lat":1.0,"current":{"temp":50.0}}"#).expect("valid json");

        let current = parsed.current.expect("current section");
        assert_eq!(current.temp.and_then(|t| t.as_f64()), Some(50.0));
        assert_eq!(current.visibility, None);
        assert!(current.weather.is_empty());
    }
}
