use std::{fmt, io::Write};

use serde_json::Number;

use crate::{
    error::{Endpoint, WeatherError},
    model::OneCallResponse,
};

pub const METERS_PER_MILE: f64 = 1609.0;

/// The subset of current conditions shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Number,
    pub feels_like: Number,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed: Number,
    pub visibility_m: f64,
}

impl CurrentConditions {
    /// Pull the displayed fields out of a payload, failing on the first missing one.
    pub fn from_payload(payload: &OneCallResponse) -> Result<Self, WeatherError> {
        let current = payload.current.as_ref().ok_or_else(|| missing("current"))?;

        let description = current
            .weather
            .first()
            .ok_or_else(|| {
                WeatherError::malformed(Endpoint::CurrentConditions, "current.weather is empty")
            })?
            .description
            .as_deref()
            .ok_or_else(|| missing("current.weather[0].description"))?;

        Ok(Self {
            temperature: current.temp.clone().ok_or_else(|| missing("current.temp"))?,
            feels_like: current.feels_like.clone().ok_or_else(|| missing("current.feels_like"))?,
            description: capitalize(description),
            humidity_pct: current.humidity.ok_or_else(|| missing("current.humidity"))?,
            wind_speed: current.wind_speed.clone().ok_or_else(|| missing("current.wind_speed"))?,
            visibility_m: current.visibility.ok_or_else(|| missing("current.visibility"))?,
        })
    }

    pub fn visibility_miles(&self) -> f64 {
        self.visibility_m / METERS_PER_MILE
    }
}

impl fmt::Display for CurrentConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Current Weather for Now:")?;
        writeln!(f, "Temperature: {}°F, feels like {}°F", self.temperature, self.feels_like)?;
        writeln!(f, "Condition: {}", self.description)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        writeln!(f, "Wind Speed: {} mph", self.wind_speed)?;
        writeln!(f, "Visibility: {:.2} miles", self.visibility_miles())
    }
}

/// Write the fixed-format report.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    conditions: &CurrentConditions,
) -> std::io::Result<()> {
    write!(out, "{conditions}")
}

fn missing(field: &str) -> WeatherError {
    WeatherError::malformed(Endpoint::CurrentConditions, format!("missing {field}"))
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
