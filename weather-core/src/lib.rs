//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration and the API credential
//! - The provider abstraction and its OpenWeather implementation
//! - Payload models and the fixed-format current-conditions report
//! - The geocode → fetch → report pipeline
//!
//! It is used by `cityweather`, but the pipeline takes its provider and
//! location source as parameters so it can be driven from tests as well.

pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::{Endpoint, WeatherError};
pub use location::{FixedLocation, LocationSource};
pub use model::{Coordinates, OneCallResponse, Units};
pub use pipeline::{Outcome, Pipeline};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use report::{CurrentConditions, write_report};
