use std::fmt;

use thiserror::Error;

/// Remote endpoint a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    CurrentConditions,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::CurrentConditions => "current-conditions",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("{var} environment variable not set")]
    MissingApiKey { var: &'static str },

    #[error("Failed to send {endpoint} request")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed {endpoint} response: {reason}")]
    MalformedResponse { endpoint: Endpoint, reason: String },

    #[error("Failed to read {what}")]
    Input {
        what: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write output")]
    Output(#[source] std::io::Error),
}

impl WeatherError {
    pub(crate) fn malformed(endpoint: Endpoint, reason: impl Into<String>) -> Self {
        WeatherError::MalformedResponse { endpoint, reason: reason.into() }
    }

    /// Endpoint involved in the failure, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            WeatherError::Transport { endpoint, .. }
            | WeatherError::Status { endpoint, .. }
            | WeatherError::MalformedResponse { endpoint, .. } => Some(*endpoint),
            WeatherError::MissingApiKey { .. }
            | WeatherError::Input { .. }
            | WeatherError::Output(_) => None,
        }
    }
}
