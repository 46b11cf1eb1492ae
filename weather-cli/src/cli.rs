use std::io::Write;

use anyhow::Context;
use cityweather_core::{Config, LocationSource, Outcome, Pipeline, WeatherError};
use clap::Parser;
use tracing::info;

use crate::prompt::PromptedLocation;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather for a US city",
    after_help = "The OpenWeather API key is read from WEATHER_API_KEY."
)]
pub struct Cli {
    /// City name; read from stdin when omitted.
    #[arg(long)]
    pub city: Option<String>,

    /// State code, e.g. NY; read from stdin when omitted.
    #[arg(long)]
    pub state: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut source = PromptedLocation::new(self.city, self.state);
        let mut stdout = std::io::stdout().lock();

        match lookup(Config::from_env(), &mut source, &mut stdout).await? {
            Outcome::Reported(_) => info!("report printed"),
            Outcome::LocationNotFound => info!("no matching location"),
            Outcome::WeatherUnavailable => info!("no current conditions in response"),
        }

        Ok(())
    }
}

/// Run one lookup with an already resolved configuration.
///
/// A configuration error is returned before `source` is asked for anything
/// and before any request is sent.
pub async fn lookup<S, W>(
    config: Result<Config, WeatherError>,
    source: &mut S,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    S: LocationSource + ?Sized,
    W: Write + ?Sized,
{
    let config = config.context("Missing configuration")?;

    Pipeline::from_config(&config)
        .run(source, out)
        .await
        .context("Weather lookup failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Answers with fixed values and counts how often it was asked.
    #[derive(Debug, Default)]
    struct CountingSource {
        calls: usize,
    }

    impl LocationSource for CountingSource {
        fn city(&mut self) -> Result<String, WeatherError> {
            self.calls += 1;
            Ok("Atlantis".to_string())
        }

        fn state(&mut self) -> Result<String, WeatherError> {
            self.calls += 1;
            Ok("ZZ".to_string())
        }
    }

    fn config_from(
        server: &MockServer,
        key: Option<&str>,
    ) -> Result<Config, WeatherError> {
        Config::from_lookup(|_| key.map(str::to_string)).map(|cfg| {
            cfg.with_endpoints(
                format!("{}/geo/1.0/direct", server.uri()),
                format!("{}/data/3.0/onecall", server.uri()),
            )
        })
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_prompting_or_requesting() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let mut source = CountingSource::default();
        let mut out = Vec::new();
        let err = lookup(config_from(&server, None), &mut source, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WeatherError>(),
            Some(WeatherError::MissingApiKey { var: "WEATHER_API_KEY" })
        ));
        assert_eq!(source.calls, 0);
        assert!(out.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn configured_key_prompts_and_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut source = CountingSource::default();
        let mut out = Vec::new();
        let outcome = lookup(config_from(&server, Some("KEY")), &mut source, &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::LocationNotFound);
        assert_eq!(source.calls, 2);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_prompt_for_both() {
        let cli = Cli::try_parse_from(["cityweather"]).expect("no args is valid");
        assert_eq!(cli.city, None);
        assert_eq!(cli.state, None);
    }

    #[test]
    fn city_and_state_flags_are_parsed() {
        let cli = Cli::try_parse_from(["cityweather", "--city", "New York", "--state", "NY"])
            .expect("flags are valid");

        assert_eq!(cli.city.as_deref(), Some("New York"));
        assert_eq!(cli.state.as_deref(), Some("NY"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["cityweather", "Boston"]).is_err());
    }
}
