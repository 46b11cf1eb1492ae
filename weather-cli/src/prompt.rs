use std::io::{self, BufRead, IsTerminal};

use cityweather_core::{LocationSource, WeatherError};
use inquire::Text;

const CITY_PROMPT: &str = "Enter the city name:";
const STATE_PROMPT: &str = "Enter the state code (e.g., NY for New York):";

/// Location taken from flags, falling back to stdin.
///
/// A terminal gets an interactive prompt; piped input is read one line per answer.
#[derive(Debug)]
pub struct PromptedLocation {
    city: Option<String>,
    state: Option<String>,
}

impl PromptedLocation {
    pub fn new(city: Option<String>, state: Option<String>) -> Self {
        Self { city, state }
    }
}

impl LocationSource for PromptedLocation {
    fn city(&mut self) -> Result<String, WeatherError> {
        take_or_prompt(&mut self.city, "city", CITY_PROMPT)
    }

    fn state(&mut self) -> Result<String, WeatherError> {
        take_or_prompt(&mut self.state, "state", STATE_PROMPT)
    }
}

fn take_or_prompt(
    preset: &mut Option<String>,
    what: &'static str,
    message: &str,
) -> Result<String, WeatherError> {
    if let Some(value) = preset.take() {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        Text::new(message).prompt().map_err(|e| input_error(what, e))
    } else {
        read_answer(&mut io::stdin().lock(), what)
    }
}

/// Read one line, without its line ending. End of input is an error.
fn read_answer<R: BufRead + ?Sized>(
    reader: &mut R,
    what: &'static str,
) -> Result<String, WeatherError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| input_error(what, e))?;
    if read == 0 {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "end of input");
        return Err(input_error(what, eof));
    }

    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(line.to_string())
}

fn input_error(
    what: &'static str,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> WeatherError {
    WeatherError::Input { what, source: source.into() }
}
