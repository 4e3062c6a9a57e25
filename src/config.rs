//! Board configuration parsed from environment variables.

use crate::consts::ENV_DEFAULT_COLOR;
use crate::error::BoardError;
use crate::palette::Color;

/// Settings applied when a board is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardConfig {
    /// Active color of a fresh board.
    pub default_color: Color,
}

impl BoardConfig {
    /// Build typed board config from environment variables.
    ///
    /// Optional:
    /// - `PINBOARD_DEFAULT_COLOR`: a palette color, default `#FFB6C1`
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ConfigParse`] if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, BoardError> {
        let raw = match std::env::var(ENV_DEFAULT_COLOR) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(BoardError::ConfigParse(format!("{ENV_DEFAULT_COLOR} is not valid unicode")));
            }
        };
        let default_color = parse_default_color(raw.as_deref())?;
        Ok(Self { default_color })
    }
}

fn parse_default_color(raw: Option<&str>) -> Result<Color, BoardError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Color::default()),
        Some(value) => Color::parse(value)
            .map_err(|_| BoardError::ConfigParse(format!("{ENV_DEFAULT_COLOR} is not a palette color: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
