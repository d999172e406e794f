use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunables of the calculator engine and its formatter.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum number of digits (`0`-`9`) an operand may hold while typing.
    pub max_digits: usize,
    /// Fractional digits kept by the result formatter before truncation.
    pub max_fraction_digits: usize,
    /// Rendered width above which the display falls back to exponential form.
    pub display_width: Option<usize>,
    /// Thousands separator inserted into the integer part on display.
    pub grouping_separator: char,
    /// Whether `=` with nothing pending re-applies the last operator and operand.
    pub repeat_last_operation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_digits: 9,
            max_fraction_digits: 10,
            display_width: Some(10),
            grouping_separator: ',',
            repeat_last_operation: false,
        }
    }
}

impl EngineConfig {
    /// Reads and validates a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_digits == 0 {
            return Err(CalcError::ConfigError(
                "max_digits must be at least 1".to_string(),
            ));
        }
        if self.display_width == Some(0) {
            return Err(CalcError::ConfigError(
                "display_width must be at least 1".to_string(),
            ));
        }
        if self.grouping_separator.is_ascii_digit()
            || matches!(self.grouping_separator, '.' | '-' | 'e')
        {
            return Err(CalcError::ConfigError(format!(
                "grouping_separator '{}' clashes with number syntax",
                self.grouping_separator
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"max_digits": 12}"#).unwrap();
        assert_eq!(config.max_digits, 12);
        assert_eq!(config.max_fraction_digits, 10);
        assert_eq!(config.display_width, Some(10));
        assert!(!config.repeat_last_operation);
    }

    #[test]
    fn test_null_display_width_disables_fallback() {
        let config: EngineConfig = serde_json::from_str(r#"{"display_width": null}"#).unwrap();
        assert_eq!(config.display_width, None);
    }

    #[test]
    fn test_zero_digit_cap_rejected() {
        let config = EngineConfig {
            max_digits: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(CalcError::ConfigError(_))));
    }

    #[test]
    fn test_digit_separator_rejected() {
        let config = EngineConfig {
            grouping_separator: '7',
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(CalcError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<EngineConfig, _> =
            serde_json::from_str(r#"{"precision": 3}"#);
        assert!(result.is_err());
    }
}
