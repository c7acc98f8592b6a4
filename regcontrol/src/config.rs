use eyre::{Report, WrapErr};
use log::debug;
use registers::OverflowPolicy;
use serde_derive::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

const CONFIG_FILENAME: &str = "regcontrol.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Policy for scaled values that don't fit in their register.
    pub overflow: OverflowPolicy,
    /// Print raw values as hexadecimal rather than decimal.
    pub hex: bool,
}

impl Config {
    /// Reads the config file from the current directory, or returns the defaults if there isn't
    /// one.
    pub fn from_file() -> Result<Config, Report> {
        if !Path::new(CONFIG_FILENAME).exists() {
            debug!("No {} found, using defaults", CONFIG_FILENAME);
            return Ok(Config::default());
        }
        Config::read(CONFIG_FILENAME)
    }

    fn read(filename: &str) -> Result<Config, Report> {
        let config_file =
            read_to_string(filename).wrap_err_with(|| format!("Reading {}", filename))?;
        Ok(toml::from_str(&config_file)?)
    }

    pub fn format_raw(&self, raw: u16) -> String {
        if self.hex {
            format!("{:#06x}", raw)
        } else {
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parsing the example config file should not give any errors.
    #[test]
    fn example_config() {
        let config = Config::read("regcontrol.example.toml").unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Saturate);
        assert!(config.hex);
    }

    /// Parsing an empty config file should give the defaults.
    #[test]
    fn empty_config() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Reject);
        assert!(!config.hex);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(toml::from_str::<Config>(r#"overflow = "wrap""#).is_err());
    }

    #[test]
    fn format_raw() {
        let mut config = Config::default();
        assert_eq!(config.format_raw(16384), "16384");
        config.hex = true;
        assert_eq!(config.format_raw(16384), "0x4000");
    }
}
