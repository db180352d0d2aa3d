//! Configuration loading and resolution for the views module.
//!
//! Settings follow a raw/resolved split: the raw struct mirrors the config
//! file before validation, the resolved [`Settings`] is what the rest of
//! the crate consumes. `load_settings` combines an optional config file
//! with `TIMBER`-prefixed environment variables.

use std::path::Path;

use anyhow::{Error, Result, anyhow};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error as ThisError;
use timber_extensions_search::MessageListDefaults;

/// Mirror of the configuration file representation before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    search: SearchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    message_list_limit: Option<u32>,
    message_list_offset: Option<u32>,
}

/// Validated module settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    message_list_limit: u32,
    message_list_offset: u32,
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum SettingsError {
    #[error("search.message_list_limit must be at least 1")]
    ZeroMessageListLimit,
}

impl Default for Settings {
    fn default() -> Self {
        let stock = MessageListDefaults::default();
        Self {
            message_list_limit: stock.limit,
            message_list_offset: stock.offset,
        }
    }
}

impl Settings {
    /// Defaults handed to the built-in `messages` search type.
    #[must_use]
    pub fn message_list_defaults(&self) -> MessageListDefaults {
        MessageListDefaults {
            limit: self.message_list_limit,
            offset: self.message_list_offset,
        }
    }
}

impl RawSettings {
    /// Validate the raw values and fill defaults where required.
    fn resolve(self) -> Result<Settings, SettingsError> {
        let stock = MessageListDefaults::default();
        let limit = self.search.message_list_limit.unwrap_or(stock.limit);
        if limit == 0 {
            return Err(SettingsError::ZeroMessageListLimit);
        }
        Ok(Settings {
            message_list_limit: limit,
            message_list_offset: self.search.message_list_offset.unwrap_or(stock.offset),
        })
    }
}

/// Load settings by combining an optional config file with environment
/// variables (`TIMBER__SEARCH__MESSAGE_LIST_LIMIT=...`).
pub fn load_settings(config_file: Option<&Path>) -> Result<Settings> {
    let mut builder = Config::builder();

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("timber")
            .separator("__")
            .try_parsing(true),
    );

    let raw: RawSettings = builder
        .build()?
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
    raw.resolve().map_err(Error::new)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn stock_settings_match_the_search_package_defaults() {
        let settings = Settings::default();
        assert_eq!(
            settings.message_list_defaults(),
            MessageListDefaults::default()
        );
    }

    #[test]
    fn missing_values_fall_back_to_the_stock_defaults() {
        let settings = RawSettings::default().resolve().expect("resolve");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let raw = RawSettings {
            search: SearchSection {
                message_list_limit: Some(0),
                message_list_offset: None,
            },
        };
        assert_eq!(raw.resolve(), Err(SettingsError::ZeroMessageListLimit));
    }

    #[test]
    fn config_file_overrides_the_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create settings file");
        writeln!(file, "[search]\nmessage_list_limit = 50").expect("write settings");

        let settings = load_settings(Some(file.path())).expect("load settings");
        assert_eq!(settings.message_list_defaults().limit, 50);
        assert_eq!(settings.message_list_defaults().offset, 0);
    }
}
