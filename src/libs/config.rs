//! Configuration management for the todos client.
//!
//! The configuration is a small JSON document stored in the platform data
//! directory (see [`DataStorage`]). It holds two optional modules:
//!
//! - **api**: base URL of the remote to-do API (defaults to the public
//!   students API when absent)
//! - **user_id**: the user whose list is shown
//!
//! The user id can also come from the `TODOS_USER_ID` environment variable
//! (a `.env` file is honoured), which takes precedence over the file. Without
//! a user id the application shows a "no user configured" screen instead of
//! the list. An id of `0` counts as not configured.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(user_id) = config.resolve_user_id()? {
//!     println!("Showing todos of user {} from {}", user_id, config.api().api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::ApiConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured user id.
pub const USER_ID_ENV: &str = "TODOS_USER_ID";

/// A configurable module as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the selection
    pub key: String,
    /// Name shown to the user
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file, or returns the default configuration
    /// when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether a file was removed.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// API settings, falling back to the defaults when the module is not configured.
    pub fn api(&self) -> ApiConfig {
        self.api.clone().unwrap_or_default()
    }

    /// The effective user id: `TODOS_USER_ID` if set, else the configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is set but not a number.
    pub fn resolve_user_id(&self) -> Result<Option<u32>> {
        self.resolve_user_id_from(env::var(USER_ID_ENV).ok().as_deref())
    }

    pub fn resolve_user_id_from(&self, env_value: Option<&str>) -> Result<Option<u32>> {
        let user_id = match env_value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Some(
                value
                    .parse::<u32>()
                    .map_err(|_| msg_error_anyhow!(Message::InvalidUserId(value.to_string())))?,
            ),
            None => self.user_id,
        };

        Ok(user_id.filter(|id| *id != 0))
    }

    /// Runs the interactive setup wizard, starting from the saved configuration.
    ///
    /// # Errors
    ///
    /// Fails before prompting if the saved file cannot be parsed, so it is never
    /// overwritten with defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;

        let modules = vec![
            ApiConfig::module(),
            ConfigModule {
                key: "user".to_string(),
                name: "User".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "user" => {
                    msg_print!(Message::ConfigModuleUser);
                    config.user_id = Some(
                        Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUserId.to_string())
                            .default(config.user_id.unwrap_or_default())
                            .interact_text()?,
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
