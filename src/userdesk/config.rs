use crate::error::{Result, UserdeskError};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_USERS_FILE: &str = "users.json";

pub const KEY_USERS_FILE: &str = "users-file";
pub const KEY_PRETTY_JSON: &str = "pretty-json";

/// Configuration for a data directory, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserdeskConfig {
    /// Users file name, relative to the data directory
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// Pretty-print the users file instead of writing one line
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

impl Default for UserdeskConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            pretty_json: false,
        }
    }
}

impl UserdeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UserdeskConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_USERS_FILE, KEY_PRETTY_JSON]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_USERS_FILE => Some(self.users_file.clone()),
            KEY_PRETTY_JSON => Some(self.pretty_json.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_USERS_FILE => {
                let name = value.trim();
                if name.is_empty() || Path::new(name).file_name() != Some(OsStr::new(name)) {
                    return Err(UserdeskError::Config(format!(
                        "{} must be a plain file name, got '{}'",
                        KEY_USERS_FILE, value
                    )));
                }
                self.users_file = name.to_string();
            }
            KEY_PRETTY_JSON => {
                self.pretty_json = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(UserdeskError::Config(format!(
                            "{} expects true or false, got '{}'",
                            KEY_PRETTY_JSON, value
                        )))
                    }
                };
            }
            _ => {
                return Err(UserdeskError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
