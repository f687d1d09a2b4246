use crate::commands::{CmdMessage, CmdResult, UserdeskPaths};
use crate::config::UserdeskConfig;
use crate::error::{Result, UserdeskError};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &UserdeskPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = UserdeskConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = UserdeskConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            // A broken config.json must not block the command that repairs it.
            let mut config = match UserdeskConfig::load(dir) {
                Ok(config) => config,
                Err(UserdeskError::Serialization(e)) => {
                    warn!(error = %e, "config.json unreadable, rewriting from defaults");
                    result.add_message(CmdMessage::warning(format!(
                        "config.json was unreadable ({}); starting from defaults",
                        e
                    )));
                    UserdeskConfig::default()
                }
                Err(e) => return Err(e),
            };
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(UserdeskError::Config(msg)) => {
                    result.add_message(CmdMessage::error(msg));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.config = Some(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
