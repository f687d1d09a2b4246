use crate::config::UserdeskConfig;
use crate::model::{UserRecord, ValidationReport};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod init;
pub mod list;
pub mod update;
pub mod validate;

#[derive(Debug, Clone)]
pub struct UserdeskPaths {
    pub data_dir: PathBuf,
}

impl UserdeskPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn users_file(&self, config: &UserdeskConfig) -> PathBuf {
        self.data_dir.join(&config.users_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<UserRecord>,
    pub listed_users: Vec<UserRecord>,
    pub report: Option<ValidationReport>,
    pub removed: usize,
    pub config: Option<UserdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<UserRecord>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_listed_users(mut self, users: Vec<UserRecord>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_report(mut self, report: ValidationReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: UserdeskConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
