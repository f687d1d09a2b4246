//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every userdesk operation, whatever front end is in use.
//!
//! ## Responsibilities
//!
//! - **Dispatches** to the command functions in `commands/`
//! - **Serializes store access**: the store sits behind one mutex and every
//!   operation holds it for its whole read-modify-write, so two concurrent
//!   creates can neither lose a record nor hand out the same id
//! - **Validates form submissions** before persisting them
//!   ([`UsersApi::register_user`], [`UsersApi::edit_user`])
//!
//! `UsersApi` is cheap to clone and `Send + Sync` for `Send` stores, so a
//! request layer can hand a clone to every worker.
//!
//! ## What the API Does NOT Do
//!
//! - Business logic: that belongs in `commands/*.rs`
//! - Presentation: it returns [`CmdResult`]s, never strings for a terminal

use crate::commands;
use crate::config::UserdeskConfig;
use crate::error::{Result, UserdeskError};
use crate::model::{UserFields, ValidationReport};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// The main API facade for userdesk operations.
pub struct UsersApi<S: DataStore> {
    store: Arc<Mutex<S>>,
    paths: commands::UserdeskPaths,
}

impl<S: DataStore> Clone for UsersApi<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            paths: self.paths.clone(),
        }
    }
}

impl UsersApi<FileStore> {
    /// Opens the file store configured for `paths.data_dir`.
    pub fn open(paths: commands::UserdeskPaths) -> Result<Self> {
        let config = UserdeskConfig::load(&paths.data_dir)?;
        let store = FileStore::new(paths.users_file(&config)).with_pretty(config.pretty_json);
        debug!(users_file = %store.users_file().display(), "opened file store");
        Ok(Self::new(store, paths))
    }
}

impl<S: DataStore> UsersApi<S> {
    pub fn new(store: S, paths: commands::UserdeskPaths) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            paths,
        }
    }

    pub fn validate_credentials(&self, fields: &UserFields) -> ValidationReport {
        crate::validation::validate_credentials(fields)
    }

    /// Validation report plus the messages a form would show.
    pub fn check_credentials(&self, fields: &UserFields) -> CmdResult {
        commands::validate::run(fields)
    }

    pub fn list_users(&self) -> Result<CmdResult> {
        commands::list::run(&*self.store.lock())
    }

    pub fn get_user(&self, id: &str) -> Result<CmdResult> {
        commands::get::run(&*self.store.lock(), id)
    }

    /// Persists `fields` as given, without validation.
    pub fn create_user(&self, fields: UserFields) -> Result<CmdResult> {
        commands::create::run(&mut *self.store.lock(), fields)
    }

    /// Form submit: validate, then create.
    pub fn register_user(&self, fields: UserFields) -> Result<CmdResult> {
        let report = ensure_valid(&fields)?;
        let mut result = self.create_user(fields)?;
        add_strength_warning(&mut result, report);
        Ok(result.with_report(report))
    }

    pub fn update_user(&self, id: &str, fields: UserFields) -> Result<CmdResult> {
        commands::update::run(&mut *self.store.lock(), id, fields)
    }

    /// Edit form submit: validate, then update.
    pub fn edit_user(&self, id: &str, fields: UserFields) -> Result<CmdResult> {
        let report = ensure_valid(&fields)?;
        let mut result = self.update_user(id, fields)?;
        add_strength_warning(&mut result, report);
        Ok(result.with_report(report))
    }

    pub fn delete_user(&self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut *self.store.lock(), id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::UserdeskPaths {
        &self.paths
    }

    /// Where the records live, for messages.
    pub fn location(&self) -> String {
        self.store.lock().location()
    }
}

fn ensure_valid(fields: &UserFields) -> Result<ValidationReport> {
    let report = crate::validation::validate_credentials(fields);
    if report.all_valid {
        Ok(report)
    } else {
        debug!(?report, "rejected user form");
        Err(UserdeskError::ValidationFailed(report))
    }
}

fn add_strength_warning(result: &mut CmdResult, report: ValidationReport) {
    if report.is_weak() {
        result.add_message(CmdMessage::warning(commands::validate::weak_password_hint()));
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, UserdeskPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::thread;

    fn api_with(store: InMemoryStore) -> UsersApi<InMemoryStore> {
        UsersApi::new(store, UserdeskPaths::new("/nonexistent"))
    }

    #[test]
    fn register_rejects_invalid_form() {
        let api = api_with(InMemoryStore::new());
        let err = api
            .register_user(UserFields::new("", "", "x", "x"))
            .unwrap_err();
        match err {
            UserdeskError::ValidationFailed(report) => {
                assert!(!report.name_valid);
                assert!(!report.all_valid);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(api.list_users().unwrap().listed_users.is_empty());
    }

    #[test]
    fn register_assigns_first_id() {
        let api = api_with(InMemoryStore::new());
        let result = api
            .register_user(UserFields::new("Ann", "", "secret123", "secret123"))
            .unwrap();
        assert_eq!(result.affected_users[0].id, "1");
        assert!(result.report.unwrap().strong_password);
        assert!(!result.has_level(MessageLevel::Warning));
        assert_eq!(api.list_users().unwrap().listed_users.len(), 1);
    }

    #[test]
    fn register_warns_on_weak_password() {
        let api = api_with(InMemoryStore::new());
        let result = api
            .register_user(UserFields::new("Ann", "", "short", "short"))
            .unwrap();
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn edit_validates_before_lookup() {
        let api = api_with(StoreFixture::new().with_users(1).store);
        assert!(matches!(
            api.edit_user("1", UserFields::new("Ann", "", "a", "b")),
            Err(UserdeskError::ValidationFailed(_))
        ));
        assert!(matches!(
            api.edit_user("99", UserFields::new("Ann", "", "a", "a")),
            Err(UserdeskError::NotFound(_))
        ));
    }

    #[test]
    fn get_user_not_found() {
        let api = api_with(InMemoryStore::new());
        assert!(matches!(
            api.get_user("1"),
            Err(UserdeskError::NotFound(_))
        ));
    }

    #[test]
    fn concurrent_registrations_keep_every_record() {
        let api = api_with(InMemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let api = api.clone();
                thread::spawn(move || {
                    let name = format!("user{}", i);
                    api.register_user(UserFields::new(name, "", "secret123", "secret123"))
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = api
            .list_users()
            .unwrap()
            .listed_users
            .iter()
            .map(|u| u.id.parse().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
    }
}
