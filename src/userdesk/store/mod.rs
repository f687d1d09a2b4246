//! # Storage Layer
//!
//! The [`DataStore`] trait is deliberately coarse: a store loads the whole
//! [`UserTable`] and saves the whole [`UserTable`]. Every operation in
//! `commands/` is a read-modify-write over that table, so the logic is written
//! once and both backends behave the same.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── users.json          # JSON array of user records
//! ├── users.seq.json      # {"last_id": N}, the id counter
//! └── config.json         # Data directory configuration
//! ```
//!
//! ## Id Assignment
//!
//! Ids are decimal strings handed out from a counter that only grows. The
//! counter lives beside the users file, so deleting the newest user does not
//! make its id available again. Files written without a counter continue
//! after their highest numeric id.
//!
//! ## Missing vs Corrupt
//!
//! A missing users file is a fresh store. A file that cannot be read or parsed
//! is reported as [`UserdeskError::StoreUnavailable`]; read-only commands
//! degrade that to an empty listing, mutating commands refuse to run.
//!
//! [`UserdeskError::StoreUnavailable`]: crate::error::UserdeskError::StoreUnavailable

use crate::error::Result;
use crate::model::UserRecord;

pub mod fs;
pub mod memory;

/// Full contents of a store: the records, in file order, and the id counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTable {
    pub users: Vec<UserRecord>,
    pub last_id: u64,
}

impl UserTable {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users, last_id: 0 }
    }

    /// Reserves the next id and returns it, or `None` once `u64::MAX` is taken.
    pub fn next_id(&mut self) -> Option<String> {
        let highest = self
            .users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next = self
            .last_id
            .max(highest)
            .max(self.users.len() as u64)
            .checked_add(1)?;
        self.last_id = next;
        Some(next.to_string())
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Drops every record with the given id and returns how many went.
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        before - self.users.len()
    }
}

/// Whole-table persistence for user records.
pub trait DataStore {
    /// Load everything. A store that has never been written loads empty.
    fn load(&self) -> Result<UserTable>;

    /// Replace everything.
    fn save(&mut self, table: &UserTable) -> Result<()>;

    /// Human-readable location of the backing data, for messages.
    fn location(&self) -> String;
}
