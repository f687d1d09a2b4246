use super::{DataStore, UserTable};
use crate::error::{Result, UserdeskError};
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    table: UserTable,
    unreadable: bool,
    read_only: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads fail as if the backing file were corrupt.
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    /// Saves fail as if the backing file were unwritable.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn table(&self) -> &UserTable {
        &self.table
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<UserTable> {
        if self.unreadable {
            return Err(UserdeskError::StoreUnavailable {
                path: PathBuf::from("memory"),
                reason: "simulated corrupt store".to_string(),
            });
        }
        Ok(self.table.clone())
    }

    fn save(&mut self, table: &UserTable) -> Result<()> {
        if self.read_only {
            return Err(UserdeskError::PersistenceFailed {
                path: PathBuf::from("memory"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        self.table = table.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{UserFields, UserRecord};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` users with ids continuing from the current table.
        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("User {}", i + 1);
                let email = format!("user{}@example.com", i + 1);
                self = self.with_user(&name, &email);
            }
            self
        }

        pub fn with_user(mut self, name: &str, email: &str) -> Self {
            let mut table = self.store.table.clone();
            let id = table.next_id().expect("fixture id space");
            table.users.push(UserRecord::new(
                id,
                UserFields::new(name, email, "password123", "password123"),
            ));
            self.store.table = table;
            self
        }

        /// Inserts a record verbatim, without touching the id counter.
        pub fn with_raw_user(mut self, id: &str, name: &str) -> Self {
            self.store.table.users.push(UserRecord::new(
                id,
                UserFields::new(name, "", "password123", "password123"),
            ));
            self
        }
    }
}
