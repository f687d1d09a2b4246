use crate::error::{Result, UserdeskError};
use crate::store::{DataStore, UserTable};
use tracing::warn;

/// Loads the table for read-only commands. A corrupt store reads as empty,
/// with a warning; any other failure still propagates.
pub fn load_lenient<S: DataStore>(store: &S) -> Result<UserTable> {
    match store.load() {
        Ok(table) => Ok(table),
        Err(UserdeskError::StoreUnavailable { path, reason }) => {
            warn!(path = %path.display(), %reason, "store unreadable, treating as empty");
            Ok(UserTable::default())
        }
        Err(e) => Err(e),
    }
}
