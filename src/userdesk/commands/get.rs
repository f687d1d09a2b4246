use crate::commands::CmdResult;
use crate::error::{Result, UserdeskError};
use crate::model::UserRecord;
use crate::store::DataStore;

use super::helpers::load_lenient;

/// First record whose id matches, if any.
pub fn find_by_id<S: DataStore>(store: &S, id: &str) -> Result<Option<UserRecord>> {
    let table = load_lenient(store)?;
    Ok(table.find(id).cloned())
}

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let user = find_by_id(store, id)?.ok_or_else(|| UserdeskError::NotFound(id.to_string()))?;
    Ok(CmdResult::default().with_listed_users(vec![user]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_id() {
        let store = StoreFixture::new().with_users(3).store;
        let result = run(&store, "2").unwrap();
        assert_eq!(result.listed_users[0].name, "User 2");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = StoreFixture::new().with_users(1).store;
        assert!(find_by_id(&store, "9").unwrap().is_none());
        assert!(matches!(
            run(&store, "9"),
            Err(UserdeskError::NotFound(id)) if id == "9"
        ));
    }

    #[test]
    fn first_duplicate_wins() {
        let store = StoreFixture::new()
            .with_raw_user("1", "First")
            .with_raw_user("1", "Second")
            .store;
        assert_eq!(find_by_id(&store, "1").unwrap().unwrap().name, "First");
    }

    #[test]
    fn unreadable_store_finds_nothing() {
        let store = StoreFixture::new().with_users(1).store.unreadable();
        assert!(find_by_id(&store, "1").unwrap().is_none());
    }
}
