use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserdeskError};
use crate::model::{UserFields, UserRecord};
use crate::store::DataStore;
use std::path::PathBuf;
use tracing::info;

/// Appends a new record with the next id. Does not validate.
pub fn run<S: DataStore>(store: &mut S, fields: UserFields) -> Result<CmdResult> {
    let mut table = store.load()?;
    let id = table
        .next_id()
        .ok_or_else(|| UserdeskError::StoreUnavailable {
            path: PathBuf::from(store.location()),
            reason: "no ids left: highest id is already the maximum".to_string(),
        })?;
    let user = UserRecord::new(id, fields);
    table.users.push(user.clone());
    store.save(&table)?;

    info!(id = %user.id, total = table.users.len(), "user created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User created ({}): {}",
        user.id, user.name
    )));
    Ok(result.with_affected_users(vec![user]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, get, list};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn ann() -> UserFields {
        UserFields::new("Ann", "", "secret123", "secret123")
    }

    #[test]
    fn first_user_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ann()).unwrap();
        assert_eq!(result.affected_users[0].id, "1");
        assert_eq!(list::run(&store).unwrap().listed_users.len(), 1);
    }

    #[test]
    fn created_user_reads_back() {
        let mut store = InMemoryStore::new();
        let fields = UserFields::new("Bo", "bo@example.com", "pw", "pw");
        let id = run(&mut store, fields.clone()).unwrap().affected_users[0]
            .id
            .clone();

        let found = get::find_by_id(&store, &id).unwrap().unwrap();
        assert_eq!(found.fields(), fields);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = StoreFixture::new().with_users(2).store;
        delete::run(&mut store, "2").unwrap();
        let result = run(&mut store, ann()).unwrap();
        assert_eq!(result.affected_users[0].id, "3");
    }

    #[test]
    fn refuses_to_overwrite_unreadable_store() {
        let mut store = StoreFixture::new().with_users(1).store.unreadable();
        assert!(matches!(
            run(&mut store, ann()),
            Err(UserdeskError::StoreUnavailable { .. })
        ));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn surfaces_write_failures() {
        let mut store = InMemoryStore::new().read_only();
        assert!(matches!(
            run(&mut store, ann()),
            Err(UserdeskError::PersistenceFailed { .. })
        ));
    }

    #[test]
    fn exhausted_ids_are_an_error_not_a_panic() {
        let mut store = StoreFixture::new()
            .with_raw_user(&u64::MAX.to_string(), "Last")
            .store;
        assert!(matches!(
            run(&mut store, ann()),
            Err(UserdeskError::StoreUnavailable { .. })
        ));
        assert_eq!(store.saves(), 0);
    }
}
