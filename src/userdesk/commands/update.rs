use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserdeskError};
use crate::model::UserFields;
use crate::store::DataStore;
use tracing::info;

/// Overwrites the editable fields of the first record with `id`.
pub fn run<S: DataStore>(store: &mut S, id: &str, fields: UserFields) -> Result<CmdResult> {
    let mut table = store.load()?;
    let user = table
        .find_mut(id)
        .ok_or_else(|| UserdeskError::NotFound(id.to_string()))?;
    user.apply(fields);
    let updated = user.clone();
    store.save(&table)?;

    info!(id = %updated.id, "user updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User updated ({}): {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_users(vec![updated]))
}
