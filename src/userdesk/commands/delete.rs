use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

/// Removes every record with `id`. The store is only rewritten when
/// something matched.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut table = store.load()?;
    let removed = table.remove_all(id);
    let mut result = CmdResult::default();

    if removed == 0 {
        result.add_message(CmdMessage::warning(format!("No user with id {}", id)));
        return Ok(result);
    }

    store.save(&table)?;
    info!(%id, removed, "user deleted");

    result.removed = removed;
    result.add_message(CmdMessage::success(format!("User deleted ({})", id)));
    Ok(result)
}
