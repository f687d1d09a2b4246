use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::load_lenient;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let table = load_lenient(store)?;
    debug!(count = table.users.len(), "listing users");
    Ok(CmdResult::default().with_listed_users(table.users))
}
