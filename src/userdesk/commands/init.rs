use crate::commands::{CmdMessage, CmdResult, UserdeskPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &UserdeskPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized userdesk store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}
