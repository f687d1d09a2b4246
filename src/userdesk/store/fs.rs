use super::{DataStore, UserTable};
use crate::error::{Result, UserdeskError};
use crate::model::UserRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Sequence {
    last_id: u64,
}

pub struct FileStore {
    users_file: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(users_file: impl Into<PathBuf>) -> Self {
        Self {
            users_file: users_file.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn users_file(&self) -> &Path {
        &self.users_file
    }

    /// `users.json` keeps its counter in `users.seq.json`.
    pub fn sequence_file(&self) -> PathBuf {
        self.users_file.with_extension("seq.json")
    }

    fn load_users(&self) -> Result<Vec<UserRecord>> {
        let content = match fs::read_to_string(&self.users_file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.users_file.display(), "users file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(UserdeskError::StoreUnavailable {
                    path: self.users_file.clone(),
                    reason: e.to_string(),
                })
            }
        };

        serde_json::from_str(&content).map_err(|e| UserdeskError::StoreUnavailable {
            path: self.users_file.clone(),
            reason: e.to_string(),
        })
    }

    fn load_last_id(&self) -> u64 {
        let path = self.sequence_file();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return 0,
        };
        match serde_json::from_str::<Sequence>(&content) {
            Ok(seq) => seq.last_id,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable id counter");
                0
            }
        }
    }

    /// Writes `content` to a fresh temp file beside `target` and returns its path.
    fn write_temp(&self, target: &Path, content: &str) -> Result<PathBuf> {
        let failed = |source: io::Error| UserdeskError::PersistenceFailed {
            path: target.to_path_buf(),
            source,
        };

        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(failed)?;
        }

        let tmp_file = dir.join(format!(".userdesk-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(failed(e));
        }
        Ok(tmp_file)
    }

    /// Moves each staged temp file over its target, in order. On the first
    /// failure every temp file not yet moved is removed.
    fn commit(&self, staged: Vec<(PathBuf, PathBuf)>) -> Result<()> {
        let mut pending = staged.into_iter();
        while let Some((tmp_file, target)) = pending.next() {
            if let Err(source) = fs::rename(&tmp_file, &target) {
                let _ = fs::remove_file(&tmp_file);
                for (rest, _) in pending {
                    let _ = fs::remove_file(rest);
                }
                return Err(UserdeskError::PersistenceFailed {
                    path: target,
                    source,
                });
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<UserTable> {
        let users = self.load_users()?;
        let last_id = self.load_last_id();
        debug!(count = users.len(), last_id, "loaded users");
        Ok(UserTable { users, last_id })
    }

    fn save(&mut self, table: &UserTable) -> Result<()> {
        let content = if self.pretty {
            serde_json::to_string_pretty(&table.users)?
        } else {
            serde_json::to_string(&table.users)?
        };
        let seq = serde_json::to_string(&Sequence {
            last_id: table.last_id,
        })?;

        // Stage both files before touching either target. The counter moves
        // first: a counter ahead of the records only skips ids.
        let seq_file = self.sequence_file();
        let seq_tmp = self.write_temp(&seq_file, &seq)?;
        let users_tmp = match self.write_temp(&self.users_file, &content) {
            Ok(tmp) => tmp,
            Err(e) => {
                let _ = fs::remove_file(&seq_tmp);
                return Err(e);
            }
        };
        self.commit(vec![
            (seq_tmp, seq_file),
            (users_tmp, self.users_file.clone()),
        ])?;

        debug!(count = table.users.len(), path = %self.users_file.display(), "saved users");
        Ok(())
    }

    fn location(&self) -> String {
        self.users_file.display().to_string()
    }
}
