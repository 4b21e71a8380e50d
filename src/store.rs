use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use fs2::FileExt;

use crate::error::{Result, TallyError};
use crate::model::Task;

/// Whole-collection JSON persistence over a single file. Every operation is
/// load-full-collection, mutate in memory, save-full-collection; there is no
/// row-granularity write.
pub struct JsonStore {
    path: PathBuf,
}

/// Exclusive hold on the collection, backed by a sibling `<name>.lock` file.
/// Dropping the guard releases the lock.
pub struct StoreLock {
    _file: File,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "tasks.json".into());
        name.push(".lock");
        self.path.with_file_name(name)
    }

    /// Acquire the collection lock for a full load-mutate-save cycle.
    /// Contention fails fast rather than blocking.
    pub fn lock(&self) -> Result<StoreLock> {
        let path = self.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        file.try_lock_exclusive()
            .map_err(|_| TallyError::Locked(path.display().to_string()))?;
        Ok(StoreLock { _file: file })
    }

    /// Missing or corrupt state reads as an empty collection, never an error.
    pub fn load(&self) -> Vec<Task> {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&data).unwrap_or_default()
    }

    /// Overwrite prior state wholesale, human-readable.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
