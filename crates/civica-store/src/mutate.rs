//! Lock-scoped mutation of a JSONL store file.
//!
//! One mutation at a time per store file: acquire a sibling `.lock`,
//! hydrate, run the mutator, persist only if it reports a change, release
//! the lock on drop. A busy lock is a typed error, never a wait.

use crate::memory::{IssueStore, StoreError};
use chrono::Utc;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sibling lock path for a store file.
pub fn store_lock_path(store_path: &Path) -> PathBuf {
    let mut path: OsString = store_path.as_os_str().to_os_string();
    path.push(".lock");
    PathBuf::from(path)
}

/// Errors from lock-scoped store-file mutation.
#[derive(Debug, thiserror::Error)]
pub enum StoreFileError {
    #[error("store lock busy: {lock_path}")]
    LockBusy { lock_path: String },

    #[error("failed to acquire store lock {lock_path}: {message}")]
    LockIo { lock_path: String, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Execute one lock-scoped store mutation against a JSONL path.
///
/// A missing store file hydrates as an empty store. The mutator returns
/// `(value, changed)`; `changed = true` persists the store before the lock
/// is released.
pub fn mutate_store_file<T, F>(path: impl AsRef<Path>, mutator: F) -> Result<T, StoreFileError>
where
    F: FnOnce(&mut IssueStore) -> Result<(T, bool), StoreError>,
{
    let path = path.as_ref();
    let _guard = StoreFileLockGuard::acquire(path)?;

    let mut store = if path.exists() {
        IssueStore::load_jsonl(path)?
    } else {
        IssueStore::new()
    };
    let (value, changed) = mutator(&mut store)?;
    if changed {
        store.save_jsonl(path)?;
    }
    Ok(value)
}

struct StoreFileLockGuard {
    lock_path: PathBuf,
    _file: File,
}

impl StoreFileLockGuard {
    fn acquire(path: &Path) -> Result<Self, StoreFileError> {
        let lock_path = store_lock_path(path);
        if let Some(parent) = lock_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreFileError::LockIo {
                lock_path: lock_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(mut file) => {
                let _ = writeln!(
                    file,
                    "pid={}\nutc={}",
                    std::process::id(),
                    Utc::now().to_rfc3339()
                );
                Ok(Self {
                    lock_path,
                    _file: file,
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StoreFileError::LockBusy {
                    lock_path: lock_path.display().to_string(),
                })
            }
            Err(err) => Err(StoreFileError::LockIo {
                lock_path: lock_path.display().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

impl Drop for StoreFileLockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use civica_core::issue::{IssueType, Location, NewIssueInput, Status};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn input(title: &str) -> NewIssueInput {
        NewIssueInput {
            title: title.to_string(),
            description: format!("Details: {title}"),
            issue_type: IssueType::Park,
            location: Location::new(40.71, -74.0),
            reported_by: "user-1".to_string(),
            priority: None,
            image_url: None,
        }
    }

    fn temp_store_path(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let root = std::env::temp_dir().join(format!("civica-store-{prefix}-{unique}"));
        fs::create_dir_all(&root).expect("temp dir should be created");
        root.join("issues.jsonl")
    }

    #[test]
    fn missing_file_hydrates_empty_and_persists_on_change() {
        let path = temp_store_path("create");
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("fixed time");

        let created = mutate_store_file(&path, |store| {
            let issue = store.create_at(input("Fallen branch"), now)?;
            Ok((issue, true))
        })
        .expect("mutation succeeds");

        let reloaded = IssueStore::load_jsonl(&path).expect("store reloads");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(
            reloaded.get(&created.id).expect("created issue exists").status,
            Status::Pending
        );
    }

    #[test]
    fn unchanged_mutation_does_not_write() {
        let path = temp_store_path("read-only");

        let count = mutate_store_file(&path, |store| Ok((store.len(), false)))
            .expect("mutation succeeds");
        assert_eq!(count, 0);
        assert!(!path.exists());
    }

    #[test]
    fn busy_lock_is_rejected_without_blocking() {
        let path = temp_store_path("lock");
        let lock_path = store_lock_path(&path);
        fs::write(&lock_path, "busy\n").expect("lock fixture should write");

        let result = mutate_store_file(&path, |store| Ok((store.len(), false)));
        match result {
            Err(StoreFileError::LockBusy { lock_path: reported }) => {
                assert_eq!(reported, lock_path.display().to_string());
            }
            other => panic!("expected lock busy error, got {other:?}"),
        }

        let _ = fs::remove_file(lock_path);
    }

    #[test]
    fn lock_is_released_after_mutation() {
        let path = temp_store_path("release");
        mutate_store_file(&path, |store| Ok((store.len(), false))).expect("first mutation");
        mutate_store_file(&path, |store| Ok((store.len(), false))).expect("second mutation");
        assert!(!store_lock_path(&path).exists());
    }
}
