//! JSONL persistence: one line per issue.
//!
//! The portable on-disk form of a store. Blank lines and `#` comments are
//! skipped on read; writes replace the file atomically so a crash never
//! leaves a truncated store behind.

use civica_core::issue::Issue;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Errors from JSONL operations.
#[derive(Debug, thiserror::Error)]
pub enum JsonlError {
    #[error("line {0}: I/O error: {1}")]
    Io(usize, String),

    #[error("line {0}: parse error: {1}")]
    Parse(usize, String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("corrupted store file: {0}")]
    Corrupt(String),
}

/// Read issues from a JSONL reader.
pub fn read_issues(reader: impl BufRead) -> Result<Vec<Issue>, JsonlError> {
    let mut issues = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| JsonlError::Io(line_no + 1, e.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let issue: Issue = serde_json::from_str(trimmed)
            .map_err(|e| JsonlError::Parse(line_no + 1, e.to_string()))?;
        issues.push(issue);
    }
    Ok(issues)
}

/// Serialize issues to JSONL bytes.
pub fn write_issues(issues: &[Issue]) -> Result<Vec<u8>, JsonlError> {
    let mut out = Vec::new();
    for issue in issues {
        let line =
            serde_json::to_vec(issue).map_err(|e| JsonlError::Serialize(e.to_string()))?;
        out.extend_from_slice(&line);
        out.push(b'\n');
    }
    Ok(out)
}

/// Read issues from a JSONL file path.
pub fn read_issues_from_path(path: impl AsRef<Path>) -> Result<Vec<Issue>, JsonlError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| JsonlError::Io(0, format!("{}: {e}", path.display())))?;
    reject_corrupt_bytes(path, &bytes)?;
    read_issues(bytes.as_slice())
}

/// Write issues to a JSONL file path, replacing it atomically.
pub fn write_issues_to_path(path: impl AsRef<Path>, issues: &[Issue]) -> Result<(), JsonlError> {
    let bytes = write_issues(issues)?;
    atomic_replace(path.as_ref(), &bytes)
}

fn reject_corrupt_bytes(path: &Path, bytes: &[u8]) -> Result<(), JsonlError> {
    if bytes.contains(&0) {
        return Err(JsonlError::Corrupt(format!(
            "{}: contains NUL byte(s)",
            path.display()
        )));
    }
    if std::str::from_utf8(bytes).is_err() {
        return Err(JsonlError::Corrupt(format!(
            "{}: contains non-UTF-8 byte sequence(s)",
            path.display()
        )));
    }
    Ok(())
}

/// Write bytes to a sibling tmp file, fsync, rename over `path`, and fsync
/// the parent directory.
fn atomic_replace(path: &Path, bytes: &[u8]) -> Result<(), JsonlError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| JsonlError::Io(0, format!("{parent:?}: {e}")))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = fs::write(&tmp_path, bytes)
        .and_then(|()| File::open(&tmp_path)?.sync_all())
        .map_err(|e| JsonlError::Io(0, format!("{}: {e}", tmp_path.display())));
    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        JsonlError::Io(
            0,
            format!("{} -> {}: {e}", tmp_path.display(), path.display()),
        )
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        File::open(parent)
            .and_then(|dir| dir.sync_all())
            .map_err(|e| JsonlError::Io(0, format!("{}: {e}", parent.display())))?;
    }

    Ok(())
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
