//! Audit log boundary and adapters.
//!
//! The engine only ever appends. Reads and retention purges exist for the
//! presentation layer and the retention policy respectively.

use crate::checkpoint::atomic_write;
use crate::model::ChangeLogEntry;
use crate::store::error::AuditLogError;
use chrono::{DateTime, NaiveDate, Utc};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::io::SeekFrom;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;

/// Append-only store of [`ChangeLogEntry`] records.
///
/// `append` must store an entry as one atomic unit; concurrent appends may
/// be ordered arbitrarily but never interleave within a record.
pub trait AuditLog: Send + Sync {
    fn append(&self, entry: &ChangeLogEntry)
        -> impl Future<Output = Result<(), AuditLogError>> + Send;

    /// Every entry, in timestamp order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<ChangeLogEntry>, AuditLogError>> + Send;

    /// Remove entries older than `cutoff`, returning how many were removed.
    fn delete_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, AuditLogError>> + Send;

    /// Entries touching shifts scheduled on `date`, in timestamp order.
    fn entries_for_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<ChangeLogEntry>, AuditLogError>> + Send {
        async move {
            let entries = self.fetch_all().await?;
            Ok(entries
                .into_iter()
                .filter(|e| e.scheduled_shift_date() == date)
                .collect())
        }
    }
}

fn sort_by_timestamp(entries: &mut [ChangeLogEntry]) {
    // Stable: entries sharing a timestamp keep append order
    entries.sort_by_key(|e| e.timestamp());
}

/// Audit log kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<ChangeLogEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl AuditLog for InMemoryAuditLog {
    async fn append(&self, entry: &ChangeLogEntry) -> Result<(), AuditLogError> {
        self.entries.lock().await.push(entry.clone());
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ChangeLogEntry>, AuditLogError> {
        let mut entries = self.entries.lock().await.clone();
        sort_by_timestamp(&mut entries);
        Ok(entries)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, AuditLogError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|e| e.timestamp() >= cutoff);
        Ok(before - entries.len())
    }
}

/// Audit log stored as one JSON document per line.
///
/// Each append is a single `write_all` of a complete line made while
/// holding the log's lock, so records never interleave. A final line with
/// no trailing newline is the remains of an interrupted append: reads skip
/// it and the first append of the process cuts it off.
#[derive(Debug)]
pub struct JsonlAuditLog {
    path: PathBuf,
    // true once the file tail has been checked for a torn record
    tail_checked: Mutex<bool>,
}

impl JsonlAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tail_checked: Mutex::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Vec<ChangeLogEntry>, AuditLogError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let torn_tail = !content.is_empty() && !content.ends_with('\n');
        let lines: Vec<&str> = content.lines().collect();
        let last = lines.len();
        let mut entries = Vec::with_capacity(last);

        for (idx, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(entry) => entries.push(entry),
                Err(e) if torn_tail && idx + 1 == last => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %e,
                        "Skipping incomplete final audit record"
                    );
                }
                Err(e) => {
                    return Err(AuditLogError::Corrupt {
                        line: idx + 1,
                        message: e.to_string(),
                    })
                }
            }
        }
        Ok(entries)
    }

    /// Cut the file back to its last complete line.
    async fn trim_torn_tail(&self) -> Result<(), AuditLogError> {
        let mut file = match tokio::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let len = file.metadata().await?.len();
        if len == 0 {
            return Ok(());
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1)).await?;
        file.read_exact(&mut last).await?;
        if last[0] == b'\n' {
            return Ok(());
        }

        let content = tokio::fs::read(&self.path).await?;
        let keep = content
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |idx| idx + 1);
        file.set_len(keep as u64).await?;
        file.sync_data().await?;
        tracing::warn!(
            path = %self.path.display(),
            removed_bytes = len - keep as u64,
            "Truncated incomplete final audit record"
        );
        Ok(())
    }
}

impl AuditLog for JsonlAuditLog {
    async fn append(&self, entry: &ChangeLogEntry) -> Result<(), AuditLogError> {
        let mut line =
            serde_json::to_string(entry).map_err(|e| AuditLogError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut tail_checked = self.tail_checked.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        if !*tail_checked {
            self.trim_torn_tail().await?;
            *tail_checked = true;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.sync_data().await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ChangeLogEntry>, AuditLogError> {
        let _guard = self.tail_checked.lock().await;
        let mut entries = self.read_entries().await?;
        sort_by_timestamp(&mut entries);
        Ok(entries)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, AuditLogError> {
        let mut tail_checked = self.tail_checked.lock().await;
        let entries = self.read_entries().await?;
        let before = entries.len();

        let mut content = String::new();
        for entry in entries.iter().filter(|e| e.timestamp() >= cutoff) {
            let line = serde_json::to_string(entry)
                .map_err(|e| AuditLogError::Serialization(e.to_string()))?;
            content.push_str(&line);
            content.push('\n');
        }
        let kept = content.lines().count();

        if kept != before {
            let path = self.path.clone();
            tokio::task::spawn_blocking(move || atomic_write(&path, content.as_bytes()))
                .await
                .map_err(std::io::Error::other)??;
            // The rewrite holds complete lines only
            *tail_checked = true;
        }
        Ok(before - kept)
    }
}

/// Time-bounded deletion of old audit entries.
///
/// The engine never purges; this is the external retention collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetentionPolicy {
    pub max_age: chrono::Duration,
}

impl RetentionPolicy {
    pub fn days(days: i64) -> Self {
        Self {
            max_age: chrono::Duration::days(days),
        }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.max_age
    }

    pub async fn purge<L: AuditLog>(&self, log: &L, now: DateTime<Utc>) -> Result<usize, AuditLogError> {
        let removed = log.delete_older_than(self.cutoff(now)).await?;
        tracing::info!(removed, cutoff = %self.cutoff(now), "Purged expired audit entries");
        Ok(removed)
    }
}
