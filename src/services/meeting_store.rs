// Persistent meeting list

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::models::meeting::Meeting;
use crate::services::read_json_file;
use crate::utils::error::{AgendaError, Result};

/// Ordered list of stored meetings
pub trait MeetingStore {
    /// Meetings `name` organizes or takes part in, in stored order
    fn fetch_by_attendee(&self, name: &str) -> Result<Vec<Meeting>> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|meeting| meeting.involves(name))
            .collect())
    }

    fn fetch_all(&self) -> Result<Vec<Meeting>>;

    /// Replace the stored list with `meetings`
    fn persist_all(&self, meetings: &[Meeting]) -> Result<()>;
}

/// Meetings stored as a pretty-printed JSON array
pub struct JsonMeetingStore {
    meetings_path: PathBuf,
}

impl JsonMeetingStore {
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            meetings_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.meetings_path
    }
}

impl MeetingStore for JsonMeetingStore {
    fn fetch_all(&self) -> Result<Vec<Meeting>> {
        Ok(read_json_file(&self.meetings_path)?.unwrap_or_default())
    }

    /// Written to a sibling temp file first and renamed into place, so the
    /// file holds either the old list or the new one.
    fn persist_all(&self, meetings: &[Meeting]) -> Result<()> {
        let content = serde_json::to_string_pretty(meetings)
            .map_err(|e| AgendaError::StorageError(
                format!("Failed to serialize meetings: {}", e)
            ))?;

        let parent = match self.meetings_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(&self.meetings_path)
            .map_err(|e| AgendaError::StorageError(
                format!("Failed to write {}: {}", self.meetings_path.display(), e)
            ))?;

        log::debug!("wrote {} meetings to {}", meetings.len(), self.meetings_path.display());
        Ok(())
    }
}
