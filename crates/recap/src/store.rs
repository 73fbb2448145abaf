//! In-memory transcript storage keyed by project identifier.
//!
//! Transcripts only ever grow. Nothing is persisted; a store lives as long as
//! the [`crate::Recap`] that owns it.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::{RecapError, Result};

#[derive(Debug, Default)]
pub struct TranscriptStore {
  transcripts: HashMap<String, Vec<String>>,
}

impl TranscriptStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append `message` to the project's transcript and return the whole
  /// transcript, one message per line.
  ///
  /// Blank messages are not stored, which makes the call a plain read. An
  /// unseen project starts with an empty transcript, even when the message is
  /// blank.
  pub fn add_message(&mut self, project_id: Option<&str>, message: &str) -> Result<String> {
    let project_id = match project_id {
      Some(id) if !id.is_empty() => id,
      _ => {
        warn!("rejected message without a project id");
        return Err(RecapError::InvalidProjectId);
      }
    };

    let transcript = self.transcripts.entry(project_id.to_string()).or_insert_with(|| {
      info!(project = project_id, "created transcript");
      Vec::new()
    });

    if message.trim().is_empty() {
      debug!(project = project_id, "blank message, nothing appended");
    } else {
      transcript.push(message.to_string());
      debug!(project = project_id, count = transcript.len(), "appended message");
    }

    Ok(transcript.join("\n"))
  }

  /// Messages recorded for a project, oldest first
  pub fn transcript(&self, project_id: &str) -> Option<&[String]> {
    self.transcripts.get(project_id).map(Vec::as_slice)
  }

  pub fn projects(&self) -> Vec<&str> {
    let mut projects: Vec<&str> = self.transcripts.keys().map(String::as_str).collect();
    projects.sort();
    projects
  }

  pub fn len(&self) -> usize {
    self.transcripts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.transcripts.is_empty()
  }
}
