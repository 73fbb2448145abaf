//! The two entry points a front-end calls.

use tracing::debug;

use crate::cluster::cluster;
use crate::config::Config;
use crate::keywords::top_keywords;
use crate::store::TranscriptStore;
use crate::summary::{overview, summarize, TopicSummaries, NO_CHAT_MESSAGE};

/// Owns the transcript store for the life of the process
#[derive(Debug, Default)]
pub struct Recap {
  store: TranscriptStore,
  config: Config,
}

impl Recap {
  pub fn new(config: Config) -> Self {
    Self { store: TranscriptStore::new(), config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn store(&self) -> &TranscriptStore {
    &self.store
  }

  /// Record a message and return the project's transcript text.
  ///
  /// A missing project id yields `"Error: No project ID provided."` instead of
  /// an error value.
  pub fn add_message(&mut self, project_id: Option<&str>, message: &str) -> String {
    match self.store.add_message(project_id, message) {
      Ok(transcript) => transcript,
      Err(e) => format!("Error: {e}"),
    }
  }

  /// Overall summary plus one summary per topic.
  ///
  /// Unknown or empty projects give `("No chat to summarize yet.", {})`.
  pub fn advanced_interactive_summary(&self, project_id: Option<&str>) -> (String, TopicSummaries) {
    let history = match project_id.and_then(|id| self.store.transcript(id)) {
      Some(history) if !history.is_empty() => history,
      _ => return (NO_CHAT_MESSAGE.to_string(), TopicSummaries::new()),
    };
    let project_id = project_id.unwrap_or_default();

    let keywords: Vec<String> =
      top_keywords(history, &self.config).into_iter().map(|kc| kc.keyword).collect();
    debug!(project = project_id, ?keywords, "extracted keywords");

    let buckets = cluster(history, &keywords);
    debug!(project = project_id, topics = buckets.len(), "clustered transcript");

    let topic_summaries = summarize(&buckets, &self.config);
    let overall = overview(project_id, history, &buckets, &self.config);
    (overall, topic_summaries)
  }
}
