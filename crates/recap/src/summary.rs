//! Topic and overall summaries built from clustered messages.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::cluster::{TopicBuckets, MISC_TOPIC};
use crate::config::Config;
use crate::message;

/// Overall summary for a project with nothing recorded yet
pub const NO_CHAT_MESSAGE: &str = "No chat to summarize yet.";

/// Topic label to summary text, in bucket order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSummaries {
  entries: Vec<(String, String)>,
}

impl TopicSummaries {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, topic: &str) -> Option<&str> {
    self.entries.iter().find(|(label, _)| label == topic).map(|(_, text)| text.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(label, text)| (label.as_str(), text.as_str()))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Serialize for TopicSummaries {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (label, text) in &self.entries {
      map.serialize_entry(label, text)?;
    }
    map.end()
  }
}

/// A message is actionable when its lowercased text, speaker included,
/// contains any action word as a substring
pub fn is_action(raw: &str, action_keywords: &[String]) -> bool {
  let lowered = raw.to_lowercase();
  action_keywords.iter().any(|kw| lowered.contains(kw.as_str()))
}

/// Summary text for one bucket of messages
pub fn summarize_topic<S: AsRef<str>>(messages: &[S], config: &Config) -> String {
  let snippet = messages
    .iter()
    .take(config.snippet_messages)
    .map(|raw| message::body(raw.as_ref()))
    .collect::<Vec<_>>()
    .join(" ");

  let action_keywords = config.action_keywords_lowercase();
  let actions: Vec<&str> = messages
    .iter()
    .map(|raw| raw.as_ref())
    .filter(|raw: &&str| is_action(raw, &action_keywords))
    .map(message::body)
    .take(config.max_actions)
    .collect();

  if actions.is_empty() {
    snippet
  } else {
    format!("{} [Actions: {}]", snippet, actions.join(", "))
  }
}

pub fn summarize(buckets: &TopicBuckets, config: &Config) -> TopicSummaries {
  let entries = buckets
    .iter()
    .filter(|bucket| !bucket.messages.is_empty())
    .map(|bucket| (bucket.label.clone(), summarize_topic(bucket.messages.as_slice(), config)))
    .collect();
  TopicSummaries { entries }
}

/// One-sentence description of the whole transcript
pub fn overview<S: AsRef<str>>(
  project_id: &str,
  history: &[S],
  buckets: &TopicBuckets,
  config: &Config,
) -> String {
  let Some(last) = history.last() else {
    return NO_CHAT_MESSAGE.to_string();
  };

  let topics: Vec<&str> =
    buckets.labels().filter(|label| *label != MISC_TOPIC).take(config.overview_topics).collect();

  format!(
    "Project {} chat contains {} messages discussing topics like {}. Last message: '{}'",
    project_id,
    history.len(),
    topics.join(", "),
    message::body(last.as_ref())
  )
}
