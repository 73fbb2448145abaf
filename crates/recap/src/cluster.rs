//! Keyword-containment topic clustering.
//!
//! Each message is filed under the first ranked keyword that occurs anywhere
//! in its lowercased body. Matching is plain substring containment, so
//! `"flow"` also claims `"workflow"`. Messages matching nothing go to
//! [`MISC_TOPIC`].

use serde::Serialize;

use crate::message;

/// Catch-all bucket for messages that contain none of the keywords
pub const MISC_TOPIC: &str = "misc";

/// Outcome of scanning one message against the ranked keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment<'k> {
  Matched(&'k str),
  Unmatched,
}

impl<'k> Assignment<'k> {
  pub fn label(&self) -> &'k str {
    match self {
      Assignment::Matched(keyword) => *keyword,
      Assignment::Unmatched => MISC_TOPIC,
    }
  }
}

/// First keyword, in rank order, contained in the message body
pub fn assign<'k>(raw: &str, keywords: &'k [String]) -> Assignment<'k> {
  let body = message::body(raw).to_lowercase();
  keywords
    .iter()
    .find(|keyword| body.contains(keyword.as_str()))
    .map_or(Assignment::Unmatched, |keyword| Assignment::Matched(keyword.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicBucket {
  pub label: String,
  pub messages: Vec<String>,
}

/// Buckets in the order they first received a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicBuckets {
  buckets: Vec<TopicBucket>,
}

impl TopicBuckets {
  pub fn new() -> Self {
    Self::default()
  }

  fn file(&mut self, label: &str, raw: &str) {
    match self.buckets.iter_mut().find(|bucket| bucket.label == label) {
      Some(bucket) => bucket.messages.push(raw.to_string()),
      None => self
        .buckets
        .push(TopicBucket { label: label.to_string(), messages: vec![raw.to_string()] }),
    }
  }

  pub fn get(&self, label: &str) -> Option<&[String]> {
    self.buckets.iter().find(|bucket| bucket.label == label).map(|bucket| bucket.messages.as_slice())
  }

  pub fn labels(&self) -> impl Iterator<Item = &str> {
    self.buckets.iter().map(|bucket| bucket.label.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &TopicBucket> {
    self.buckets.iter()
  }

  pub fn len(&self) -> usize {
    self.buckets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buckets.is_empty()
  }

  /// Messages across all buckets
  pub fn message_count(&self) -> usize {
    self.buckets.iter().map(|bucket| bucket.messages.len()).sum()
  }
}

pub fn cluster<S: AsRef<str>>(messages: &[S], keywords: &[String]) -> TopicBuckets {
  let mut buckets = TopicBuckets::new();
  for raw in messages {
    let raw = raw.as_ref();
    buckets.file(assign(raw, keywords).label(), raw);
  }
  buckets
}
