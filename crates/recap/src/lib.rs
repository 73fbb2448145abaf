//! Recap - Project Chat Summarizer
//!
//! Keeps a running chat transcript per project and summarizes it on demand by
//! clustering messages around their most frequent keywords.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod keywords;
pub mod message;
pub mod service;
pub mod store;
pub mod summary;

pub use cluster::{cluster, Assignment, TopicBuckets, MISC_TOPIC};
pub use config::Config;
pub use error::{RecapError, Result};
pub use keywords::extract_keywords;
pub use message::ParsedMessage;
pub use service::Recap;
pub use store::TranscriptStore;
pub use summary::{TopicSummaries, NO_CHAT_MESSAGE};
