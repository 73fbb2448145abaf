use std::collections::HashMap;

use crate::Config;

/// Tokens must be longer than this to be considered
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 3;

/// A keyword and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
  pub keyword: String,
  pub count: usize,
}

/// Most frequent significant words across `messages`, highest count first
pub fn extract_keywords<S: AsRef<str>>(messages: &[S], top_n: usize) -> Vec<String> {
  extract_keywords_with(messages, top_n, DEFAULT_MIN_KEYWORD_LEN)
}

pub fn extract_keywords_with<S: AsRef<str>>(
  messages: &[S],
  top_n: usize,
  min_len: usize,
) -> Vec<String> {
  rank_keywords(messages, min_len).into_iter().take(top_n).map(|kc| kc.keyword).collect()
}

/// The `config.top_n` highest ranked keywords, using `config.min_keyword_len`.
///
/// Both the summary pipeline and the CLI listings go through here.
pub fn top_keywords<S: AsRef<str>>(messages: &[S], config: &Config) -> Vec<KeywordCount> {
  let mut ranked = rank_keywords(messages, config.min_keyword_len);
  ranked.truncate(config.top_n);
  ranked
}

/// Every surviving token with its frequency.
///
/// Sorted by descending count; equal counts keep the order in which the
/// token first appeared.
pub fn rank_keywords<S: AsRef<str>>(messages: &[S], min_len: usize) -> Vec<KeywordCount> {
  let text = strip_punctuation(&join_messages(messages));

  let mut ranked: Vec<KeywordCount> = Vec::new();
  let mut positions: HashMap<String, usize> = HashMap::new();

  for token in text.split(is_separator).filter(|t| t.len() > min_len) {
    let token = token.to_lowercase();
    match positions.get(&token) {
      Some(&idx) => ranked[idx].count += 1,
      None => {
        positions.insert(token.clone(), ranked.len());
        ranked.push(KeywordCount { keyword: token, count: 1 });
      }
    }
  }

  // sort_by is stable, which preserves first-appearance order within a count
  ranked.sort_by(|a, b| b.count.cmp(&a.count));
  ranked
}

fn join_messages<S: AsRef<str>>(messages: &[S]) -> String {
  messages.iter().map(|m| m.as_ref()).collect::<Vec<&str>>().join(" ")
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
fn is_separator(c: char) -> bool {
  c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Drop everything except ASCII letters, ASCII digits and separators
fn strip_punctuation(text: &str) -> String {
  text.chars().filter(|&c| c.is_ascii_alphanumeric() || is_separator(c)).collect()
}
