//! Speaker/body split for stored chat lines.

/// Separator between the speaker label and the message body
pub const SPEAKER_SEPARATOR: &str = ": ";

/// A chat line split on its first `": "`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
  pub speaker: Option<&'a str>,
  pub body: &'a str,
}

impl<'a> ParsedMessage<'a> {
  pub fn parse(raw: &'a str) -> Self {
    match raw.split_once(SPEAKER_SEPARATOR) {
      Some((speaker, body)) => Self { speaker: Some(speaker), body },
      None => Self { speaker: None, body: raw },
    }
  }
}

/// Shorthand for `ParsedMessage::parse(raw).body`
pub fn body(raw: &str) -> &str {
  ParsedMessage::parse(raw).body
}
