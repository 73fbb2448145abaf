use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecapError {
  #[error("No project ID provided.")]
  InvalidProjectId,

  #[error("Invalid configuration: {message}")]
  Config { message: String },

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl RecapError {
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config { message: message.into() }
  }
}

pub type Result<T> = std::result::Result<T, RecapError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_project_id_message() {
    assert_eq!(RecapError::InvalidProjectId.to_string(), "No project ID provided.");
  }

  #[test]
  fn test_config_error_message() {
    let err = RecapError::config("top_n must be at least 1");
    assert_eq!(err.to_string(), "Invalid configuration: top_n must be at least 1");
  }
}
