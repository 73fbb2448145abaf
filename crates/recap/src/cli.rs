// Command-line front door, kept in the library so it can be tested directly
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::cluster::{cluster, TopicBuckets};
use crate::keywords::{top_keywords, KeywordCount};
use crate::summary::TopicSummaries;
use crate::{Config, Recap, RecapError, Result};

/// Recap - Project Chat Summarizer
///
/// Reads one chat message per line and summarizes the conversation by topic.
#[derive(Parser)]
#[command(name = "recap")]
#[command(about = "Recap - Project Chat Summarizer\nKeyword-clustered topic summaries for chat transcripts")]
#[command(version)]
pub struct Cli {
  /// Configuration file path
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Commands,
}

/// Where messages come from and how results are printed
#[derive(Args, Debug, Clone)]
pub struct InputOptions {
  /// File with one message per line (reads stdin when omitted)
  pub file: Option<PathBuf>,

  /// Number of keywords to extract
  #[arg(short = 'n', long)]
  pub top_n: Option<usize>,

  /// Output format
  #[arg(short, long, default_value = "pretty")]
  pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Summarize a chat transcript for a project
  Summarize {
    /// Project identifier
    project: String,
    #[command(flatten)]
    input: InputOptions,
  },
  /// Show the ranked keywords of a transcript
  Keywords {
    #[command(flatten)]
    input: InputOptions,
  },
  /// Show which messages fall under which topic
  Topics {
    #[command(flatten)]
    input: InputOptions,
  },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// Run a parsed command line and return what should be printed
pub fn execute(cli: &Cli) -> Result<String> {
  match &cli.command {
    Commands::Summarize { project, input } => {
      let config = load_config(cli.config.as_deref(), input.top_n)?;
      let messages = read_messages(input.file.as_deref())?;
      let (overall, topics) = summarize_messages(project, &messages, config)?;
      format_summary(project, &overall, &topics, input.format)
    }
    Commands::Keywords { input } => {
      let config = load_config(cli.config.as_deref(), input.top_n)?;
      let messages = read_messages(input.file.as_deref())?;
      format_keywords(&top_keywords(&messages, &config), input.format)
    }
    Commands::Topics { input } => {
      let config = load_config(cli.config.as_deref(), input.top_n)?;
      let messages = read_messages(input.file.as_deref())?;
      let keywords: Vec<String> =
        top_keywords(&messages, &config).into_iter().map(|kc| kc.keyword).collect();
      format_topics(&cluster(&messages, &keywords), input.format)
    }
  }
}

/// Explicit file first, then the usual lookup, with an optional `top_n` override
pub fn load_config(path: Option<&Path>, top_n: Option<usize>) -> Result<Config> {
  let mut config = match path {
    Some(path) => Config::load_from_file(path)?,
    None => Config::load()?,
  };
  if let Some(top_n) = top_n {
    config.top_n = top_n;
    config.validate()?;
  }
  Ok(config)
}

/// Non-blank lines of `file`, or of stdin when no file is given
pub fn read_messages(file: Option<&Path>) -> Result<Vec<String>> {
  let content = match file {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buffer = String::new();
      io::stdin().read_to_string(&mut buffer)?;
      buffer
    }
  };
  Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<String> {
  content.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect()
}

/// Feed every message through a fresh [`Recap`] and summarize the project
pub fn summarize_messages(
  project: &str,
  messages: &[String],
  config: Config,
) -> Result<(String, TopicSummaries)> {
  if project.is_empty() {
    return Err(RecapError::InvalidProjectId);
  }

  let mut recap = Recap::new(config);
  for message in messages {
    recap.add_message(Some(project), message);
  }
  Ok(recap.advanced_interactive_summary(Some(project)))
}

pub fn format_summary(
  project: &str,
  overall: &str,
  topics: &TopicSummaries,
  format: OutputFormat,
) -> Result<String> {
  match format {
    OutputFormat::Pretty => Ok(format_summary_pretty(project, overall, topics)),
    OutputFormat::Json => {
      let output = serde_json::json!({
        "project": project,
        "overall": overall,
        "topics": topics,
      });
      to_json_line(&output)
    }
  }
}

fn format_summary_pretty(project: &str, overall: &str, topics: &TopicSummaries) -> String {
  let mut output = format!("=== {} ===\n{}\n", project.blue().bold(), overall);

  if !topics.is_empty() {
    output.push_str(&format!("\n{}\n", "Topics".bright_white().bold()));
    for (label, text) in topics.iter() {
      output.push_str(&format!("  {} {}\n", format!("{label}:").cyan(), text));
    }
  }

  output
}

pub fn format_keywords(ranked: &[KeywordCount], format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Pretty => {
      if ranked.is_empty() {
        return Ok(format!("{}\n", "No keywords found".yellow()));
      }
      Ok(
        ranked
          .iter()
          .enumerate()
          .map(|(i, kc)| format!("{:>2}. {} ({})\n", i + 1, kc.keyword.yellow().bold(), kc.count))
          .collect(),
      )
    }
    OutputFormat::Json => {
      let output: Vec<_> = ranked
        .iter()
        .map(|kc| serde_json::json!({ "keyword": kc.keyword, "count": kc.count }))
        .collect();
      to_json_line(&output)
    }
  }
}

pub fn format_topics(buckets: &TopicBuckets, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Pretty => {
      if buckets.is_empty() {
        return Ok(format!("{}\n", "No messages to cluster".yellow()));
      }
      let mut output = String::new();
      for bucket in buckets.iter() {
        output.push_str(&format!(
          "{} ({})\n",
          bucket.label.blue().bold(),
          bucket.messages.len()
        ));
        for message in &bucket.messages {
          output.push_str(&format!("  - {message}\n"));
        }
      }
      Ok(output)
    }
    OutputFormat::Json => to_json_line(buckets),
  }
}

/// Pretty JSON terminated by a newline, like the pretty formats
fn to_json_line<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
  let mut output = serde_json::to_string_pretty(value)?;
  output.push('\n');
  Ok(output)
}
