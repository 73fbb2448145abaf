use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use recap::cli::{execute, Cli};

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_logging(cli.verbose);

  let output = execute(&cli)?;
  print!("{output}");

  Ok(())
}

fn init_logging(verbose: bool) {
  // RUST_LOG wins over the --verbose flag
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("recap=debug")
    } else {
      EnvFilter::new("recap=warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}
