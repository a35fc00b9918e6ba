use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(
  author,
  version = version(),
  about,
  after_help = "Prints the selected branch to stdout. Exits with status 1 when run outside a git repository."
)]
pub struct Cli {
  /// Show handled keys in a column on the right of the screen
  #[arg(short, long)]
  pub debug: bool,

  /// Write logs to the given file
  #[arg(long, value_name = "PATH")]
  pub log_file: Option<PathBuf>,
}
