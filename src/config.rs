use std::path::PathBuf;

use crate::{cli::Cli, components::debug_log::DebugLog};

/// Everything a session needs to know about how it was started. Passed in at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub debug: bool,
  pub log_file: Option<PathBuf>,
}

impl Config {
  pub fn log_level(&self) -> &'static str {
    if self.debug { "debug" } else { "info" }
  }

  pub fn debug_log(&self) -> Option<DebugLog> {
    self.debug.then(DebugLog::default)
  }
}

impl From<&Cli> for Config {
  fn from(cli: &Cli) -> Self {
    Config { debug: cli.debug, log_file: cli.log_file.clone() }
  }
}
