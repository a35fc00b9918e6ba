use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
  cli::Cli,
  config::Config,
  controller::Exit,
  git::{GitCliRepo, GitRepo},
  tui::Tui,
  utils::{initialize_logging, initialize_panic_handler},
};

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod git;
pub mod tui;
pub mod utils;

async fn tokio_main() -> Result<()> {
  let cli = Cli::parse();
  let config = Config::from(&cli);
  initialize_logging(&config)?;
  initialize_panic_handler()?;

  let repo: Arc<dyn GitRepo> = Arc::new(GitCliRepo::from_cwd());
  let open_tui = || -> Result<Tui> {
    let mut tui = Tui::new()?;
    tui.enter()?;
    Ok(tui)
  };

  let exit = controller::run(repo, &config, open_tui, &mut std::io::stdout()).await?;
  if exit == Exit::NotARepository {
    std::process::exit(1);
  }

  Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  if let Err(e) = tokio_main().await {
    eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
    Err(e)
  } else {
    Ok(())
  }
}
