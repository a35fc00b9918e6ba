use std::{io, io::Write, sync::Arc};

use color_eyre::eyre::Result;
use crossterm::event::Event as CrosstermEvent;
use futures::Stream;
use ratatui::backend::Backend;
use tracing::{info, warn};

use crate::{
  app::{App, SessionOutcome},
  config::Config,
  git::{GitBranch, GitRepo},
  tui::Tui,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
  Selected(GitBranch),
  Cancelled,
  NotARepository,
}

/// Runs sessions until one ends for good. A fetch request runs `git fetch` and starts over
/// with a freshly listed set of branches; the selected branch name is written to `out`.
pub async fn run<B, S, W>(
  repo: Arc<dyn GitRepo>,
  config: &Config,
  mut open_tui: impl FnMut() -> Result<Tui<B, S>>,
  out: &mut W,
) -> Result<Exit>
where
  B: Backend,
  S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
  W: Write,
{
  loop {
    let app = App::new(repo.clone(), config.clone());
    match app.serve(&mut open_tui).await? {
      SessionOutcome::Selected(branch) => {
        info!("Selected branch {}", branch.name);
        writeln!(out, "{}", branch.name)?;
        return Ok(Exit::Selected(branch));
      },
      SessionOutcome::Quit => return Ok(Exit::Cancelled),
      SessionOutcome::FetchRequested => {
        eprintln!("Fetching remote branches...");
        repo.fetch().await?;
      },
      SessionOutcome::RepoError(message) => {
        warn!("Unable to list branches: {}", message);
        eprintln!("Not a git repository?");
        return Ok(Exit::NotARepository);
      },
    }
  }
}
