use std::{io, sync::Arc};

use color_eyre::eyre::Result;
use crossterm::event::Event as CrosstermEvent;
use futures::Stream;
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use crate::{
  action::Action,
  components::{Component, branch_list::BranchList},
  config::Config,
  error::Error,
  git::{GitBranch, GitRepo},
  tui::Tui,
};

/// How a single run of the selector ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
  /// The branch was checked out.
  Selected(GitBranch),
  /// The user asked for `git fetch` and a fresh list.
  FetchRequested,
  Quit,
  /// Listing branches failed, usually because the cwd is not inside a repository.
  RepoError(String),
}

pub struct App {
  repo: Arc<dyn GitRepo>,
  config: Config,
}

impl App {
  pub fn new(repo: Arc<dyn GitRepo>, config: Config) -> Self {
    Self { repo, config }
  }

  /// Lists branches, then takes the terminal from `open_tui` until a terminal key is pressed.
  /// The terminal is not touched when listing fails.
  pub async fn serve<B, S>(&self, open_tui: impl FnOnce() -> Result<Tui<B, S>>) -> Result<SessionOutcome>
  where
    B: Backend,
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
  {
    let branches = match self.repo.list_branches().await {
      Ok(branches) => branches,
      Err(Error::NotAGitRepository(message)) => return Ok(SessionOutcome::RepoError(message)),
      Err(err) => return Err(err.into()),
    };

    let mut tui = open_tui()?;
    let height = tui.size()?.height;
    let mut branch_list = BranchList::new(self.repo.clone(), branches, height, self.config.debug_log());
    let outcome = run(&mut tui, &mut branch_list).await;
    tui.exit()?;
    outcome
  }
}

async fn run<B, S>(tui: &mut Tui<B, S>, branch_list: &mut BranchList) -> Result<SessionOutcome>
where
  B: Backend,
  S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
  let (action_tx, mut action_rx) = mpsc::unbounded_channel();
  action_tx.send(Action::Render)?;

  loop {
    while let Ok(action) = action_rx.try_recv() {
      if action != Action::Render {
        log::debug!("Handling {action}");
      }
      match action {
        Action::Quit => return Ok(SessionOutcome::Quit),
        Action::Fetch => return Ok(SessionOutcome::FetchRequested),
        Action::CheckoutSelectedBranch => {
          if let Some(branch) = branch_list.checkout_selected().await? {
            return Ok(SessionOutcome::Selected(branch));
          }
        },
        Action::Render => draw(tui, branch_list)?,
        _ => {},
      }
      if let Some(action) = branch_list.update(action).await? {
        action_tx.send(action)?;
      }
    }

    let Some(event) = tui.next().await? else {
      return Ok(SessionOutcome::Quit);
    };
    if let Some(action) = branch_list.handle_events(Some(event)).await? {
      action_tx.send(action)?;
    }
  }
}

fn draw<B: Backend, S>(tui: &mut Tui<B, S>, branch_list: &mut BranchList) -> Result<()> {
  let mut drawn = Ok(());
  tui.draw(|f| {
    let area = f.area();
    drawn = branch_list.draw(f, area);
  })?;
  drawn
}
