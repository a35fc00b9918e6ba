use std::{
  io::{self, Stderr},
  ops::{Deref, DerefMut},
};

use color_eyre::eyre::Result;
use crossterm::{
  cursor,
  event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind},
  terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::error;

pub type IO = Stderr;
pub fn io() -> IO {
  io::stderr()
}
pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
  Key(KeyEvent),
  Resize(u16, u16),
}

/// Terminal plus its input events. Raw mode and the alternate screen are held from
/// `enter` until `exit` or drop.
pub struct Tui<B: Backend = CrosstermBackend<IO>, S = EventStream> {
  pub terminal: ratatui::Terminal<B>,
  events: S,
  active: bool,
}

impl Tui {
  pub fn new() -> Result<Self> {
    let terminal = ratatui::Terminal::new(CrosstermBackend::new(io()))?;
    Ok(Self::with_events(terminal, EventStream::new()))
  }

  pub fn enter(&mut self) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    self.active = true;
    crossterm::execute!(io(), EnterAlternateScreen)?;
    self.terminal.clear()?;
    Ok(())
  }
}

impl<B, S> Tui<B, S>
where
  B: Backend,
  S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
  pub fn with_events(terminal: ratatui::Terminal<B>, events: S) -> Self {
    Self { terminal, events, active: false }
  }

  /// Waits for the next key press or resize. `None` once the input stream is closed.
  pub async fn next(&mut self) -> Result<Option<Event>> {
    while let Some(event) = self.events.next().await {
      match event? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(Event::Key(key))),
        CrosstermEvent::Resize(width, height) => return Ok(Some(Event::Resize(width, height))),
        _ => {},
      }
    }
    Ok(None)
  }

  pub fn exit(&mut self) -> Result<()> {
    if self.active {
      self.active = false;
      self.terminal.flush()?;
      restore()?;
    }
    Ok(())
  }
}

/// Puts the terminal back into cooked mode. Safe to call when it never left it.
pub fn restore() -> Result<()> {
  if crossterm::terminal::is_raw_mode_enabled()? {
    crossterm::execute!(io(), LeaveAlternateScreen, cursor::Show)?;
    crossterm::terminal::disable_raw_mode()?;
  }
  Ok(())
}

impl<B: Backend, S> Deref for Tui<B, S> {
  type Target = ratatui::Terminal<B>;

  fn deref(&self) -> &Self::Target {
    &self.terminal
  }
}

impl<B: Backend, S> DerefMut for Tui<B, S> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.terminal
  }
}

impl<B: Backend, S> Drop for Tui<B, S> {
  fn drop(&mut self) {
    if self.active {
      self.active = false;
      if let Err(err) = restore() {
        error!("Unable to restore terminal: {:?}", err);
      }
    }
  }
}


#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
  use pretty_assertions::assert_eq;

  use super::{testing::*, *};

  #[tokio::test]
  async fn test_next_skips_key_releases_and_other_events() {
    let release = CrosstermEvent::Key(KeyEvent {
      code: KeyCode::Char('j'),
      modifiers: KeyModifiers::NONE,
      kind: KeyEventKind::Release,
      state: KeyEventState::NONE,
    });
    let mut tui = scripted(10, 4, vec![release, CrosstermEvent::FocusGained, key(KeyCode::Enter)]);

    let event = tui.next().await.unwrap();

    assert_eq!(event, Some(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))));
  }

  #[tokio::test]
  async fn test_next_reports_resize() {
    let mut tui = scripted(10, 4, vec![CrosstermEvent::Resize(80, 24)]);

    assert_eq!(tui.next().await.unwrap(), Some(Event::Resize(80, 24)));
  }

  #[tokio::test]
  async fn test_next_returns_none_when_closed() {
    let mut tui = scripted(10, 4, vec![]);

    assert_eq!(tui.next().await.unwrap(), None);
  }

  #[test]
  fn test_exit_is_noop_when_never_entered() {
    let mut tui = scripted(10, 4, vec![]);

    assert!(tui.exit().is_ok());
  }
}
