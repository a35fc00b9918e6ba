use std::collections::VecDeque;

use ratatui::{
  layout::Rect,
  text::Line,
  widgets::{Clear, Paragraph},
};
use tracing::debug;

use crate::tui::Frame;

pub const DEBUG_COLUMN_WIDTH: u16 = 20;
const CAPACITY: usize = 256;

/// Recent diagnostic messages, drawn in a narrow column at the right edge of the screen.
#[derive(Debug, Default, Clone)]
pub struct DebugLog {
  entries: VecDeque<String>,
}

impl DebugLog {
  pub fn log(&mut self, message: impl Into<String>) {
    let message = message.into();
    debug!("{}", message);
    if self.entries.len() == CAPACITY {
      self.entries.pop_front();
    }
    self.entries.push_back(message);
  }

  pub fn entries(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }

  pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
    let width = DEBUG_COLUMN_WIDTH.min(area.width);
    let column = Rect::new(area.right() - width, area.y, width, area.height);
    let skip = self.entries.len().saturating_sub(column.height as usize);
    let lines: Vec<Line> = self.entries.iter().skip(skip).map(|entry| Line::from(entry.as_str())).collect();

    frame.render_widget(Clear, column);
    frame.render_widget(Paragraph::new(lines), column);
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;

  #[test]
  fn test_log_keeps_bounded_history() {
    let mut log = DebugLog::default();
    for i in 0..CAPACITY + 5 {
      log.log(format!("entry {i}"));
    }

    assert_eq!(log.entries().count(), CAPACITY);
    assert_eq!(log.entries().next(), Some("entry 5"));
  }

  #[test]
  fn test_render_shows_newest_entries_in_right_column() {
    let mut log = DebugLog::default();
    log.log("up");
    log.log("down");
    log.log("enter: main");
    let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();

    terminal.draw(|f| log.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let row = |y: u16| (10..30).map(|x| buffer[(x, y)].symbol()).collect::<String>();
    assert_eq!(row(0).trim_end(), "down");
    assert_eq!(row(1).trim_end(), "enter: main");
  }
}
