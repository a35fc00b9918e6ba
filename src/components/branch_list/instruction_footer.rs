use ratatui::{
  layout::Rect,
  style::{Modifier, Style},
  widgets::Paragraph,
};

use crate::tui::Frame;

const INSTRUCTIONS: [&str; 4] = ["↑/k ↓/j: Move", "enter: Checkout", "f: Fetch", "q/esc: Quit"];

#[derive(Default)]
pub struct InstructionFooter {}

impl InstructionFooter {
  /// Reversed across the whole of `area`, not just the text.
  pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
    let paragraph =
      Paragraph::new(INSTRUCTIONS.join(" | ")).style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(paragraph, area);
  }
}
