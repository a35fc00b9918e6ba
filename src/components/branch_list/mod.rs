use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  widgets::{HighlightSpacing, List, ListItem, ListState},
};

use crate::{
  action::Action,
  components::{
    Component,
    branch_list::{branch_item::BranchItem, instruction_footer::InstructionFooter},
    debug_log::DebugLog,
  },
  git::types::{GitBranch, GitRepo},
  tui::Frame,
};

pub mod branch_item;
mod instruction_footer;

const FOOTER_HEIGHT: u16 = 1;

pub struct BranchList {
  repo: Arc<dyn GitRepo>,
  branches: Vec<GitBranch>,
  visible: usize,
  selected: usize,
  debug_log: Option<DebugLog>,
  instruction_footer: InstructionFooter,
}

impl BranchList {
  /// `height` is the terminal height; one row is kept back for the footer.
  pub fn new(repo: Arc<dyn GitRepo>, branches: Vec<GitBranch>, height: u16, debug_log: Option<DebugLog>) -> Self {
    let mut branch_list =
      BranchList { repo, branches, visible: 0, selected: 0, debug_log, instruction_footer: InstructionFooter::default() };
    branch_list.set_height(height);
    branch_list
  }

  pub fn set_height(&mut self, height: u16) {
    self.visible = self.branches.len().min(height.saturating_sub(FOOTER_HEIGHT) as usize);
    self.selected = self.selected.min(self.visible.saturating_sub(1));
  }

  pub fn visible_branches(&self) -> &[GitBranch] {
    &self.branches[..self.visible]
  }

  pub fn selected_index(&self) -> usize {
    self.selected
  }

  pub fn selected_branch(&self) -> Option<&GitBranch> {
    self.visible_branches().get(self.selected)
  }

  pub fn debug_log(&self) -> Option<&DebugLog> {
    self.debug_log.as_ref()
  }

  pub fn select_previous(&mut self) {
    self.debug("up");
    self.selected = self.selected.saturating_sub(1);
  }

  pub fn select_next(&mut self) {
    self.debug("down");
    if self.selected + 1 < self.visible {
      self.selected += 1;
    }
  }

  /// Checks out the branch under the cursor and hands it back. `None` when nothing is listed.
  pub async fn checkout_selected(&mut self) -> Result<Option<GitBranch>> {
    let Some(branch) = self.selected_branch().cloned() else {
      return Ok(None);
    };
    self.debug(format!("enter: {}", branch.name));
    self.repo.checkout(&branch.name).await?;
    Ok(Some(branch))
  }

  fn debug(&mut self, message: impl Into<String>) {
    match self.debug_log.as_mut() {
      Some(debug_log) => debug_log.log(message),
      None => tracing::debug!("{}", message.into()),
    }
  }

  fn render_list(&self, f: &mut Frame<'_>, area: Rect) {
    let render_items: Vec<ListItem> =
      self.visible_branches().iter().map(|branch| BranchItem::new(branch).render(area.width)).collect();
    let list = List::new(render_items)
      .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
      .highlight_symbol("> ")
      .highlight_spacing(HighlightSpacing::Always);
    let mut list_state = ListState::default().with_selected(self.selected_branch().map(|_| self.selected));

    f.render_stateful_widget(list, area, &mut list_state);
  }
}

#[async_trait::async_trait]
impl Component for BranchList {
  async fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    let action = match (key.code, key.modifiers) {
      (KeyCode::Char('p'), KeyModifiers::CONTROL) => Some(Action::SelectPrevious),
      (KeyCode::Char('n'), KeyModifiers::CONTROL) => Some(Action::SelectNext),
      (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
      (_, KeyModifiers::CONTROL) => None,
      (KeyCode::Up | KeyCode::Char('k'), _) => Some(Action::SelectPrevious),
      (KeyCode::Down | KeyCode::Char('j'), _) => Some(Action::SelectNext),
      (KeyCode::Enter, _) => Some(Action::CheckoutSelectedBranch),
      (KeyCode::Char('f'), _) => Some(Action::Fetch),
      (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
      _ => None,
    };
    Ok(action)
  }

  async fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::SelectPrevious => {
        self.select_previous();
        Ok(Some(Action::Render))
      },
      Action::SelectNext => {
        self.select_next();
        Ok(Some(Action::Render))
      },
      Action::Resize(_, height) => {
        self.set_height(height);
        Ok(Some(Action::Render))
      },
      _ => Ok(None),
    }
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let layout =
      Layout::new(Direction::Vertical, [Constraint::Fill(1), Constraint::Length(FOOTER_HEIGHT)]).split(area);
    self.render_list(f, layout[0]);
    if let Some(debug_log) = &self.debug_log {
      debug_log.render(f, layout[0]);
    }
    self.instruction_footer.render(f, layout[1]);
    if self.selected_branch().is_some() {
      f.set_cursor_position((layout[0].x, layout[0].y + self.selected as u16));
    }
    Ok(())
  }
}
