use ratatui::widgets::ListItem;

use crate::git::types::GitBranch;

pub const REFNAME_WIDTH: usize = 24;
pub const AUTHOR_DATE_WIDTH: usize = 16;
/// Width of the `"> "` / `"  "` selection marker.
pub const MARKER_WIDTH: usize = 2;

/// Columns left for the subject once the marker, name, date and separators are laid out.
pub fn subject_width(terminal_width: u16) -> usize {
  (terminal_width as usize).saturating_sub(MARKER_WIDTH + REFNAME_WIDTH + 1 + AUTHOR_DATE_WIDTH + 1)
}

#[derive(Debug, Clone)]
pub struct BranchItem<'a> {
  pub branch: &'a GitBranch,
}

impl<'a> BranchItem<'a> {
  pub fn new(branch: &'a GitBranch) -> Self {
    BranchItem { branch }
  }

  /// Name and date are padded or cut to their columns; the subject is cut silently.
  pub fn format(&self, terminal_width: u16) -> String {
    let subject: String = self.branch.subject.chars().take(subject_width(terminal_width)).collect();
    format!(
      "{:<name_width$.name_width$} {:<date_width$.date_width$} {}",
      self.branch.name,
      self.branch.author_date,
      subject,
      name_width = REFNAME_WIDTH,
      date_width = AUTHOR_DATE_WIDTH,
    )
  }

  pub fn render(&self, terminal_width: u16) -> ListItem<'static> {
    ListItem::new(self.format(terminal_width))
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn branch(name: &str, author_date: &str, subject: &str) -> GitBranch {
    GitBranch::new(name.to_string(), author_date.to_string(), subject.to_string())
  }

  #[test]
  fn test_subject_width() {
    assert_eq!(subject_width(80), 36);
    assert_eq!(subject_width(44), 0);
    assert_eq!(subject_width(10), 0);
  }

  #[test]
  fn test_format_pads_columns() {
    let branch = branch("main", "2 days ago", "Fix build");

    let formatted = BranchItem::new(&branch).format(80);

    assert_eq!(formatted, format!("{:<24} {:<16} Fix build", "main", "2 days ago"));
    assert_eq!(formatted.find("2 days ago"), Some(REFNAME_WIDTH + 1));
  }

  #[test]
  fn test_format_truncates_long_fields() {
    let branch = branch("feature/a-very-long-branch-name-indeed", "11 months, 3 weeks ago", "Subject");

    let formatted = BranchItem::new(&branch).format(80);

    assert_eq!(formatted, "feature/a-very-long-bran 11 months, 3 wee Subject");
  }

  #[test]
  fn test_format_truncates_subject_to_terminal_width() {
    let branch = branch("main", "now", "0123456789");

    let formatted = BranchItem::new(&branch).format(50);

    assert_eq!(formatted.chars().count(), 48);
    assert!(formatted.ends_with(" 012345"));
  }

  #[test]
  fn test_format_counts_characters_not_bytes() {
    let branch = branch("ブランチ", "昨日", "日本語の件名");

    let formatted = BranchItem::new(&branch).format(45);

    assert!(formatted.starts_with("ブランチ"));
    assert!(formatted.ends_with(" 日"));
  }
}
