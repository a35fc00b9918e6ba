use std::sync::Mutex;

use async_trait::async_trait;

use super::{GitBranch, GitRepo};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
  ListBranches,
  Checkout(String),
  Fetch,
}

/// Canned branches plus a record of every call made against the repo.
#[derive(Debug, Default)]
pub struct MockGitRepo {
  branches: Vec<GitBranch>,
  not_a_repo: bool,
  fail_checkout: bool,
  fail_fetch: bool,
  calls: Mutex<Vec<GitCall>>,
}

impl MockGitRepo {
  pub fn with_branches(names: &[&str]) -> Self {
    let branches = names
      .iter()
      .map(|name| GitBranch::new(name.to_string(), "2 days ago".to_string(), format!("Work on {name}")))
      .collect();
    MockGitRepo { branches, ..Default::default() }
  }

  pub fn not_a_repo() -> Self {
    MockGitRepo { not_a_repo: true, ..Default::default() }
  }

  pub fn failing_checkout(self) -> Self {
    MockGitRepo { fail_checkout: true, ..self }
  }

  pub fn failing_fetch(self) -> Self {
    MockGitRepo { fail_fetch: true, ..self }
  }

  pub fn calls(&self) -> Vec<GitCall> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, call: GitCall) {
    self.calls.lock().unwrap().push(call);
  }
}

#[async_trait]
impl GitRepo for MockGitRepo {
  async fn list_branches(&self) -> Result<Vec<GitBranch>, Error> {
    self.record(GitCall::ListBranches);
    if self.not_a_repo {
      return Err(Error::NotAGitRepository("fatal: not a git repository".to_string()));
    }
    Ok(self.branches.clone())
  }

  async fn checkout_branch_from_name(&self, branch_name: &str) -> Result<(), Error> {
    self.record(GitCall::Checkout(branch_name.to_string()));
    if self.fail_checkout {
      return Err(Error::Git {
        command: format!("checkout {branch_name}"),
        stderr: "error: Your local changes would be overwritten by checkout".to_string(),
      });
    }
    Ok(())
  }

  async fn fetch(&self) -> Result<(), Error> {
    self.record(GitCall::Fetch);
    if self.fail_fetch {
      return Err(Error::Git { command: "fetch".to_string(), stderr: "fatal: Authentication failed".to_string() });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[tokio::test]
  async fn test_checkout_strips_remote_prefix() {
    let repo = MockGitRepo::with_branches(&["main"]);

    repo.checkout("origin/feature-x").await.unwrap();
    repo.checkout("feature-x").await.unwrap();

    assert_eq!(repo.calls(), vec![
      GitCall::Checkout("feature-x".to_string()),
      GitCall::Checkout("feature-x".to_string())
    ]);
  }

  #[tokio::test]
  async fn test_not_a_repo_fails_listing() {
    let repo = MockGitRepo::not_a_repo();

    let result = repo.list_branches().await;

    assert!(matches!(result, Err(Error::NotAGitRepository(_))));
  }
}
