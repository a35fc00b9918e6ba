use async_trait::async_trait;

use crate::error::Error;

const REMOTE_PREFIX: &str = "origin/";

/// One line of `git branch -a` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBranch {
  pub name: String,
  pub author_date: String,
  pub subject: String,
}

impl GitBranch {
  pub fn new(name: String, author_date: String, subject: String) -> Self {
    GitBranch { name, author_date, subject }
  }
}

/// Maps a remote-tracking name onto the local branch of the same short name.
pub fn local_branch_name(name: &str) -> &str {
  name.strip_prefix(REMOTE_PREFIX).unwrap_or(name)
}

#[async_trait]
pub trait GitRepo: Send + Sync {
  async fn list_branches(&self) -> Result<Vec<GitBranch>, Error>;
  async fn checkout_branch_from_name(&self, branch_name: &str) -> Result<(), Error>;
  async fn fetch(&self) -> Result<(), Error>;

  async fn checkout(&self, branch_name: &str) -> Result<(), Error> {
    self.checkout_branch_from_name(local_branch_name(branch_name)).await
  }
}
