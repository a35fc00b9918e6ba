use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tracing::{error, info, warn};

use crate::{
  error::Error,
  git::types::{GitBranch, GitRepo},
};

const BRANCH_FORMAT: &str = "--format=%(refname:short)\t%(authordate:relative)\t%(subject)";

pub struct GitCliRepo {
  work_dir: Option<PathBuf>,
}

impl GitCliRepo {
  pub fn from_cwd() -> GitCliRepo {
    GitCliRepo { work_dir: None }
  }

  pub fn in_dir(work_dir: impl Into<PathBuf>) -> GitCliRepo {
    GitCliRepo { work_dir: Some(work_dir.into()) }
  }
}

async fn run_git_command(work_dir: Option<&Path>, args: &[&str]) -> Result<String, Error> {
  let args_log_command = args.join(" ");
  info!("Running `git {}`", args_log_command);
  let mut command = TokioCommand::new("git");
  if let Some(work_dir) = work_dir {
    command.current_dir(work_dir);
  }
  let output = command.args(args).output().await.map_err(|err| {
    error!("Failed to run `git {}`, error: {}", args_log_command, err);
    Error::Io(err)
  })?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    error!("`git {}` exited with {}, error: {}", args_log_command, output.status, stderr);
    return Err(Error::Git { command: args_log_command, stderr });
  }
  let content = String::from_utf8(output.stdout)?;
  info!("Received git cli reply:\n{}", content);
  Ok(content)
}

/// Parses tab separated `name\tdate\tsubject` records, one per line.
pub fn parse_branches(output: &str) -> Vec<GitBranch> {
  output
    .lines()
    .filter(|line| !line.is_empty())
    .filter_map(|line| {
      let mut fields = line.splitn(3, '\t');
      match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(author_date), Some(subject)) => {
          Some(GitBranch::new(name.to_string(), author_date.to_string(), subject.to_string()))
        },
        _ => {
          warn!("Skipping malformed branch line: {}", line);
          None
        },
      }
    })
    .collect()
}

#[async_trait]
impl GitRepo for GitCliRepo {
  async fn list_branches(&self) -> Result<Vec<GitBranch>, Error> {
    let res = run_git_command(self.work_dir.as_deref(), &["branch", "-a", BRANCH_FORMAT])
      .await
      .map_err(|err| Error::NotAGitRepository(err.to_string()))?;
    Ok(parse_branches(&res))
  }

  async fn checkout_branch_from_name(&self, branch_name: &str) -> Result<(), Error> {
    run_git_command(self.work_dir.as_deref(), &["checkout", branch_name]).await?;
    Ok(())
  }

  async fn fetch(&self) -> Result<(), Error> {
    run_git_command(self.work_dir.as_deref(), &["fetch"]).await?;
    Ok(())
  }
}
