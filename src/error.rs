use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Not a git repository: {0}")]
  NotAGitRepository(String),
  #[error("`git {command}` failed: {stderr}")]
  Git { command: String, stderr: String },
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Utf8(#[from] std::string::FromUtf8Error),
}
