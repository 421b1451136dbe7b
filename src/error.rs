use std::io;
use nix::errno::Errno;
use thiserror::Error;

/// Failures observed by the shell process itself. Failures inside a forked
/// child (exec, dup2) are reported by the child and only show up here as a
/// non-zero exit code.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("pipe creation failed: {0}")]
    Channel(#[source] Errno),
    #[error("fork failed: {0}")]
    Spawn(#[source] Errno),
    #[error("wait failed: {0}")]
    Wait(#[source] Errno),
    #[error("empty command")]
    EmptyCommand,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("pipeline error: {0}")]
    PipelineError(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
