use crate::error::ExecError;
use crate::parser::CommandLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The command or pipeline finished with this exit code.
    Code(i32),
    /// The shell itself should terminate with this status.
    Exit(i32),
}

pub type ExecStatus = Result<ExecOutcome, ExecError>;

pub trait Executor {
    fn exec(&mut self, line: &CommandLine) -> ExecStatus;
}
