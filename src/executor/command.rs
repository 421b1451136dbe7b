use crate::executor::{ExecOutcome, ExecStatus};
use super::argv::Argv;
use super::spawner::{SpawnRequest, Spawner};

/// Runs one command and blocks until it terminates.
///
/// Empty input is a no-op. A first token equal to `exit_keyword` asks the
/// shell to stop; nothing is spawned in that case.
pub fn run_single<S: Spawner>(spawner: &mut S, tokens: &[String], exit_keyword: &str) -> ExecStatus {
    let Some(first) = tokens.first() else {
        return Ok(ExecOutcome::Code(0));
    };
    if first == exit_keyword {
        return Ok(ExecOutcome::Exit(0));
    }

    let argv = Argv::new(tokens)?;
    let pid = spawner.spawn(&SpawnRequest::inherit(&argv))?;
    let code = spawner.wait(pid)?;
    Ok(ExecOutcome::Code(code))
}
