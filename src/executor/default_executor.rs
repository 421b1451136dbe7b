use crate::config::Config;
use crate::parser::CommandLine;
use crate::executor::{Executor, ExecOutcome, ExecStatus};
use super::command::run_single;
use super::pipeline::run_pipeline;
use super::spawner::{ForkSpawner, Spawner};

/// Routes one parsed line to the command launcher or the pipeline handler.
pub struct DefaultExecutor<S: Spawner = ForkSpawner> {
    spawner: S,
    exit_keyword: String,
}

impl DefaultExecutor<ForkSpawner> {
    pub fn new(config: &Config) -> Self {
        Self::with_spawner(ForkSpawner, config)
    }
}

impl<S: Spawner> DefaultExecutor<S> {
    pub fn with_spawner(spawner: S, config: &Config) -> Self {
        DefaultExecutor {
            spawner,
            exit_keyword: config.exit_keyword.clone(),
        }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }
}

impl<S: Spawner> Executor for DefaultExecutor<S> {
    fn exec(&mut self, line: &CommandLine) -> ExecStatus {
        match line {
            CommandLine::Empty => Ok(ExecOutcome::Code(0)),
            CommandLine::Simple(tokens) => run_single(&mut self.spawner, tokens, &self.exit_keyword),
            CommandLine::Pipeline(stages) => run_pipeline(&mut self.spawner, stages),
        }
    }
}
