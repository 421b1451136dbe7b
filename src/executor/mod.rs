mod executor;
mod default_executor;
mod argv;
mod channel;
mod command;
mod pipeline;
mod spawner;

pub use crate::error::ExecError;
pub use executor::{Executor, ExecOutcome, ExecStatus};
pub use default_executor::DefaultExecutor;
pub use argv::Argv;
pub use channel::{Channel, ChannelSet};
pub use command::run_single;
pub use pipeline::{run_pipeline, PipelineHandler};
pub use spawner::{
    ForkSpawner, SpawnRequest, Spawner,
    EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND, EXIT_REDIRECT_FAILED,
};
