use nix::unistd::Pid;
use crate::executor::{ExecError, ExecOutcome, ExecStatus};
use super::argv::Argv;
use super::channel::ChannelSet;
use super::spawner::{SpawnRequest, Spawner};

pub struct PipelineHandler;

impl PipelineHandler {
    /// Runs `stages` as one pipeline and blocks until every spawned stage has
    /// terminated. Returns the exit code of the last stage waited on.
    pub fn run<S: Spawner>(spawner: &mut S, stages: &[String]) -> ExecStatus {
        if stages.len() < 2 {
            return Err(ExecError::PipelineError("Pipeline must have at least two commands".into()));
        }

        let mut channels = ChannelSet::open(stages.len() - 1)?;
        let endpoints = channels.raw_fds();
        tracing::debug!(stages = stages.len(), channels = channels.len(), "pipeline channels open");

        let children = Self::spawn_stages(spawner, stages, &channels, &endpoints);

        // Nothing of ours reads or writes the pipes. Readers only see EOF once
        // every write end, including this process's copy, is gone.
        channels.close_all();
        tracing::debug!(spawned = children.len(), "pipeline channels closed");

        let mut status = 0;
        for pid in children {
            match spawner.wait(pid) {
                Ok(code) => status = code,
                Err(e) => eprintln!("pipesh: {}", e),
            }
        }
        Ok(ExecOutcome::Code(status))
    }

    fn spawn_stages<S: Spawner>(
        spawner: &mut S,
        stages: &[String],
        channels: &ChannelSet,
        endpoints: &[std::os::fd::RawFd],
    ) -> Vec<Pid> {
        let mut children = Vec::with_capacity(stages.len());
        for (i, stage) in stages.iter().enumerate() {
            let argv = match Argv::from_stage(stage) {
                Ok(argv) => argv,
                Err(e) => {
                    eprintln!("pipesh: stage {}: {}", i + 1, e);
                    continue;
                }
            };
            let request = SpawnRequest {
                argv: &argv,
                stdin: channels.input_for(i),
                stdout: channels.output_for(i),
                close: endpoints,
            };
            match spawner.spawn(&request) {
                Ok(pid) => {
                    tracing::debug!(stage = i, %pid, "stage spawned");
                    children.push(pid);
                }
                Err(e) => {
                    eprintln!("pipesh: stage {}: {}", i + 1, e);
                    break;
                }
            }
        }
        children
    }
}

/// Runs a pipeline of two or more stages.
pub fn run_pipeline<S: Spawner>(spawner: &mut S, stages: &[String]) -> ExecStatus {
    PipelineHandler::run(spawner, stages)
}
