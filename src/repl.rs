use std::io::{self, BufRead, Write};
use crate::executor::{Executor, ExecOutcome};
use crate::parser::CommandLine;
use crate::prompt::ShellPrompt;

pub struct Repl<E: Executor> {
    prompt: ShellPrompt,
    executor: E,
}

impl<E: Executor> Repl<E> {
    pub fn new(prompt: ShellPrompt, executor: E) -> Self {
        Repl { prompt, executor }
    }

    /// Reads and runs lines until end of input or the exit keyword, and
    /// returns the status the shell should exit with.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<i32> {
        loop {
            self.prompt.show_prompt(out)?;
            let line = match self.prompt.read_line(input)? {
                Some(line) => line,
                None => {
                    // End with EOF (e.g. Ctrl+D)
                    writeln!(out)?;
                    return Ok(0);
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let command = CommandLine::parse(&line);
            tracing::trace!(?command, "parsed");
            match self.executor.exec(&command) {
                Ok(ExecOutcome::Exit(code)) => return Ok(code),
                Ok(ExecOutcome::Code(code)) => tracing::debug!(code, "finished"),
                Err(e) => eprintln!("pipesh: {}", e),
            }
        }
    }
}
