use crate::tokenizer::{self, PIPE, SPACE};

/// One input line, split into its pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    Empty,
    /// A single command, already split into argument tokens.
    Simple(Vec<String>),
    /// Two or more raw stage strings, tokenized later per stage.
    Pipeline(Vec<String>),
}

impl CommandLine {
    pub fn parse(line: &str) -> CommandLine {
        let mut stages = tokenizer::tokenize(line, PIPE);
        match stages.len() {
            0 => CommandLine::Empty,
            1 => {
                let stage = stages.remove(0);
                CommandLine::Simple(tokenizer::tokenize(&stage, SPACE))
            }
            _ => CommandLine::Pipeline(stages),
        }
    }
}
