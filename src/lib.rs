pub mod tokenizer;
pub mod parser;
pub mod executor;
pub mod error;
pub mod config;
pub mod prompt;
pub mod repl;
#[cfg(test)]
mod test_support;
