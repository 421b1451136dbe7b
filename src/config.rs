use std::fs;
use std::path::Path;
pub use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// First token of a non-piped line that ends the shell.
    pub exit_keyword: String,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: "pipesh> ".to_string(),
            exit_keyword: "quit".to_string(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path)?;
        Self::load_from_str(&src)
    }

    /// `key=value` lines; blank lines and `#` comments are skipped. The value
    /// is everything after the first `=`, untrimmed.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("Line {}: No '=' found: {}", lineno + 1, line)));
            };

            match key.trim() {
                "prompt" => config.prompt = value.to_string(),
                "exit_keyword" => {
                    let keyword = value.trim();
                    if keyword.is_empty() || keyword.contains([' ', '\t', '|']) {
                        return Err(ConfigError::Parse(format!(
                            "Line {}: exit_keyword must be a single word: {}",
                            lineno + 1,
                            line
                        )));
                    }
                    config.exit_keyword = keyword.to_string();
                }
                other => {
                    return Err(ConfigError::Parse(format!("Line {}: Unknown key: {}", lineno + 1, other)));
                }
            }
        }

        Ok(config)
    }
}
