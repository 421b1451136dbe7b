use std::io::{self, BufRead, Write};

pub struct ShellPrompt {
    prompt: String,
}

impl ShellPrompt {
    pub fn new(prompt: &str) -> Self {
        ShellPrompt { prompt: prompt.to_string() }
    }

    /// Flushes right away: a forked child must not inherit a pending buffer.
    pub fn show_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.prompt.as_bytes())?;
        out.flush()
    }

    /// Reads one line without its line ending. Bytes that are not valid
    /// UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line<R: BufRead>(&self, input: &mut R) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let bytes_read = input.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g., Ctrl-D)
            return Ok(None);
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_show_prompt() {
        let prompt = ShellPrompt::new("myshell> ");
        let mut out = Vec::new();
        prompt.show_prompt(&mut out).unwrap();
        assert_eq!(out, b"myshell> ");
    }

    #[test]
    fn test_read_lines_until_eof() {
        let prompt = ShellPrompt::new("$ ");
        let mut input = Cursor::new("echo hi\r\n  ls | wc  \nlast");
        assert_eq!(prompt.read_line(&mut input).unwrap().as_deref(), Some("echo hi"));
        assert_eq!(prompt.read_line(&mut input).unwrap().as_deref(), Some("  ls | wc  "));
        assert_eq!(prompt.read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(prompt.read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let prompt = ShellPrompt::new("$ ");
        let mut input = Cursor::new(&b"echo \xff\nls\n"[..]);
        assert_eq!(prompt.read_line(&mut input).unwrap().as_deref(), Some("echo \u{fffd}"));
        assert_eq!(prompt.read_line(&mut input).unwrap().as_deref(), Some("ls"));
    }
}
