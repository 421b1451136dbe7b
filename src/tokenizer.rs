pub const PIPE: char = '|';
pub const SPACE: char = ' ';

/// Splits `line` on `delimiter`, trims spaces and tabs from every piece and
/// drops the pieces that end up empty.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|piece| piece.trim_matches([' ', '\t']))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
