//! Line tokenization
//!
//! Lines are split on the single space character only. There is no quoting
//! and repeated spaces are not merged, so `a  b` yields an empty token in
//! the middle. Trailing empty tokens are dropped, which makes a blank line
//! (or one made only of spaces) tokenize to nothing.

/// Remove a trailing `\n` or `\r\n` from a line read from the input
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a line into tokens
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line.split(' ').map(str::to_string).collect();

    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        assert_eq!(tokenize("echo a b c"), vec!["echo", "a", "b", "c"]);
    }

    #[test]
    fn test_blank_lines_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ").is_empty());
        assert!(tokenize("     ").is_empty());
    }

    #[test]
    fn test_inner_spaces_are_kept_as_empty_tokens() {
        assert_eq!(tokenize("echo a  b"), vec!["echo", "a", "", "b"]);
    }

    #[test]
    fn test_leading_space_gives_empty_command() {
        assert_eq!(tokenize(" echo hi"), vec!["", "echo", "hi"]);
    }

    #[test]
    fn test_trailing_spaces_are_dropped() {
        assert_eq!(tokenize("fi   "), vec!["fi"]);
    }

    #[test]
    fn test_tabs_are_not_delimiters() {
        assert_eq!(tokenize("echo\ta b"), vec!["echo\ta", "b"]);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("echo hi\n"), "echo hi");
        assert_eq!(strip_line_ending("echo hi\r\n"), "echo hi");
        assert_eq!(strip_line_ending("echo hi"), "echo hi");
        assert_eq!(strip_line_ending("\n"), "");
    }
}
