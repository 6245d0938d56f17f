//! Command table
//!
//! The four commands the loop understands, looked up case-insensitively
//! from the first token of a line.

use crate::error::{Result, ShellError};
use std::fmt;

/// A command the loop knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the arguments joined by single spaces
    Echo,
    /// Describe the file named by the first argument
    FileInfo,
    /// Print the special message for the arguments
    SpecialMessage,
    /// Leave the loop
    Exit,
}

impl Command {
    /// Every known command, in help order
    pub const ALL: [Command; 4] = [
        Command::Echo,
        Command::FileInfo,
        Command::SpecialMessage,
        Command::Exit,
    ];

    /// Look up a command by name, ignoring ASCII case
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(token))
    }

    /// Name typed at the prompt
    pub fn name(self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::FileInfo => "fi",
            Self::SpecialMessage => "sm",
            Self::Exit => "exit",
        }
    }

    /// Usage line shown when arguments are missing
    pub fn usage(self) -> &'static str {
        match self {
            Self::Echo => "echo [text...]",
            Self::FileInfo => "fi <path>",
            Self::SpecialMessage => "sm [args...]",
            Self::Exit => "exit",
        }
    }

    /// Number of arguments that must be present
    pub fn required_args(self) -> usize {
        match self {
            Self::FileInfo => 1,
            Self::Echo | Self::SpecialMessage | Self::Exit => 0,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tokenized line, split into command and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// First token names a known command
    Known { command: Command, args: Vec<String> },
    /// First token is not a command; ignored by the loop
    Unknown { name: String, args: Vec<String> },
}

impl Invocation {
    /// Build an invocation from tokens; `None` when there are no tokens
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let name = tokens.next()?;
        let args: Vec<String> = tokens.collect();

        Some(match Command::parse(&name) {
            Some(command) => Self::Known { command, args },
            None => Self::Unknown { name, args },
        })
    }
}

/// Check that `args` holds everything `command` needs
pub fn check_arity(command: Command, args: &[String]) -> Result<()> {
    if args.len() < command.required_args() {
        return Err(ShellError::missing_argument(command.name(), command.usage()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("echo"), Some(Command::Echo));
        assert_eq!(Command::parse("ECHO"), Some(Command::Echo));
        assert_eq!(Command::parse("Echo"), Some(Command::Echo));
        assert_eq!(Command::parse("FI"), Some(Command::FileInfo));
        assert_eq!(Command::parse("sM"), Some(Command::SpecialMessage));
        assert_eq!(Command::parse("eXiT"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("ls"), None);
        assert_eq!(Command::parse("echoo"), None);
    }

    #[test]
    fn test_invocation_from_tokens() {
        let invocation = Invocation::from_tokens(tokens(&["Echo", "a", "b"])).unwrap();
        assert_eq!(
            invocation,
            Invocation::Known {
                command: Command::Echo,
                args: tokens(&["a", "b"]),
            }
        );

        let invocation = Invocation::from_tokens(tokens(&["ls", "-l"])).unwrap();
        assert!(matches!(invocation, Invocation::Unknown { ref name, .. } if name == "ls"));

        assert!(Invocation::from_tokens(Vec::new()).is_none());
    }

    #[test]
    fn test_file_info_requires_a_path() {
        let err = check_arity(Command::FileInfo, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Usage: fi <path>");
        assert!(check_arity(Command::FileInfo, &tokens(&["a.txt"])).is_ok());
        assert!(check_arity(Command::Echo, &[]).is_ok());
    }
}
