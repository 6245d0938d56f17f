//! Core functionality of the shell
//!
//! Contains tokenization, the command table, special message providers and
//! the command loop that ties them together.

pub mod command;
pub mod message;
pub mod repl;
pub mod tokenizer;

pub use command::{Command, Invocation};
pub use message::{DefaultMessage, SpecialMessage};
pub use repl::{CommandLoop, Flow, LoopExit};
pub use tokenizer::tokenize;
