//! The read-dispatch-print loop
//!
//! Input and output streams are handed in by the caller, so the same loop
//! runs against the terminal or against in-memory buffers.

use crate::{
    config::Config,
    core::{
        command::{Command, Invocation, check_arity},
        message::SpecialMessage,
        tokenizer::{strip_line_ending, tokenize},
    },
    error::{Result, ShellError},
    utils::fs::FileInspector,
};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Printed when a line holds no tokens
pub const INVALID_COMMAND: &str = "Invalid command.";
/// Printed by `fi` when the path does not exist
pub const FILE_NOT_FOUND: &str = "File does not exist.";

/// What to do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The `exit` command was entered
    Requested,
    /// The input stream ran out
    EndOfInput,
}

/// Interactive command loop over arbitrary streams
pub struct CommandLoop<R, W, M> {
    input: R,
    output: W,
    messages: M,
    config: Config,
    inspector: FileInspector,
}

impl<R, W, M> CommandLoop<R, W, M>
where
    R: BufRead,
    W: Write,
    M: SpecialMessage,
{
    /// Create a new loop reading from `input` and writing to `output`
    pub fn new(input: R, output: W, messages: M, config: Config) -> Self {
        Self {
            input,
            output,
            messages,
            config,
            inspector: FileInspector::new(),
        }
    }

    /// Run until `exit` is entered or the input is exhausted
    pub fn run(&mut self) -> Result<LoopExit> {
        let mut buf = Vec::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                return Ok(LoopExit::EndOfInput);
            }

            // Undecodable bytes become U+FFFD instead of ending the loop
            let line = String::from_utf8_lossy(&buf);
            if self.step(strip_line_ending(&line))? == Flow::Exit {
                return Ok(LoopExit::Requested);
            }
        }
    }

    /// Handle a single line (without its line ending)
    ///
    /// Command errors are reported on the output and the loop continues;
    /// only output stream failures are returned.
    pub fn step(&mut self, line: &str) -> Result<Flow> {
        let Some(invocation) = Invocation::from_tokens(tokenize(line)) else {
            writeln!(self.output, "{INVALID_COMMAND}")?;
            return Ok(Flow::Continue);
        };

        let (command, args) = match invocation {
            Invocation::Known { command, args } => (command, args),
            Invocation::Unknown { name, .. } => {
                debug!("Ignoring unknown command {:?}", name);
                return Ok(Flow::Continue);
            }
        };

        match self.dispatch(command, &args) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                warn!("{} failed: {}", command, e);
                writeln!(self.output, "{e}")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, command: Command, args: &[String]) -> Result<Flow> {
        check_arity(command, args)?;

        match command {
            Command::Echo => self.echo(args)?,
            Command::FileInfo => self.file_info(&args[0])?,
            Command::SpecialMessage => self.special_message(args)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn echo(&mut self, args: &[String]) -> Result<()> {
        writeln!(self.output, "{}", args.join(" "))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn file_info(&mut self, path: &str) -> Result<()> {
        let Some(info) = self.inspector.inspect(path) else {
            writeln!(self.output, "{FILE_NOT_FOUND}")?;
            return Ok(());
        };
        let detailed = self.config.file_info.is_detailed();

        writeln!(self.output, "File {}", info.name)?;
        writeln!(self.output, "      Path: {}", info.absolute_path.display())?;
        if detailed {
            writeln!(self.output, "    Length: {}", info.length)?;
        }
        writeln!(self.output, "  Readable: {}", yes_no(info.readable))?;
        writeln!(self.output, " Writeable: {}", yes_no(info.writable))?;
        writeln!(self.output, "Executable: {}", yes_no(info.executable))?;

        if detailed {
            let lines = self
                .inspector
                .read_lines(path)
                .map_err(|e| ShellError::file_read(path, e))?;
            writeln!(self.output, "  Contents: ")?;
            writeln!(self.output, "{}", lines.join("\n"))?;
        }

        Ok(())
    }

    fn special_message(&mut self, args: &[String]) -> Result<()> {
        let message = self.messages.special_message(args);
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
