//! Interactive line reader.
//!
//! Reads commands one line at a time. A command that takes arguments but is
//! typed alone is completed by asking for each value in turn.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::commands::{lookup, parse_line, Command};
use crate::error::AstroResult;

/// Prompt reading from `R` and writing prompts to `W`.
pub struct Prompt<R, W> {
    input: Lines<R>,
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.lines(),
            output,
        }
    }

    /// Show `prompt` and read one answer. `None` at end of input.
    pub async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.input.next_line().await
    }

    /// Read the next command.
    ///
    /// Blank lines are skipped. The inner result carries parse errors so the
    /// caller can report them and keep reading; `None` means input ended.
    pub async fn read_command(&mut self) -> io::Result<Option<AstroResult<Command>>> {
        let line = loop {
            match self.ask("> ").await? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let has_args = tokens.next().is_some();
        let spec = match lookup(name) {
            Some(spec) if !has_args && !spec.prompts.is_empty() => spec,
            _ => return Ok(Some(parse_line(&line))),
        };

        let mut answers = Vec::with_capacity(spec.prompts.len());
        for prompt in spec.prompts {
            match self.ask(&format!("Enter {}: ", prompt)).await? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        let joined = answers.join(" ");
        let args: Vec<&str> = joined.split_whitespace().collect();
        Ok(Some(spec.parse(&args)))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
