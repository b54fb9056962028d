//! The read loop, printing the tokens of every line it reads

use monkey_lexer::Scanner;
use std::io;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Written before every line is read
pub const PROMPT: &str = ">>>";

/// Reads `input` line by line, writing every token of each line to `output` until `input` is
/// exhausted.
#[instrument(skip_all)]
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), ReplError> {
    let mut line = vec![];
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("input exhausted");
            return Ok(());
        }
        let source = trim_line_ending(&line);
        trace!(len = source.len(), "read line");

        for token in Scanner::from_bytes(source) {
            writeln!(output, "{token}")?;
        }
    }
}

fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
    }
    line
}

#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Io(#[from] io::Error),
}
