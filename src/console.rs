//! Console
//!
//! The line-oriented text boundary the workflow talks through, and the two validated
//! readers built on top of it.

use std::{
    io::{self, BufRead, BufReader, Stdin, Stdout, Write},
    num::NonZeroU32,
};

use thiserror::Error;
use tracing::debug;

/// Prompt shown after a rejected yes/no answer.
pub const INVALID_YES_NO: &str = "Invalid input! Please enter 'Y' or 'N' only: ";

/// Prompt shown after a rejected number.
pub const INVALID_WHOLE_NUMBER: &str = "Invalid input! Please enter a whole number: ";

/// Errors raised by a console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The underlying stream failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while reading validated input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream ended before a valid answer was read.
    #[error("end of input")]
    EndOfInput,

    /// Wrapped console error.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// A text console: somewhere to write prompts and read answers from.
pub trait Console {
    /// Writes `text` as-is and flushes it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsoleError`] if the output cannot be written.
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line without its line terminator, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsoleError`] if the input cannot be read.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<BufReader<Stdin>, Stdout> {
    /// The process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the terminal, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);

        Ok(Some(line))
    }
}

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// `Y` or `y`
    Yes,

    /// `N` or `n`
    No,
}

impl YesNo {
    /// Whether the answer was yes.
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    /// The upper-case letter for the answer.
    pub fn as_char(self) -> char {
        match self {
            YesNo::Yes => 'Y',
            YesNo::No => 'N',
        }
    }

    fn parse(answer: &str) -> Option<Self> {
        match answer {
            "Y" | "y" => Some(YesNo::Yes),
            "N" | "n" => Some(YesNo::No),
            _ => None,
        }
    }
}

/// Reads lines until one holds a single `Y`, `y`, `N` or `n`.
///
/// Blank lines are skipped and leading whitespace is ignored, but nothing may follow
/// the letter. Every other line is rejected with [`INVALID_YES_NO`].
///
/// # Errors
///
/// Returns [`InputError::EndOfInput`] if input runs out first.
pub fn read_yes_no(console: &mut impl Console) -> Result<YesNo, InputError> {
    loop {
        let line = console.read_line()?.ok_or(InputError::EndOfInput)?;
        let answer = line.trim_start();

        if answer.is_empty() {
            continue;
        }

        if let Some(answer) = YesNo::parse(answer) {
            return Ok(answer);
        }

        debug!(input = %line, "rejected yes/no answer");
        console.write(INVALID_YES_NO)?;
    }
}

/// Reads lines until one holds a whole number greater than zero.
///
/// Blank lines are skipped and surrounding whitespace is ignored. Every other line is
/// rejected with [`INVALID_WHOLE_NUMBER`].
///
/// Answers are whole lines, not tokens: `5 3` is rejected rather than read as `5` with
/// `3` left over for the next prompt.
///
/// # Errors
///
/// Returns [`InputError::EndOfInput`] if input runs out first.
pub fn read_positive_integer(console: &mut impl Console) -> Result<NonZeroU32, InputError> {
    loop {
        let line = console.read_line()?.ok_or(InputError::EndOfInput)?;
        let answer = line.trim();

        if answer.is_empty() {
            continue;
        }

        match answer.parse::<u32>().ok().and_then(NonZeroU32::new) {
            Some(value) => return Ok(value),
            None => {
                debug!(input = %line, "rejected whole number");
                console.write(INVALID_WHOLE_NUMBER)?;
            }
        }
    }
}
