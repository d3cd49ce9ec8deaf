// ============================================================
// Layer 1 — Interactive Prompts
// ============================================================
// Asks questions on an output stream and reads one line of
// answer from an input stream.
//
// Generic over BufRead/Write so the real program uses
// stdin/stdout while tests script the conversation with
// io::Cursor and a Vec<u8>.
//
// Numeric answers never fail: empty, non-numeric or negative
// input falls back silently to the documented default.
//
// Reference: Rust Book §12 (An I/O Project)

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The stream prompts are written to, for follow-up messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and return the trimmed answer.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Cannot read answer from input")?;
        Ok(line.trim().to_string())
    }

    /// Ask for a count; anything that is not a valid count gives `default`.
    pub fn ask_usize(&mut self, question: &str, default: usize) -> Result<usize> {
        let answer = self.ask(question)?;
        Ok(answer.parse().unwrap_or(default))
    }

    /// Yes only for "y" (any case); everything else, including
    /// an empty answer, is no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
