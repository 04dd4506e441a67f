//! Numbered-menu input
//!
//! Every choice in the game is "pick a number between 1 and N". Providers
//! re-prompt on bad input themselves and only fail when input runs out.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::error::{BrawlError, Result};

/// Source of player choices
pub trait InputProvider {
    /// Ask until a number in `1..=max` is given
    fn get_integer(&mut self, prompt: &str, max: u32) -> Result<u32>;

    /// Ask for a free-form line (trimmed)
    fn get_line(&mut self, prompt: &str) -> Result<String>;

    /// Show a numbered menu and return the 1-based choice
    fn choose(&mut self, title: &str, options: &[String]) -> Result<u32> {
        let mut prompt = format!("{}\n", title);
        for (i, option) in options.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, option));
        }
        prompt.push_str("\nEnter number: ");
        self.get_integer(&prompt, options.len() as u32)
    }
}

impl<I: InputProvider + ?Sized> InputProvider for &mut I {
    fn get_integer(&mut self, prompt: &str, max: u32) -> Result<u32> {
        (**self).get_integer(prompt, max)
    }

    fn get_line(&mut self, prompt: &str) -> Result<String> {
        (**self).get_line(prompt)
    }
}

/// Parse a raw answer against `1..=max`
pub fn parse_selection(raw: &str, max: u32) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(BrawlError::InvalidSelection {
            value: trimmed.to_string(),
            max,
        }),
    }
}

/// Interactive provider over any reader/writer pair (stdin/stdout in the game)
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(BrawlError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn get_integer(&mut self, prompt: &str, max: u32) -> Result<u32> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Menus are printed once; retries only repeat the last prompt line
        let retry_prompt = prompt.rsplit('\n').next().unwrap_or(prompt);

        loop {
            let line = self.read_line()?;
            match parse_selection(&line, max) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(error = %err, "Rejected menu input");
                    if line.trim().parse::<i64>().is_ok() {
                        writeln!(
                            self.writer,
                            "Input should be an integer between 1 and {}. Please try again.",
                            max
                        )?;
                    } else {
                        writeln!(self.writer, "Please enter an integer.")?;
                    }
                    write!(self.writer, "{}", retry_prompt)?;
                    self.writer.flush()?;
                }
            }
        }
    }

    fn get_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }
}

/// Pre-recorded answers, for tests and scripted runs
///
/// Invalid answers are skipped the same way a console would re-prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub rejected: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            rejected: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn get_integer(&mut self, _prompt: &str, max: u32) -> Result<u32> {
        while let Some(answer) = self.answers.pop_front() {
            match parse_selection(&answer, max) {
                Ok(value) => return Ok(value),
                Err(_) => self.rejected += 1,
            }
        }
        Err(BrawlError::InputClosed)
    }

    fn get_line(&mut self, _prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .map(|s| s.trim().to_string())
            .ok_or(BrawlError::InputClosed)
    }
}
