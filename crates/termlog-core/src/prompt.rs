//! Single-question interactive prompts.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// A question asked over a pair of terminal streams
pub trait Prompt {
    type Answer;

    fn ask(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Self::Answer>;
}

/// Free-text question with an optional default answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub message: String,
    pub default: Option<String>,
}

impl Input {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl Prompt for Input {
    type Answer = String;

    fn ask(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<String> {
        match &self.default {
            Some(default) => write!(output, "? {} ({}) ", self.message, default)?,
            None => write!(output, "? {} ", self.message)?,
        }
        output.flush()?;

        let answer = read_answer(input)?;
        if answer.is_empty() {
            return Ok(self.default.clone().unwrap_or_default());
        }
        Ok(answer)
    }
}

/// Yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub message: String,
    pub default: bool,
}

impl Confirm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: false,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

impl Prompt for Confirm {
    type Answer = bool;

    /// Unrecognised replies re-ask the question until input runs out.
    fn ask(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<bool> {
        let hint = if self.default { "Y/n" } else { "y/N" };
        loop {
            write!(output, "? {} ({}) ", self.message, hint)?;
            output.flush()?;

            let answer = read_answer(input)?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(self.default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    let reason = format!("\"{}\" is not a valid answer", answer);
                    writeln!(
                        output,
                        "Sorry, your reply was invalid: {}, please try again.",
                        reason
                    )?;
                }
            }
        }
    }
}

fn read_answer(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::PromptAborted);
    }
    Ok(line.trim().to_string())
}
