use crate::error::{QualifierError, Result};
use std::io::{BufRead, Write};

/// Question-and-answer channel the wizard talks through
pub trait Prompter {
    /// Show an informational line
    fn say(&mut self, message: &str) -> Result<()>;

    /// Ask a free-text question and return the trimmed answer
    fn text(&mut self, question: &str) -> Result<String>;

    /// Ask a yes/no question; an empty answer takes `default`
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Prompter over a line-oriented reader and writer, normally stdin/stdout
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QualifierError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn text(&mut self, question: &str) -> Result<String> {
        write!(self.output, "? {question} ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };

        loop {
            write!(self.output, "? {question} {hint} ")?;
            self.output.flush()?;

            match parse_confirmation(&self.read_line()?, default) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}

fn parse_confirmation(answer: &str, default: bool) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
