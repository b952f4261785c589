//! Interactive "pick one of N" capability.
//!
//! Classification calls a `Chooser` when density selection is ambiguous, so
//! the engine can run headlessly with a scripted chooser in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{Result, ZeplinError};

/// Asks a human to pick exactly one of several labelled options.
pub trait Chooser {
    /// Return the 0-based index of the chosen label. Blocks until answered.
    fn choose_index(&mut self, prompt: &str, labels: &[String]) -> Result<usize>;

    /// Pick one value from `(label, value)` options.
    fn choose<T>(&mut self, prompt: &str, options: Vec<(String, T)>) -> Result<T>
    where
        Self: Sized,
    {
        let labels: Vec<String> = options.iter().map(|(label, _)| label.clone()).collect();
        let index = self.choose_index(prompt, &labels)?;
        options
            .into_iter()
            .nth(index)
            .map(|(_, value)| value)
            .ok_or_else(|| ZeplinError::Prompt {
                message: format!("choice {} is out of range", index + 1),
            })
    }
}

/// Numbered terminal prompt.
///
/// Prints the options, then re-asks until a number between 1 and N is
/// entered. There is no timeout; closed input is the only way out.
pub struct TerminalChooser<R, W> {
    input: R,
    output: W,
}

impl TerminalChooser<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalChooser<R, W> {
    fn choose_index(&mut self, prompt: &str, labels: &[String]) -> Result<usize> {
        if labels.is_empty() {
            return Err(ZeplinError::Prompt {
                message: format!("no options to choose from for: {}", prompt),
            });
        }

        writeln!(self.output, "\n{}", prompt)?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, label)?;
        }

        loop {
            write!(self.output, "\nChoice (number): ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Err(ZeplinError::Prompt {
                    message: "input closed before a choice was made".to_string(),
                });
            }

            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "Enter a number between 1 and {}.", labels.len())?,
            }
        }
    }
}

/// Replays pre-recorded answers and records every prompt it was shown.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: VecDeque<usize>,
    /// `(prompt, labels)` for each call, in order.
    pub asked: Vec<(String, Vec<String>)>,
}

impl ScriptedChooser {
    /// Answers are 0-based indices, consumed one per prompt.
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, prompt: &str, labels: &[String]) -> Result<usize> {
        self.asked.push((prompt.to_string(), labels.to_vec()));
        self.answers.pop_front().ok_or_else(|| ZeplinError::Prompt {
            message: format!("no scripted answer for: {}", prompt),
        })
    }
}
