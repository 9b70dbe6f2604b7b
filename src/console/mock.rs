//! # Scripted Console
//!
//! Utilities for driving a session from tests.
//!
//! A [`ScriptedConsole`] answers prompts from a fixed script and records
//! everything the session prints, so a test can feed a whole operator
//! conversation and then assert on the transcript.
//!
//! ```
//! use crusty_pizza::console::{mock::ScriptedConsole, Console};
//!
//! let mut console = ScriptedConsole::new(["pickup"]);
//! assert_eq!(console.read_line("Order type? ").unwrap(), "pickup");
//! assert!(console.read_line("Name? ").is_err());
//! ```

use crate::console::Console;
use crate::input::InputError;
use std::collections::VecDeque;

/// A console that replays scripted answers and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Queues more answers behind the existing ones.
    pub fn push_answers<I, S>(&mut self, answers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True if any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    /// Number of printed lines containing `needle`.
    pub fn count_printed(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| InputError::Closed(prompt.trim().to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<(), InputError> {
        self.output.push(line.to_string());
        Ok(())
    }
}
