//! A strategy that defers every guess to a human.

use std::fmt::{Debug, Display};

use crate::engine::GuessRecord;
use crate::strategy::Strategy;
use crate::Result;

/// The collaborator that supplies human input.
///
/// The console implementation lives in the runner; tests script one.
pub trait Prompt {
    /// Asks for a line of input.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Reports that the last input was rejected.
    fn warn(&mut self, message: &str);
}

/// A strategy that asks a [`Prompt`] for every guess.
///
/// Input is trimmed and lowercased, then validated against the answer
/// length. A mismatched guess is rejected with a warning and the prompt is
/// re-entered; the turn does not advance and nothing reaches the game.
#[derive(Debug)]
pub struct Interactive<P> {
    expected_len: usize,
    prompt: P,
}

impl<P: Prompt> Interactive<P> {
    pub fn new(expected_len: usize, prompt: P) -> Self {
        Interactive {
            expected_len,
            prompt,
        }
    }
}

impl<P: Prompt + Debug> Strategy for Interactive<P> {
    fn next_guess(&mut self, _history: &[GuessRecord]) -> Result<String> {
        loop {
            let guess = self
                .prompt
                .ask(&format!("Enter your {}-letter guess", self.expected_len))?
                .trim()
                .to_lowercase();

            if guess.chars().count() == self.expected_len {
                return Ok(guess);
            }

            self.prompt.warn(&format!(
                "Your guess must be {} letters long. Please try again.",
                self.expected_len
            ));
        }
    }
}

impl<P> Display for Interactive<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interactive")
    }
}
