//! Tools for defining guessing strategies.

use std::fmt::{Debug, Display};

use crate::engine::GuessRecord;
use crate::Result;

pub mod entropy;
pub mod interactive;

pub use entropy::Entropy;
pub use interactive::{Interactive, Prompt};

/// Trait defining a guessing strategy.
///
/// A strategy is asked once per turn for the next word to play, given
/// every [`GuessRecord`] accumulated so far. It never sees the answer,
/// only the feedback.
///
/// [`Display`] is used to name the strategy in logs, so do not use line
/// breaks.
///
/// # How to implement
///
/// ```rust
/// use std::fmt::Display;
///
/// use sutom_rs::{engine::GuessRecord, Strategy};
///
/// /// Always opens with the same word, then gives up.
/// #[derive(Debug)]
/// struct OneTrick(String);
///
/// impl Display for OneTrick {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "OneTrick")
///     }
/// }
///
/// impl Strategy for OneTrick {
///     fn next_guess(&mut self, _history: &[GuessRecord]) -> sutom_rs::Result<String> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Strategy: Display + Debug {
    /// Produces the next guess from the accumulated feedback.
    ///
    /// Called exactly once per turn by the game loop; the guess is then
    /// graded by [`Game::evaluate()`](crate::engine::Game::evaluate) and
    /// its record appended to the history passed to the next call.
    fn next_guess(&mut self, history: &[GuessRecord]) -> Result<String>;
}
