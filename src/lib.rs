#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod engine;
pub use engine::{Game, GuessRecord, LetterResult, Verdict};

pub mod pool;
pub use pool::CandidatePool;

pub mod score;
pub use score::EntropyScorer;

pub mod strategy;
pub use strategy::Strategy;

pub mod vocab;
pub use vocab::Vocabulary;

pub mod diag;

pub mod game;

pub type Result<T> = std::result::Result<T, SutomError>;

/// The errors that `sutom_rs` can produce.
#[derive(Debug, Error)]
pub enum SutomError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing diagnostics")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GameError {
    /// The guess does not have as many letters as the answer.
    ///
    /// A mismatched guess is rejected before evaluation and leaves the
    /// history untouched.
    #[error("the guess \"{guess}\" has {actual} letters but the answer has {expected}")]
    LengthMismatch {
        guess: String,
        expected: usize,
        actual: usize,
    },

    /// The answer a session was set up with is not in the vocabulary.
    #[error("the answer \"{0}\" is not in the vocabulary")]
    AnswerNotInVocabulary(String),

    /// No vocabulary word is consistent with the feedback received so far.
    ///
    /// This means the feedback was contradictory or the vocabulary is
    /// missing the answer; scoring over an empty pool is never attempted.
    #[error("no vocabulary word is consistent with the feedback received")]
    NoCandidatesLeft,
}
