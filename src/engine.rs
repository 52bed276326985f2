//! The guess-evaluation state machine.
//!
//! A [`Game`] holds the hidden answer for one session, grades every guess
//! against it, and accumulates the session history. Grading follows the
//! usual multiset rules for repeated letters: a letter appearing `k` times
//! in the answer but more often in the guess receives exactly `k`
//! non-[`Absent`](Verdict::Absent) verdicts, credited to the leftmost
//! occurrences.

use std::collections::HashMap;
use std::fmt::Display;

use crate::{GameError, Result};

/// The verdict for a single letter of a guess.
///
/// [`Game::evaluate()`] returns one of these per letter, in position order.
/// `PerfectMatch` means the letter sits at the same position in the answer.
/// `PresentWrongPosition` means the answer contains an occurrence of the
/// letter that is neither perfectly matched nor already credited to an
/// earlier position of the guess. `Absent` means no such occurrence is
/// left.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Verdict {
    /// The guessed letter equals the answer letter at this position.
    PerfectMatch,

    /// The guessed letter is in the answer, but somewhere else.
    PresentWrongPosition,

    /// The guessed letter has no unmatched occurrence in the answer.
    Absent,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Verdict::PerfectMatch => "perfect match",
            Verdict::PresentWrongPosition => "incorrect position",
            Verdict::Absent => "not found",
        };
        write!(f, "{}", label)
    }
}

/// A verdict tied to the letter and 0-indexed position it grades.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub position: usize,
    pub verdict: Verdict,
}

/// One graded guess: the word played and one [`LetterResult`] per position.
///
/// The results are in position order and never reordered; the record is
/// immutable once produced.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct GuessRecord {
    guess: String,
    results: Vec<LetterResult>,
}

impl GuessRecord {
    /// The word that was played.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The per-position verdicts, one per letter of the guess.
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// Returns true if every letter was a perfect match.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.verdict == Verdict::PerfectMatch)
    }
}

/// A single game session: the hidden answer plus the guesses graded so far.
///
/// The history is append-only; every successful [`evaluate()`](Game::evaluate)
/// call adds exactly one [`GuessRecord`].
///
/// # Examples
///
/// ```rust
/// use sutom_rs::engine::{Game, Verdict};
///
/// let mut game = Game::new("melon");
/// let record = game.evaluate("lemon")?;
///
/// assert_eq!(record.results()[1].verdict, Verdict::PerfectMatch);
/// assert_eq!(record.results()[0].verdict, Verdict::PresentWrongPosition);
/// assert_eq!(game.history().len(), 1);
/// #
/// # Ok::<_, sutom_rs::SutomError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    answer: Vec<char>,
    history: Vec<GuessRecord>,
}

impl Game {
    /// Creates a session for the given answer word.
    pub fn new(answer: &str) -> Self {
        Game {
            answer: answer.chars().collect(),
            history: Vec::new(),
        }
    }

    /// The number of letters in the answer.
    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }

    /// Every guess graded so far, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Returns true once the answer has been guessed.
    pub fn solved(&self) -> bool {
        self.history.last().map_or(false, GuessRecord::is_correct)
    }

    /// The letters confirmed by a perfect match anywhere in the history,
    /// one slot per answer position.
    pub fn revealed(&self) -> Vec<Option<char>> {
        let mut board = vec![None; self.answer.len()];
        for result in self.history.iter().flat_map(|r| r.results()) {
            if result.verdict == Verdict::PerfectMatch {
                board[result.position] = Some(result.letter);
            }
        }
        board
    }

    /// Grades a guess against the answer and appends the record to the
    /// history.
    ///
    /// Grading runs in two passes. The first pass marks every position
    /// where guess and answer agree as a perfect match and consumes that
    /// letter from both sides. The second pass scans the remaining
    /// positions left to right against the multiset of unconsumed answer
    /// letters: while an occurrence of the guessed letter is left it is
    /// graded [`Verdict::PresentWrongPosition`] and consumed, otherwise
    /// [`Verdict::Absent`]. The left-to-right scan is what decides which
    /// occurrence of a repeated letter gets the credit.
    ///
    /// Returns [`GameError::LengthMismatch`] without touching the history
    /// if the guess is not as long as the answer.
    pub fn evaluate(&mut self, guess: &str) -> Result<GuessRecord> {
        let letters: Vec<char> = guess.chars().collect();
        if letters.len() != self.answer.len() {
            return Err(GameError::LengthMismatch {
                guess: guess.to_string(),
                expected: self.answer.len(),
                actual: letters.len(),
            }
            .into());
        }

        let mut results: Vec<Option<LetterResult>> = vec![None; letters.len()];
        let mut remaining: HashMap<char, usize> = HashMap::new();

        for (i, (&guessed, &expected)) in letters.iter().zip(&self.answer).enumerate() {
            if guessed == expected {
                results[i] = Some(LetterResult {
                    letter: guessed,
                    position: i,
                    verdict: Verdict::PerfectMatch,
                });
            } else {
                *remaining.entry(expected).or_insert(0) += 1;
            }
        }

        for (i, &guessed) in letters.iter().enumerate() {
            if results[i].is_some() {
                continue;
            }
            let verdict = match remaining.get_mut(&guessed) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Verdict::PresentWrongPosition
                }
                _ => Verdict::Absent,
            };
            results[i] = Some(LetterResult {
                letter: guessed,
                position: i,
                verdict,
            });
        }

        let record = GuessRecord {
            guess: guess.to_string(),
            results: results.into_iter().flatten().collect(),
        };
        self.history.push(record.clone());
        Ok(record)
    }
}
