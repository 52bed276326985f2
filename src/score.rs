//! Expected-elimination scoring over the candidate pool.
//!
//! For every (letter, position) pair of a prospective guess the scorer
//! asks: across the three feedback outcomes that pair can produce, how
//! many pool words would each outcome eliminate, weighted by how likely
//! the outcome is given the pool? Summing over the positions of a word
//! gives its score, an approximation of the expected information gain of
//! playing it, without computing full entropy.

use std::collections::HashMap;

use crate::pool::CandidatePool;
use crate::{GameError, Result};

/// Ranks guesses by the expected number of candidates they eliminate.
///
/// A scorer is built from one pool state and must be discarded when the
/// pool changes: every probability below is a relative frequency within
/// that pool, so values memoized against one pool are garbage against the
/// next.
///
/// # Examples
///
/// ```rust
/// use sutom_rs::{CandidatePool, EntropyScorer};
///
/// let vocabulary: Vec<String> =
///     ["ab", "bb", "ba"].iter().map(|w| w.to_string()).collect();
/// let pool = CandidatePool::refine(&[], &vocabulary[..2]);
///
/// let mut scorer = EntropyScorer::new(&pool)?;
/// assert_eq!(scorer.best_guess(&vocabulary).as_deref(), Some("ba"));
/// #
/// # Ok::<_, sutom_rs::SutomError>(())
/// ```
#[derive(Debug)]
pub struct EntropyScorer {
    pool: Vec<Vec<char>>,
    cache: HashMap<(char, usize), f64>,
}

impl EntropyScorer {
    /// Builds a scorer over the current pool.
    ///
    /// Returns [`GameError::NoCandidatesLeft`] if the pool is empty, since
    /// every probability divides by the pool size.
    pub fn new(pool: &CandidatePool) -> Result<Self> {
        if pool.is_empty() {
            return Err(GameError::NoCandidatesLeft.into());
        }
        Ok(EntropyScorer {
            pool: pool.iter().map(|w| w.chars().collect()).collect(),
            cache: HashMap::new(),
        })
    }

    /// Expected number of pool words eliminated by playing `letter` at
    /// `position`, summed over the three mutually exclusive outcomes.
    ///
    /// With `n` the pool size, `at` the words holding `letter` at
    /// `position` and `contains` the words holding it anywhere:
    ///
    /// - perfect match: probability `at / n`, eliminates the `n - at`
    ///   words without the letter there;
    /// - absent: probability `(n - contains) / n`, eliminates the
    ///   `contains` words holding the letter;
    /// - wrong position: probability `(contains - at) / n`, eliminates the
    ///   words where the letter is absent or exactly at `position`.
    fn eliminated_by(&mut self, letter: char, position: usize) -> f64 {
        if let Some(&value) = self.cache.get(&(letter, position)) {
            return value;
        }

        let n = self.pool.len();
        let at = self
            .pool
            .iter()
            .filter(|w| w.get(position) == Some(&letter))
            .count();
        let contains = self.pool.iter().filter(|w| w.contains(&letter)).count();
        let absent = n - contains;

        let perfect_term = (at as f64 / n as f64) * (n - at) as f64;
        let absent_term = (absent as f64 / n as f64) * contains as f64;
        let wrong_position_term = ((contains - at) as f64 / n as f64) * (absent + at) as f64;

        let value = perfect_term + absent_term + wrong_position_term;
        self.cache.insert((letter, position), value);
        value
    }

    /// The expected number of pool words eliminated by playing `word`.
    pub fn score(&mut self, word: &str) -> f64 {
        word.chars()
            .enumerate()
            .map(|(position, letter)| self.eliminated_by(letter, position))
            .sum()
    }

    /// Scores every vocabulary word, highest first.
    ///
    /// The sort is stable, so words with equal scores keep their
    /// vocabulary order. That order is the tie-break for
    /// [`best_guess()`](EntropyScorer::best_guess).
    pub fn score_all<'v>(&mut self, vocabulary: &'v [String]) -> Vec<(&'v str, f64)> {
        let mut scored: Vec<(&str, f64)> = vocabulary
            .iter()
            .map(|word| (word.as_str(), self.score(word)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }

    /// The highest-scoring guess, or `None` for an empty vocabulary.
    ///
    /// A pool already reduced to a single word short-circuits: that word is
    /// the answer, so it is returned without scoring anything.
    pub fn best_guess(&mut self, vocabulary: &[String]) -> Option<String> {
        if let [only] = self.pool.as_slice() {
            return Some(only.iter().collect());
        }
        self.score_all(vocabulary)
            .into_iter()
            .next()
            .map(|(word, _)| word.to_string())
    }
}
