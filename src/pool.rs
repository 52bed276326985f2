//! Narrowing the vocabulary to the words still consistent with feedback.

use std::collections::BTreeSet;
use std::ops::Deref;

use crate::engine::{GuessRecord, Verdict};

/// The subset of the vocabulary consistent with every verdict received.
///
/// A pool is a value derived from scratch by [`refine()`](CandidatePool::refine)
/// on every turn; it is never patched incrementally. Because the history
/// only ever grows, the constraints only ever accumulate and the pool
/// shrinks monotonically.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CandidatePool {
    words: Vec<String>,
}

impl CandidatePool {
    /// Derives the pool from the full history.
    ///
    /// Confirmed letters are computed first: any letter with a non-`Absent`
    /// verdict anywhere in the history is in the answer, and a
    /// `PerfectMatch` additionally pins its position. Excluded letters are
    /// computed second: a letter with an `Absent` verdict somewhere that
    /// was never confirmed. The order matters: a guess repeating a letter
    /// more often than the answer grades the surplus occurrences `Absent`
    /// even though the letter is in the answer, so confirmed status always
    /// wins.
    ///
    /// A word survives when it contains no excluded letter, carries every
    /// perfectly matched letter at its pinned position, and contains every
    /// other confirmed letter somewhere.
    pub fn refine(history: &[GuessRecord], vocabulary: &[String]) -> CandidatePool {
        let mut confirmed: BTreeSet<char> = BTreeSet::new();
        let mut pinned: BTreeSet<(char, usize)> = BTreeSet::new();
        for result in history.iter().flat_map(|r| r.results()) {
            match result.verdict {
                Verdict::PerfectMatch => {
                    confirmed.insert(result.letter);
                    pinned.insert((result.letter, result.position));
                }
                Verdict::PresentWrongPosition => {
                    confirmed.insert(result.letter);
                }
                Verdict::Absent => {}
            }
        }

        let excluded: BTreeSet<char> = history
            .iter()
            .flat_map(|r| r.results())
            .filter(|r| r.verdict == Verdict::Absent && !confirmed.contains(&r.letter))
            .map(|r| r.letter)
            .collect();

        let words = vocabulary
            .iter()
            .filter(|word| word.chars().all(|c| !excluded.contains(&c)))
            .filter(|word| {
                let letters: Vec<char> = word.chars().collect();
                pinned.iter().all(|&(c, i)| letters.get(i) == Some(&c))
                    && confirmed.iter().all(|c| letters.contains(c))
            })
            .cloned()
            .collect();

        CandidatePool { words }
    }

    /// The surviving words, in vocabulary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Deref for CandidatePool {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::Game;
    use crate::SutomError;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_history_keeps_the_whole_vocabulary() {
        let vocabulary = vocab(&["melon", "lemon", "mango"]);
        let pool = CandidatePool::refine(&[], &vocabulary);

        assert_eq!(pool.words(), vocabulary.as_slice());
    }

    #[test]
    fn excluded_letters_remove_words() -> std::result::Result<(), SutomError> {
        let mut game = Game::new("melon");
        game.evaluate("music")?;

        // u, s, i and c are now excluded; m is confirmed and pinned.
        let vocabulary = vocab(&["melon", "mucus", "mimes", "mango"]);
        let pool = CandidatePool::refine(game.history(), &vocabulary);

        assert_eq!(pool.words(), vocab(&["melon", "mango"]).as_slice());
        Ok(())
    }

    #[test]
    fn perfect_matches_pin_positions() -> std::result::Result<(), SutomError> {
        let mut game = Game::new("melon");
        game.evaluate("lemon")?;

        // e, o and n are pinned; l and m must appear somewhere.
        let vocabulary = vocab(&["melon", "lemon", "felon", "demon"]);
        let pool = CandidatePool::refine(game.history(), &vocabulary);

        assert_eq!(pool.words(), vocab(&["melon", "lemon"]).as_slice());
        Ok(())
    }

    #[test]
    fn confirmed_letters_beat_absent_verdicts() -> std::result::Result<(), SutomError> {
        let mut game = Game::new("apple");
        let record = game.evaluate("poppy")?;

        // The third p is graded Absent, but p is confirmed elsewhere in the
        // same guess and must not be excluded.
        assert!(record
            .results()
            .iter()
            .any(|r| r.letter == 'p' && r.verdict == Verdict::Absent));

        let vocabulary = vocab(&["apple", "ample", "eagle"]);
        let pool = CandidatePool::refine(game.history(), &vocabulary);

        assert!(pool.words().contains(&"apple".to_string()));
        Ok(())
    }

    #[test]
    fn pool_shrinks_monotonically() -> std::result::Result<(), SutomError> {
        let vocabulary = vocab(&["melon", "lemon", "mango", "bingo", "tango"]);
        let mut game = Game::new("melon");

        let mut last = CandidatePool::refine(game.history(), &vocabulary).len();
        for guess in ["tango", "bingo", "lemon", "melon"] {
            game.evaluate(guess)?;
            let size = CandidatePool::refine(game.history(), &vocabulary).len();
            assert!(size <= last);
            last = size;
        }
        Ok(())
    }

    #[test]
    fn refinement_is_idempotent() -> std::result::Result<(), SutomError> {
        let vocabulary = vocab(&["melon", "lemon", "mango", "tango"]);
        let mut game = Game::new("melon");
        game.evaluate("tango")?;

        let once = CandidatePool::refine(game.history(), &vocabulary);
        let twice = CandidatePool::refine(game.history(), &vocabulary);

        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn contradictory_feedback_empties_the_pool() -> std::result::Result<(), SutomError> {
        // The vocabulary does not contain the answer, so its single word is
        // eliminated outright.
        let mut game = Game::new("cd");
        game.evaluate("ab")?;

        let vocabulary = vocab(&["ab"]);
        let pool = CandidatePool::refine(game.history(), &vocabulary);

        assert!(pool.is_empty());
        Ok(())
    }
}
