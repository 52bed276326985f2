//! Driving a full game session.
//!
//! The loop itself enforces nothing about how guesses are produced; it
//! wires a [`Strategy`] to a [`Game`], caps the number of turns and hands
//! every observable moment to an [`Observer`] so rendering can stay out of
//! the core.

use log::info;

use crate::engine::{Game, GuessRecord};
use crate::strategy::Strategy;
use crate::vocab::Vocabulary;
use crate::{GameError, Result};

/// How a session ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The answer was guessed on this turn (1-indexed).
    Solved { turns: usize },

    /// The turn budget ran out first.
    OutOfTurns,
}

/// Rendering callbacks for one session.
///
/// Every method has an empty default so tests can drive sessions silently.
pub trait Observer {
    /// A turn is starting; `board` holds the letters revealed so far.
    fn turn_started(&mut self, _turn: usize, _board: &[Option<char>]) {}

    /// The strategy committed to a guess.
    fn guess_made(&mut self, _guess: &str, _history: &[GuessRecord]) {}

    /// The guess was graded.
    fn guess_evaluated(&mut self, _record: &GuessRecord) {}

    /// The answer was found.
    fn solved(&mut self, _answer: &str) {}
}

/// An [`Observer`] that renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {}

/// Plays one session to completion.
///
/// Verifies the setup precondition that the answer belongs to the
/// vocabulary, then runs up to `max_turns` turns of
/// strategy-guess/engine-grade. Terminates early on a correct guess.
///
/// A strategy returning a wrong-length guess surfaces the engine's
/// [`GameError::LengthMismatch`]; the interactive strategy re-prompts
/// before that can happen, so reaching it means a buggy strategy.
pub fn play(
    answer: &str,
    vocabulary: &Vocabulary,
    strategy: &mut dyn Strategy,
    max_turns: usize,
    observer: &mut dyn Observer,
) -> Result<Outcome> {
    if !vocabulary.contains(answer) {
        return Err(GameError::AnswerNotInVocabulary(answer.to_string()).into());
    }

    let mut game = Game::new(answer);
    info!("starting session with strategy {}", strategy);

    for turn in 1..=max_turns {
        observer.turn_started(turn, &game.revealed());

        let guess = strategy.next_guess(game.history())?;
        observer.guess_made(&guess, game.history());

        let record = game.evaluate(&guess)?;
        observer.guess_evaluated(&record);

        if record.is_correct() {
            observer.solved(answer);
            info!("solved \"{}\" in {} turns", answer, turn);
            return Ok(Outcome::Solved { turns: turn });
        }
    }

    info!("out of turns for \"{}\"", answer);
    Ok(Outcome::OutOfTurns)
}

#[cfg(test)]
mod test {
    use std::fmt::Display;

    use super::*;
    use crate::strategy::Entropy;
    use crate::SutomError;

    fn vocabulary(words: &[&str]) -> Vocabulary {
        Vocabulary::new(words.iter().map(|w| w.to_string()))
    }

    #[derive(Debug)]
    struct Scripted(Vec<&'static str>);

    impl Display for Scripted {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "Scripted")
        }
    }

    impl Strategy for Scripted {
        fn next_guess(&mut self, _history: &[GuessRecord]) -> Result<String> {
            Ok(self.0.remove(0).to_string())
        }
    }

    #[test]
    fn answer_must_be_in_the_vocabulary() {
        let vocab = vocabulary(&["melon", "lemon"]);
        let mut strategy = Scripted(vec!["melon"]);

        let err = play("mango", &vocab, &mut strategy, 5, &mut Silent).unwrap_err();
        assert!(matches!(
            err,
            SutomError::Game {
                kind: GameError::AnswerNotInVocabulary(_),
            }
        ));
    }

    #[test]
    fn solves_on_a_correct_guess() {
        let vocab = vocabulary(&["melon", "lemon"]);
        let mut strategy = Scripted(vec!["lemon", "melon"]);

        let outcome = play("melon", &vocab, &mut strategy, 5, &mut Silent).unwrap();
        assert_eq!(outcome, Outcome::Solved { turns: 2 });
    }

    #[test]
    fn stops_when_the_budget_runs_out() {
        let vocab = vocabulary(&["melon", "lemon"]);
        let mut strategy = Scripted(vec!["lemon", "lemon", "lemon"]);

        let outcome = play("melon", &vocab, &mut strategy, 3, &mut Silent).unwrap();
        assert_eq!(outcome, Outcome::OutOfTurns);
    }

    #[test]
    fn entropy_strategy_plays_a_whole_session() {
        let vocab = vocabulary(&["ab", "cb"]);
        let mut solver = Entropy::new(2, &vocab);

        // Turn one ties "ab" and "cb" and plays "ab" by vocabulary order;
        // the feedback collapses the pool onto the answer for turn two.
        let outcome = play("cb", &vocab, &mut solver, 10, &mut Silent).unwrap();
        assert_eq!(outcome, Outcome::Solved { turns: 2 });
    }

    #[test]
    fn observer_sees_every_turn() {
        #[derive(Default)]
        struct Counting {
            turns: usize,
            graded: usize,
            solved: bool,
        }

        impl Observer for Counting {
            fn turn_started(&mut self, _turn: usize, _board: &[Option<char>]) {
                self.turns += 1;
            }

            fn guess_evaluated(&mut self, _record: &GuessRecord) {
                self.graded += 1;
            }

            fn solved(&mut self, _answer: &str) {
                self.solved = true;
            }
        }

        let vocab = vocabulary(&["melon", "lemon"]);
        let mut strategy = Scripted(vec!["lemon", "melon"]);
        let mut observer = Counting::default();

        play("melon", &vocab, &mut strategy, 5, &mut observer).unwrap();
        assert_eq!(observer.turns, 2);
        assert_eq!(observer.graded, 2);
        assert!(observer.solved);
    }
}
