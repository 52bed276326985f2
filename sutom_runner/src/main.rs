//! Console front end for `sutom_rs`.
//!
//! Everything the core treats as an external collaborator lives here: the
//! argument parsing, the colored board rendering, the stdin prompt and the
//! logger setup.

use std::io::{self, BufRead, Write};
use std::process;

use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use log::debug;
use owo_colors::OwoColorize;
use rand::seq::SliceRandom;

use sutom_rs::{
    engine::{GuessRecord, Verdict},
    game::{self, Observer, Outcome},
    strategy::{Entropy, Interactive, Prompt},
    Strategy, SutomError, Vocabulary,
};

/// Reads guesses from stdin, one line per prompt.
#[derive(Debug)]
struct Console;

impl Prompt for Console {
    fn ask(&mut self, message: &str) -> sutom_rs::Result<String> {
        print!("{}: ", message);
        io::stdout().flush()?;

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            // EOF: without this the length check would re-prompt forever.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
        }
        Ok(buf)
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.red().bold());
    }
}

/// Renders the board and every verdict to the terminal.
#[derive(Debug, Default)]
struct Board;

impl Observer for Board {
    fn turn_started(&mut self, turn: usize, board: &[Option<char>]) {
        println!("\n----- ROUND #{} -----", turn);
        for slot in board {
            match slot {
                Some(letter) => print!("{} ", letter.green()),
                None => print!("_ "),
            }
        }
        println!("\n");
    }

    fn guess_made(&mut self, guess: &str, history: &[GuessRecord]) {
        println!("{}", format!("Guess: {}", guess).blue());
        let past: Vec<&str> = history.iter().map(GuessRecord::guess).collect();
        println!("Past guesses: {:?}", past);
    }

    fn guess_evaluated(&mut self, record: &GuessRecord) {
        for result in record.results() {
            let status = match result.verdict {
                Verdict::PerfectMatch => result.verdict.green().to_string(),
                Verdict::PresentWrongPosition => result.verdict.yellow().to_string(),
                Verdict::Absent => result.verdict.red().to_string(),
            };
            println!(
                "Letter '{}' at position {}: {}",
                result.letter, result.position, status
            );
        }
    }

    fn solved(&mut self, answer: &str) {
        println!(
            "{}",
            format!("Congratulations! The word was '{}'!", answer)
                .green()
                .bold()
        );
    }
}

struct Options {
    vocab_path: String,
    answer: Option<String>,
    ai: bool,
    max_turns: usize,
    diagnostics_dir: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        vocab_path: String::new(),
        answer: None,
        ai: false,
        max_turns: 10,
        diagnostics_dir: None,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Play a Sutom-style word-guessing game.");
        parser.refer(&mut options.ai).add_option(
            &["--ai"],
            StoreTrue,
            "Let the solver play instead of prompting for guesses",
        );
        parser.refer(&mut options.answer).add_option(
            &["-w", "--word"],
            StoreOption,
            "The answer word (defaults to a random vocabulary word)",
        );
        parser.refer(&mut options.max_turns).add_option(
            &["--max-turns"],
            Store,
            "Turn budget before the game is abandoned",
        );
        parser.refer(&mut options.diagnostics_dir).add_option(
            &["--diagnostics-dir"],
            StoreOption,
            "Directory for per-turn solver diagnostics",
        );
        parser.refer(&mut options.vocab_path).required().add_argument(
            "vocab-path",
            Store,
            "Path to the newline-delimited vocabulary file",
        );
        parser.parse_args_or_exit();
    }

    options
}

fn run(options: Options) -> Result<(), SutomError> {
    let vocabulary = Vocabulary::load(&options.vocab_path)?;
    debug!("loaded {} vocabulary words", vocabulary.len());

    let answer = match options.answer {
        Some(word) => word,
        None => match vocabulary.words().choose(&mut rand::thread_rng()) {
            Some(word) => word.clone(),
            None => {
                eprintln!("the vocabulary is empty");
                process::exit(1);
            }
        },
    };
    let answer_len = answer.chars().count();

    let mut strategy: Box<dyn Strategy> = if options.ai {
        let mut solver = Entropy::new(answer_len, &vocabulary);
        if let Some(dir) = options.diagnostics_dir {
            solver = solver.with_diagnostics(dir)?;
        }
        Box::new(solver)
    } else {
        Box::new(Interactive::new(answer_len, Console))
    };

    match game::play(
        &answer,
        &vocabulary,
        strategy.as_mut(),
        options.max_turns,
        &mut Board,
    )? {
        Outcome::Solved { turns } => println!("Solved in {} turns.", turns),
        Outcome::OutOfTurns => println!("Out of turns! The word was '{}'.", answer),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(parse_args()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
