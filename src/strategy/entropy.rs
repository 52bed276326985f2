//! The expected-elimination solver strategy.

use std::fmt::Display;
use std::path::PathBuf;

use log::{debug, info};

use crate::diag::{DiagnosticsWriter, TurnDiagnostics};
use crate::engine::GuessRecord;
use crate::pool::CandidatePool;
use crate::score::EntropyScorer;
use crate::strategy::Strategy;
use crate::vocab::Vocabulary;
use crate::{GameError, Result};

/// A strategy that narrows the candidate pool with every verdict received
/// and plays the guess expected to eliminate the most candidates.
///
/// The pool is re-derived from the full history on every turn; the guess
/// itself is picked from the whole length-filtered vocabulary, since the
/// most informative word need not be a remaining candidate. Each instance
/// owns its pool outright; nothing is shared between sessions.
///
/// # Examples
///
/// ```rust
/// use sutom_rs::{strategy::Entropy, Strategy, Vocabulary};
///
/// let vocabulary = Vocabulary::new(
///     ["melon", "lemon"].map(String::from),
/// );
/// let mut solver = Entropy::new(5, &vocabulary);
///
/// let opener = solver.next_guess(&[])?;
/// assert_eq!(opener.chars().count(), 5);
/// #
/// # Ok::<_, sutom_rs::SutomError>(())
/// ```
#[derive(Debug)]
pub struct Entropy {
    vocabulary: Vec<String>,
    pool: CandidatePool,
    diagnostics: Option<DiagnosticsWriter>,
}

impl Entropy {
    /// Creates a solver for answers of `answer_len` letters.
    ///
    /// Only words of that length are kept; their order is the tie-break
    /// when several guesses score equally.
    pub fn new(answer_len: usize, vocabulary: &Vocabulary) -> Self {
        let vocabulary = vocabulary.of_length(answer_len);
        let pool = CandidatePool::refine(&[], &vocabulary);
        Entropy {
            vocabulary,
            pool,
            diagnostics: None,
        }
    }

    /// Writes a per-turn diagnostics file into `dir` whenever a scoring
    /// pass runs.
    pub fn with_diagnostics(self, dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Entropy {
            diagnostics: Some(DiagnosticsWriter::new(dir)?),
            ..self
        })
    }

    /// The words still consistent with everything seen so far.
    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }
}

impl Strategy for Entropy {
    fn next_guess(&mut self, history: &[GuessRecord]) -> Result<String> {
        self.pool = CandidatePool::refine(history, &self.vocabulary);
        info!(
            "candidate pool narrowed to {} of {} words",
            self.pool.len(),
            self.vocabulary.len()
        );

        // A collapsed pool is the answer; skip scoring entirely.
        if let [only] = self.pool.words() {
            debug!("pool collapsed, playing \"{}\"", only);
            return Ok(only.clone());
        }

        let mut scorer = EntropyScorer::new(&self.pool)?;
        let scored = scorer.score_all(&self.vocabulary);

        if let Some(writer) = &self.diagnostics {
            let path = writer.record(&TurnDiagnostics::new(self.pool.len(), &scored))?;
            debug!("wrote diagnostics to {}", path.display());
        }

        // An empty ranking means an empty vocabulary, which implies an
        // empty pool; EntropyScorer::new has already rejected that.
        let (best, score) = scored
            .into_iter()
            .next()
            .ok_or(GameError::NoCandidatesLeft)?;
        info!("best guess \"{}\" (expected eliminations {:.2})", best, score);
        Ok(best.to_string())
    }
}

impl Display for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entropy ({} words)", self.vocabulary.len())
    }
}
