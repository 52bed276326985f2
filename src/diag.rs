//! Per-turn solver diagnostics.
//!
//! Whenever the solver runs a scoring pass it can drop a JSON file
//! recording what it knew on that turn: the size of the candidate pool and
//! the score of every vocabulary word. One file per turn, in a per-session
//! directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Result;

/// The record written for one scored turn.
#[derive(Clone, Debug, Serialize)]
pub struct TurnDiagnostics {
    /// How many vocabulary words were still consistent with the feedback.
    pub pool_size: usize,

    /// Every scored word and its expected-elimination score.
    pub scores: BTreeMap<String, f64>,
}

impl TurnDiagnostics {
    pub fn new(pool_size: usize, scored: &[(&str, f64)]) -> Self {
        TurnDiagnostics {
            pool_size,
            scores: scored
                .iter()
                .map(|&(word, score)| (word.to_string(), score))
                .collect(),
        }
    }
}

/// Writes one diagnostics file per turn into a session directory.
#[derive(Clone, Debug)]
pub struct DiagnosticsWriter {
    dir: PathBuf,
}

impl DiagnosticsWriter {
    /// Creates the session directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(DiagnosticsWriter { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the record and returns the path of the new file.
    ///
    /// The turn counter in the filename is derived from the number of
    /// diagnostics files already in the directory at write time, so a
    /// fresh writer continues the numbering of an interrupted session.
    pub fn record(&self, diagnostics: &TurnDiagnostics) -> Result<PathBuf> {
        let turn = self.existing_files()? + 1;
        let path = self.dir.join(format!("guess_{}.json", turn));
        fs::write(&path, serde_json::to_string_pretty(diagnostics)?)?;
        Ok(path)
    }

    fn existing_files(&self) -> Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().extension().map_or(false, |ext| ext == "json") {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn files_number_consecutive_turns() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DiagnosticsWriter::new(dir.path()).unwrap();

        let first = writer
            .record(&TurnDiagnostics::new(3, &[("melon", 1.5)]))
            .unwrap();
        let second = writer
            .record(&TurnDiagnostics::new(2, &[("melon", 0.5)]))
            .unwrap();

        assert_eq!(first.file_name().unwrap(), "guess_1.json");
        assert_eq!(second.file_name().unwrap(), "guess_2.json");
    }

    #[test]
    fn numbering_survives_a_new_writer() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DiagnosticsWriter::new(dir.path()).unwrap();
        writer
            .record(&TurnDiagnostics::new(1, &[("melon", 0.0)]))
            .unwrap();

        let resumed = DiagnosticsWriter::new(dir.path()).unwrap();
        let next = resumed
            .record(&TurnDiagnostics::new(1, &[("melon", 0.0)]))
            .unwrap();

        assert_eq!(next.file_name().unwrap(), "guess_2.json");
    }

    #[test]
    fn record_contents_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DiagnosticsWriter::new(dir.path()).unwrap();
        let path = writer
            .record(&TurnDiagnostics::new(2, &[("melon", 1.5), ("lemon", 1.0)]))
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["pool_size"], 2);
        assert_eq!(value["scores"]["melon"], 1.5);
        assert_eq!(value["scores"]["lemon"], 1.0);
    }
}
