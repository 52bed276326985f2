//! Vocabulary loading and filtering.
//!
//! A vocabulary is a newline-delimited list of lowercase words. The loader
//! trims whitespace, drops blank lines and deduplicates while preserving
//! first-occurrence order. That order is what breaks scoring ties, so it
//! has to be deterministic.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::Result;

/// The full set of legal words, read-only after load.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from words already in memory.
    ///
    /// Blank entries are dropped and duplicates keep their first position.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Vocabulary {
            words: words
                .into_iter()
                .filter(|w| !w.is_empty())
                .unique()
                .collect(),
        }
    }

    /// Reads one word per line, trimming and skipping blank lines.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(Self::new(words))
    }

    /// Loads a vocabulary file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Every word, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// The words of exactly `len` letters, in load order.
    ///
    /// This is the filter every game session applies up front: words of the
    /// wrong length can never be the answer or a legal guess.
    pub fn of_length(&self, len: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.chars().count() == len)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
