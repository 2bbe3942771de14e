use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Normalize word text for lookup and storage: trim surrounding whitespace,
/// then lowercase. `str::to_lowercase` is Unicode-aware, so the seeded
/// diacritics (ă, â, î, ș, ț) normalize correctly.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// One entry of a list snapshot as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub votes: u32,
}

/// Derived, non-mutating statistics over one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStats {
    pub total_words: usize,
    pub total_votes: u64,
    /// Sorted by votes descending, then text ascending.
    pub words: Vec<Word>,
}

/// Why an admin add was rejected. Unlike `propose`, the admin add treats
/// an existing word as an error instead of voting for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddWordError {
    #[error("Invalid word")]
    Empty,
    #[error("Word already exists")]
    Exists,
}

/// A named ballot: normalized word text mapped to its vote count.
///
/// Every stored count is >= 1. A `BTreeMap` keeps iteration deterministic,
/// so snapshots and replacement selection never depend on hash order.
#[derive(Debug, Clone)]
pub struct WordList {
    pub id: String,
    pub name: String,
    entries: BTreeMap<String, u32>,
}

impl WordList {
    /// Create an empty list with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Create a list carrying a value copy of another list's entries.
    /// The copies are independent: voting in one never shows in the other.
    pub fn copy_of(name: impl Into<String>, source: &WordList) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            entries: source.entries.clone(),
        }
    }

    /// Full snapshot of the list in iteration order.
    pub fn snapshot(&self) -> Vec<Word> {
        self.entries
            .iter()
            .map(|(text, votes)| Word {
                text: text.clone(),
                votes: *votes,
            })
            .collect()
    }

    /// Increment an existing word by one vote. Returns false when the
    /// normalized word is absent; the list is left untouched in that case.
    pub fn vote(&mut self, word: &str) -> bool {
        match self.entries.get_mut(&normalize(word)) {
            Some(votes) => {
                *votes += 1;
                true
            }
            None => false,
        }
    }

    /// Insert a new word at one vote. Proposing a word that already exists
    /// counts as voting for it. Returns false only for words that are empty
    /// after trimming.
    pub fn propose(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return false;
        }
        self.entries
            .entry(normalized)
            .and_modify(|votes| *votes += 1)
            .or_insert(1);
        true
    }

    /// Insert a new word at one vote, rejecting duplicates (admin add).
    pub fn insert_new(&mut self, word: &str) -> Result<(), AddWordError> {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return Err(AddWordError::Empty);
        }
        match self.entries.entry(normalized) {
            Entry::Occupied(_) => Err(AddWordError::Exists),
            Entry::Vacant(slot) => {
                slot.insert(1);
                Ok(())
            }
        }
    }

    /// Remove a word entirely. Returns false when absent.
    pub fn remove(&mut self, word: &str) -> bool {
        self.entries.remove(&normalize(word)).is_some()
    }

    /// Set every entry back to exactly one vote. Entries are kept.
    pub fn reset_votes(&mut self) {
        for votes in self.entries.values_mut() {
            *votes = 1;
        }
    }

    /// Totals plus the snapshot sorted by votes descending. Text ascending
    /// breaks ties so equal counts keep a stable order.
    pub fn stats(&self) -> VoteStats {
        let mut words = self.snapshot();
        words.sort_by(|a, b| b.votes.cmp(&a.votes).then_with(|| a.text.cmp(&b.text)));
        let total_votes = words.iter().map(|w| u64::from(w.votes)).sum();
        VoteStats {
            total_words: words.len(),
            total_votes,
            words,
        }
    }
}
