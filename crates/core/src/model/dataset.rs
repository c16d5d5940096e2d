use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::entry::{CharacterEntry, EntryError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset must contain at least one entry")]
    Empty,

    #[error("duplicate symbol in dataset: {symbol}")]
    DuplicateSymbol { symbol: String },

    #[error(transparent)]
    Entry(#[from] EntryError),
}

//
// ─── BUILT-IN ENTRIES ──────────────────────────────────────────────────────────
//

// (symbol, meaning, origin)
const BUILTIN: [(&str, &str, &str); 7] = [
    (
        "日",
        "sun/day",
        "Derived from a pictograph of the sun (○ with a dot). \
         Ancient Chinese drew it as a circle representing the sun.",
    ),
    (
        "月",
        "moon/month",
        "Originally a crescent moon shape (🌙). Over time, it became more angular.",
    ),
    (
        "山",
        "mountain",
        "A stylized drawing of three mountain peaks (𓆗 → 山).",
    ),
    (
        "川",
        "river",
        "Represents flowing water (𓈖 → 川). The lines symbolize river currents.",
    ),
    (
        "木",
        "tree/wood",
        "Depicts a tree with roots (𓇯) and branches (木).",
    ),
    (
        "火",
        "fire",
        "Resembles flames rising (灬 is the 'fire' radical).",
    ),
    (
        "人",
        "person",
        "Simplified from a stick figure of a person (𓀀 → 人).",
    ),
];

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// Read-only, ordered collection of quiz entries with unique symbols.
///
/// Cloning is cheap; the entries are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: Arc<[CharacterEntry]>,
}

impl Dataset {
    /// Builds a dataset from the given entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if no entries are given and
    /// `DatasetError::DuplicateSymbol` if two entries share a symbol.
    pub fn new(entries: impl IntoIterator<Item = CharacterEntry>) -> Result<Self, DatasetError> {
        let entries: Vec<CharacterEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.symbol()) {
                return Err(DatasetError::DuplicateSymbol {
                    symbol: entry.symbol().to_owned(),
                });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// The seven reference kanji.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table itself is malformed.
    pub fn builtin() -> Result<Self, DatasetError> {
        let entries = BUILTIN
            .iter()
            .map(|(symbol, meaning, origin)| CharacterEntry::new(*symbol, *meaning, *origin))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&CharacterEntry> {
        self.entries.iter().find(|entry| entry.symbol() == symbol)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
