use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("entry symbol cannot be empty")]
    EmptySymbol,

    #[error("meaning for {symbol} cannot be empty")]
    EmptyMeaning { symbol: String },

    #[error("origin for {symbol} cannot be empty")]
    EmptyOrigin { symbol: String },
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// One quiz item: a character together with its accepted meaning and the
/// historical origin shown once an answer has been given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterEntry {
    symbol: String,
    meaning: String,
    origin: String,
}

impl CharacterEntry {
    /// Creates a validated entry.
    ///
    /// Surrounding whitespace is trimmed from all three fields.
    ///
    /// # Errors
    ///
    /// Returns `EntryError` if any field is blank.
    pub fn new(
        symbol: impl Into<String>,
        meaning: impl Into<String>,
        origin: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let symbol = symbol.into().trim().to_owned();
        if symbol.is_empty() {
            return Err(EntryError::EmptySymbol);
        }

        let meaning = meaning.into().trim().to_owned();
        if meaning.is_empty() {
            return Err(EntryError::EmptyMeaning { symbol });
        }

        let origin = origin.into().trim().to_owned();
        if origin.is_empty() {
            return Err(EntryError::EmptyOrigin { symbol });
        }

        Ok(Self {
            symbol,
            meaning,
            origin,
        })
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
