//! Answer judging.
//!
//! A submission is accepted when the lower-cased meaning contains the
//! normalized submission as a substring. The rule is intentionally loose:
//! `"s"` is accepted for `"sun/day"`.

use crate::model::{CharacterEntry, Verdict};

/// Trims surrounding whitespace and lower-cases the submission.
#[must_use]
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns true when `meaning` contains the normalized `submission`.
///
/// An empty submission never matches.
#[must_use]
pub fn is_match(meaning: &str, submission: &str) -> bool {
    let normalized = normalize_answer(submission);
    if normalized.is_empty() {
        return false;
    }
    meaning.to_lowercase().contains(&normalized)
}

/// Judges a submission against an entry's meaning.
#[must_use]
pub fn judge(entry: &CharacterEntry, submission: &str) -> Verdict {
    Verdict::from(is_match(entry.meaning(), submission))
}
