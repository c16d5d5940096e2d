use chrono::{DateTime, Utc};
use serde::Serialize;

use kanji_core::Verdict;

/// Aggregated view of session progress, useful for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub position: usize,
    pub answered: usize,
    pub score: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

/// What happened to a single question once the session moved past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub symbol: String,
    pub meaning: String,
    /// `None` when the question was skipped without a submission.
    pub submitted: Option<String>,
    pub verdict: Verdict,
}

impl QuestionRecord {
    /// True for skipped questions and blank submissions.
    #[must_use]
    pub fn is_no_answer(&self) -> bool {
        self.submitted.as_deref().is_none_or(str::is_empty)
    }
}

/// Final outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResults {
    score: usize,
    total: usize,
    records: Vec<QuestionRecord>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizResults {
    pub(crate) fn new(
        score: usize,
        records: Vec<QuestionRecord>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            score,
            total: records.len(),
            records,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(score, total)`
    #[must_use]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.score, self.total)
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Share of correct answers in percent, 0 for an empty result.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total as f64
    }
}
