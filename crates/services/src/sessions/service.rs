use chrono::{DateTime, Utc};
use std::fmt;

use kanji_core::{CharacterEntry, Clock, Verdict, judge, normalize_answer};

use super::progress::{QuestionRecord, QuizProgress, QuizResults};
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of submitting an answer for the current question.
///
/// Carries the meaning and origin so the caller can show them regardless of
/// the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub symbol: String,
    pub verdict: Verdict,
    pub meaning: String,
    pub origin: String,
    /// The submission was blank after trimming.
    pub no_answer: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz over a fixed sequence of entries.
///
/// The session never advances on its own: presentation calls
/// `submit_answer` (at most once per question) and then `advance`.
/// Questions advanced past without a submission count as skipped.
pub struct QuizSession {
    entries: Vec<CharacterEntry>,
    position: usize,
    score: usize,
    pending: Option<QuestionRecord>,
    records: Vec<QuestionRecord>,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Starts a session over `entries` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<CharacterEntry>, clock: Clock) -> Result<Self, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            records: Vec::with_capacity(entries.len()),
            entries,
            position: 0,
            score: 0,
            pending: None,
            clock,
            started_at: clock.now(),
            completed_at: None,
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.entries.len()
    }

    /// True once the current question has a submission.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self
            .records
            .iter()
            .chain(self.pending.as_ref())
            .filter(|record| record.submitted.is_some())
            .count();
        QuizProgress {
            total: self.total_questions(),
            position: self.position,
            answered,
            score: self.score,
            remaining: self.entries.len().saturating_sub(self.position),
            is_finished: self.is_finished(),
        }
    }

    /// Returns the entry being asked.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` once the session is finished.
    pub fn current_question(&self) -> Result<&CharacterEntry, SessionError> {
        self.entries
            .get(self.position)
            .ok_or(SessionError::OutOfRange {
                position: self.position,
                total: self.entries.len(),
            })
    }

    /// Judges `text` against the current entry's meaning.
    ///
    /// A blank submission is recorded as "no answer" and judged incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` once the session is finished and
    /// `SessionError::AlreadyAnswered` on a second submission for the same question.
    pub fn submit_answer(&mut self, text: &str) -> Result<AnswerOutcome, SessionError> {
        let entry = self.current_question()?;
        if self.pending.is_some() {
            return Err(SessionError::AlreadyAnswered {
                position: self.position,
            });
        }

        let normalized = normalize_answer(text);
        let verdict = judge(entry, &normalized);
        let outcome = AnswerOutcome {
            symbol: entry.symbol().to_owned(),
            verdict,
            meaning: entry.meaning().to_owned(),
            origin: entry.origin().to_owned(),
            no_answer: normalized.is_empty(),
        };

        tracing::debug!(
            position = self.position,
            symbol = %outcome.symbol,
            %verdict,
            no_answer = outcome.no_answer,
            "answer judged"
        );

        if verdict.is_correct() {
            self.score += 1;
        }
        self.pending = Some(QuestionRecord {
            symbol: outcome.symbol.clone(),
            meaning: outcome.meaning.clone(),
            submitted: Some(normalized),
            verdict,
        });

        Ok(outcome)
    }

    /// Moves to the next question and returns whether the session is finished.
    ///
    /// Advancing a finished session does nothing.
    pub fn advance(&mut self) -> bool {
        let Some(entry) = self.entries.get(self.position) else {
            return true;
        };

        let record = self.pending.take().unwrap_or_else(|| QuestionRecord {
            symbol: entry.symbol().to_owned(),
            meaning: entry.meaning().to_owned(),
            submitted: None,
            verdict: Verdict::Incorrect,
        });
        if record.submitted.is_none() {
            tracing::debug!(position = self.position, symbol = %record.symbol, "question skipped");
        }
        self.records.push(record);
        self.position += 1;

        if self.is_finished() {
            self.completed_at = Some(self.clock.now());
            tracing::info!(
                score = self.score,
                total = self.entries.len(),
                "quiz session finished"
            );
        }
        self.is_finished()
    }

    /// Final score and per-question records.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` before the session is finished.
    pub fn results(&self) -> Result<QuizResults, SessionError> {
        let Some(completed_at) = self.completed_at else {
            return Err(SessionError::InvalidState);
        };
        Ok(QuizResults::new(
            self.score,
            self.records.clone(),
            self.started_at,
            completed_at,
        ))
    }

    /// Restarts the session over a new sequence of entries.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `entries` is empty; the session is left untouched.
    pub fn reset(&mut self, entries: Vec<CharacterEntry>) -> Result<(), SessionError> {
        if entries.is_empty() {
            return Err(SessionError::Empty);
        }

        self.entries = entries;
        self.position = 0;
        self.score = 0;
        self.pending = None;
        self.records.clear();
        self.started_at = self.clock.now();
        self.completed_at = None;
        Ok(())
    }

    /// Sets the clock used for the timestamps of subsequent transitions.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("entries_len", &self.entries.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("answered", &self.pending.is_some())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
