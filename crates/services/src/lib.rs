#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use kanji_core::Clock;

pub use error::{PlanError, QuizServiceError, SessionError};
pub use sessions::{
    AnswerOutcome, QuestionRecord, QuizLoopService, QuizPlan, QuizPlanBuilder, QuizProgress,
    QuizResults, QuizSession, SamplingPolicy, DEFAULT_QUESTION_COUNT,
};
