mod plan;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{DEFAULT_QUESTION_COUNT, QuizPlan, QuizPlanBuilder, SamplingPolicy};
pub use progress::{QuestionRecord, QuizProgress, QuizResults};
pub use service::{AnswerOutcome, QuizSession};
pub use workflow::QuizLoopService;
