use rand::SeedableRng;
use rand::rngs::StdRng;

use kanji_core::{Clock, Dataset};

use super::plan::{QuizPlan, QuizPlanBuilder, SamplingPolicy};
use super::service::QuizSession;
use crate::error::QuizServiceError;

/// Orchestrates session start and restart over an injected dataset.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    dataset: Dataset,
    policy: SamplingPolicy,
    rng: StdRng,
}

impl QuizLoopService {
    /// Creates a service with the default policy and an OS-seeded RNG.
    #[must_use]
    pub fn new(clock: Clock, dataset: Dataset) -> Self {
        Self {
            clock,
            dataset,
            policy: SamplingPolicy::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Makes question order reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Plans a question order and starts a new session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Plan` if the policy yields no questions.
    pub fn start_session(&mut self) -> Result<QuizSession, QuizServiceError> {
        let plan = self.plan()?;
        tracing::debug!(
            policy = ?plan.policy,
            questions = plan.total(),
            "starting quiz session"
        );
        Ok(QuizSession::new(plan.entries, self.clock)?)
    }

    /// Re-plans with the same policy and resets `session` onto the new order.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` if planning or the reset fails; the session
    /// is left untouched in that case.
    pub fn restart(&mut self, session: &mut QuizSession) -> Result<(), QuizServiceError> {
        let plan = self.plan()?;
        tracing::debug!(
            policy = ?plan.policy,
            questions = plan.total(),
            "restarting quiz session"
        );
        session.set_clock(self.clock);
        session.reset(plan.entries)?;
        Ok(())
    }

    fn plan(&mut self) -> Result<QuizPlan, QuizServiceError> {
        Ok(QuizPlanBuilder::new(&self.dataset)
            .with_policy(self.policy)
            .build(&mut self.rng)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PlanError, SessionError};
    use kanji_core::time::fixed_now;

    fn service(policy: SamplingPolicy) -> QuizLoopService {
        QuizLoopService::new(Clock::fixed(fixed_now()), Dataset::builtin().unwrap())
            .with_policy(policy)
            .with_seed(3)
    }

    #[test]
    fn default_policy_starts_five_question_session() {
        let mut svc =
            QuizLoopService::new(Clock::fixed(fixed_now()), Dataset::builtin().unwrap());
        let session = svc.start_session().unwrap();
        assert_eq!(session.total_questions(), 5);
        assert_eq!(session.started_at(), fixed_now());
    }

    #[test]
    fn shuffle_session_covers_dataset() {
        let mut svc = service(SamplingPolicy::Shuffle);
        let session = svc.start_session().unwrap();
        assert_eq!(session.total_questions(), svc.dataset().len());
    }

    #[test]
    fn restart_keeps_length_and_clears_score() {
        let mut svc = service(SamplingPolicy::Draw { count: 4 });
        let mut session = svc.start_session().unwrap();
        while !session.is_finished() {
            let meaning = session.current_question().unwrap().meaning().to_owned();
            session.submit_answer(&meaning).unwrap();
            session.advance();
        }
        assert_eq!(session.results().unwrap().as_tuple(), (4, 4));

        svc.restart(&mut session).unwrap();
        assert_eq!(session.total_questions(), 4);
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.results().unwrap_err(), SessionError::InvalidState);
    }

    #[test]
    fn zero_questions_fail_to_start() {
        let mut svc = service(SamplingPolicy::Draw { count: 0 });
        let err = svc.start_session().unwrap_err();
        assert!(matches!(err, QuizServiceError::Plan(PlanError::ZeroQuestions)));
    }

    #[test]
    fn seeded_services_agree() {
        let order = |svc: &mut QuizLoopService| {
            svc.start_session()
                .unwrap()
                .entries()
                .iter()
                .map(|e| e.symbol().to_owned())
                .collect::<Vec<_>>()
        };
        let mut a = service(SamplingPolicy::Shuffle);
        let mut b = service(SamplingPolicy::Shuffle);
        assert_eq!(order(&mut a), order(&mut b));
    }
}
