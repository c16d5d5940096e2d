use rand::Rng;
use rand::seq::SliceRandom;

use kanji_core::{CharacterEntry, Dataset};

use crate::error::PlanError;

/// Number of questions asked by the console quiz when nothing is configured.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// How the question order is derived from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPolicy {
    /// One pass over a shuffled permutation of the whole dataset.
    Shuffle,
    /// `count` independent draws with replacement; repeats are possible.
    Draw { count: usize },
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::Draw {
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Ordered questions for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPlan {
    pub entries: Vec<CharacterEntry>,
    pub policy: SamplingPolicy,
}

impl QuizPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// Builds the question order for a session from a dataset.
pub struct QuizPlanBuilder<'a> {
    dataset: &'a Dataset,
    policy: SamplingPolicy,
}

impl<'a> QuizPlanBuilder<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            policy: SamplingPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Samples the entries according to the configured policy.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::ZeroQuestions` for `SamplingPolicy::Draw { count: 0 }`.
    pub fn build<R: Rng>(self, rng: &mut R) -> Result<QuizPlan, PlanError> {
        let source = self.dataset.entries();
        let entries = match self.policy {
            SamplingPolicy::Shuffle => {
                let mut entries = source.to_vec();
                entries.as_mut_slice().shuffle(rng);
                entries
            }
            SamplingPolicy::Draw { count: 0 } => return Err(PlanError::ZeroQuestions),
            SamplingPolicy::Draw { count } => (0..count)
                .map(|_| source[rng.random_range(0..source.len())].clone())
                .collect(),
        };

        Ok(QuizPlan {
            entries,
            policy: self.policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn symbols(plan: &QuizPlan) -> Vec<&str> {
        plan.entries.iter().map(CharacterEntry::symbol).collect()
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_dataset() {
        let dataset = Dataset::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = QuizPlanBuilder::new(&dataset)
            .with_policy(SamplingPolicy::Shuffle)
            .build(&mut rng)
            .unwrap();

        assert_eq!(plan.total(), dataset.len());
        let unique: HashSet<_> = symbols(&plan).into_iter().collect();
        assert_eq!(unique.len(), dataset.len());
    }

    #[test]
    fn draw_yields_requested_count_from_dataset() {
        let dataset = Dataset::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let plan = QuizPlanBuilder::new(&dataset)
            .with_policy(SamplingPolicy::Draw { count: 20 })
            .build(&mut rng)
            .unwrap();

        assert_eq!(plan.total(), 20);
        for symbol in symbols(&plan) {
            assert!(dataset.get(symbol).is_some());
        }
    }

    #[test]
    fn default_policy_draws_five() {
        let dataset = Dataset::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = QuizPlanBuilder::new(&dataset).build(&mut rng).unwrap();
        assert_eq!(plan.total(), DEFAULT_QUESTION_COUNT);
        assert_eq!(plan.policy, SamplingPolicy::default());
    }

    #[test]
    fn zero_draws_is_rejected() {
        let dataset = Dataset::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = QuizPlanBuilder::new(&dataset)
            .with_policy(SamplingPolicy::Draw { count: 0 })
            .build(&mut rng)
            .unwrap_err();
        assert_eq!(err, PlanError::ZeroQuestions);
    }

    #[test]
    fn same_seed_same_order() {
        let dataset = Dataset::builtin().unwrap();
        let build = |seed| {
            QuizPlanBuilder::new(&dataset)
                .with_policy(SamplingPolicy::Shuffle)
                .build(&mut StdRng::seed_from_u64(seed))
                .unwrap()
        };
        assert_eq!(build(42), build(42));
    }
}
