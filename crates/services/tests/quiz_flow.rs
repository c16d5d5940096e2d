use kanji_core::time::fixed_now;
use kanji_core::{CharacterEntry, Dataset, Verdict};
use services::{Clock, QuizLoopService, QuizSession, SamplingPolicy, SessionError};

fn builtin(symbols: &[&str]) -> Vec<CharacterEntry> {
    let dataset = Dataset::builtin().unwrap();
    symbols
        .iter()
        .map(|symbol| dataset.get(symbol).unwrap().clone())
        .collect()
}

#[test]
fn fixed_order_five_questions_scores_four() {
    let dataset = Dataset::builtin().unwrap();
    assert_eq!(dataset.len(), 7);

    let entries = builtin(&["日", "月", "山", "川", "火"]);
    let mut session = QuizSession::new(entries, Clock::fixed(fixed_now())).unwrap();

    let mut verdicts = Vec::new();
    for answer in ["sun", "moon", "mountain", "river", "wrong"] {
        let outcome = session.submit_answer(answer).unwrap();
        assert!(!outcome.origin.is_empty());
        verdicts.push(outcome.verdict);
        session.advance();
    }

    assert_eq!(
        verdicts,
        [
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Incorrect
        ]
    );
    assert!(session.is_finished());
    assert_eq!(session.results().unwrap().as_tuple(), (4, 5));
}

#[test]
fn session_lifecycle_through_loop_service() {
    let mut svc = QuizLoopService::new(Clock::fixed(fixed_now()), Dataset::builtin().unwrap())
        .with_policy(SamplingPolicy::Shuffle)
        .with_seed(2024);

    let mut session = svc.start_session().unwrap();
    assert_eq!(session.total_questions(), 7);

    // Answer every other question correctly, skip the rest.
    let mut expected = 0;
    let mut index = 0;
    while !session.is_finished() {
        if index % 2 == 0 {
            let meaning = session.current_question().unwrap().meaning().to_owned();
            session.submit_answer(&meaning).unwrap();
            expected += 1;
        }
        index += 1;
        session.advance();
    }

    assert!(matches!(
        session.current_question(),
        Err(SessionError::OutOfRange { .. })
    ));
    let results = session.results().unwrap();
    assert_eq!(results.as_tuple(), (expected, 7));
    assert_eq!(
        results.records().iter().filter(|r| r.is_no_answer()).count(),
        7 - expected
    );

    svc.restart(&mut session).unwrap();
    assert_eq!(session.total_questions(), 7);
    assert_eq!(session.position(), 0);
    assert_eq!(session.score(), 0);
}
