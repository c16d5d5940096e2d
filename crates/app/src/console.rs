//! Blocking console front end over a `QuizSession`.

use std::io::{BufRead, Write};

use kanji_core::Verdict;
use services::{QuizLoopService, QuizResults, QuizSession};

pub const BANNER: &str = "🎌 Japanese Kanji Quiz with Historical Origins 🎌";

/// Outcome of playing one session on the console.
#[derive(Debug)]
pub struct RoundOutcome {
    pub results: QuizResults,
    /// Input ended before every question was answered.
    pub input_closed: bool,
}

pub fn print_banner(output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "{BANNER}")?;
    writeln!(output, "Guess the meaning, then learn its history!")?;
    writeln!(output)
}

/// Reads one answer line. Bytes that are not UTF-8 become U+FFFD so a bad
/// line is judged like any other wrong answer. `None` at end of input.
fn read_answer(input: &mut impl BufRead, buf: &mut Vec<u8>) -> std::io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Asks every remaining question in `session`, one line of input per question.
///
/// When input ends early the remaining questions are skipped and the
/// results are still returned.
///
/// # Errors
///
/// Returns I/O errors from `input`/`output` and session errors (which only
/// occur if the session was driven outside this loop).
pub fn play_round(
    session: &mut QuizSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<RoundOutcome, Box<dyn std::error::Error>> {
    let mut input_closed = false;
    let mut buf = Vec::new();

    while !session.is_finished() {
        if input_closed {
            session.advance();
            continue;
        }

        let symbol = session.current_question()?.symbol().to_owned();
        writeln!(output, "Kanji: {symbol}")?;
        write!(output, "What does this mean? ")?;
        output.flush()?;

        let Some(line) = read_answer(input, &mut buf)? else {
            writeln!(output)?;
            tracing::debug!(position = session.position(), "input closed, skipping rest");
            input_closed = true;
            session.advance();
            continue;
        };

        let outcome = session.submit_answer(&line)?;
        match outcome.verdict {
            Verdict::Correct => writeln!(output, "✅ Correct! It means: {}", outcome.meaning)?,
            Verdict::Incorrect => writeln!(
                output,
                "❌ Wrong! The correct meaning is: {}",
                outcome.meaning
            )?,
        }
        writeln!(output)?;
        writeln!(output, "📜 Historical Origin:")?;
        writeln!(output, "{}", outcome.origin)?;
        writeln!(output)?;

        session.advance();
    }

    let results = session.results()?;
    writeln!(
        output,
        "Quiz finished! Your score: {}/{}",
        results.score(),
        results.total()
    )?;
    writeln!(output, "Accuracy: {:.0}%", results.percent())?;

    Ok(RoundOutcome {
        results,
        input_closed,
    })
}

/// Plays up to `rounds` sessions back to back, restarting the session on a
/// fresh order between rounds. Stops early once input is exhausted.
///
/// # Errors
///
/// Returns planning, session, serialization and I/O errors.
pub fn play_rounds(
    quiz: &mut QuizLoopService,
    rounds: usize,
    json: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Vec<RoundOutcome>, Box<dyn std::error::Error>> {
    let mut outcomes = Vec::with_capacity(rounds);
    let mut session = quiz.start_session()?;

    for round in 1..=rounds {
        if round > 1 {
            quiz.restart(&mut session)?;
            writeln!(output)?;
            writeln!(output, "Round {round} of {rounds}")?;
            writeln!(output)?;
        }

        let outcome = play_round(&mut session, input, output)?;
        if json {
            writeln!(output, "{}", serde_json::to_string_pretty(&outcome.results)?)?;
        }
        let input_closed = outcome.input_closed;
        outcomes.push(outcome);
        if input_closed {
            break;
        }
    }

    output.flush()?;
    Ok(outcomes)
}
