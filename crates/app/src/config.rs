use std::fmt;

use services::{DEFAULT_QUESTION_COUNT, SamplingPolicy};

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { flag: &'static str, raw: String },
    InvalidPolicy { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a number > 0)")
            }
            ArgsError::InvalidPolicy { raw } => {
                write!(f, "invalid --policy value: {raw} (expected draw or shuffle)")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  kanji-quiz [--questions <n>] [--policy <draw|shuffle>] [--seed <u64>]");
    eprintln!("             [--rounds <n>] [--json]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTION_COUNT}   (ignored by --policy shuffle)");
    eprintln!("  --policy draw");
    eprintln!("  --rounds 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KANJI_QUIZ_QUESTIONS, KANJI_QUIZ_POLICY, KANJI_QUIZ_SEED, KANJI_QUIZ_ROUNDS");
    eprintln!("  KANJI_QUIZ_LOG (falls back to RUST_LOG, default warn)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyKind {
    Draw,
    Shuffle,
}

impl PolicyKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draw" | "random" => Some(Self::Draw),
            "shuffle" => Some(Self::Shuffle),
            _ => None,
        }
    }
}

/// Resolved run configuration: defaults, then environment, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    policy_kind: PolicyKind,
    questions: usize,
    pub seed: Option<u64>,
    pub rounds: usize,
    pub json: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy_kind: PolicyKind::Draw,
            questions: DEFAULT_QUESTION_COUNT,
            seed: None,
            rounds: 1,
            json: false,
            help: false,
        }
    }
}

fn parse_count(flag: &'static str, raw: &str) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgsError::InvalidCount {
            flag,
            raw: raw.to_string(),
        }),
    }
}

fn parse_seed(raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed {
        raw: raw.to_string(),
    })
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Config {
    /// Reads `KANJI_QUIZ_*` variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for malformed values.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let mut config = Self::default();
        if let Some(raw) = lookup("KANJI_QUIZ_QUESTIONS") {
            config.questions = parse_count("KANJI_QUIZ_QUESTIONS", &raw)?;
        }
        if let Some(raw) = lookup("KANJI_QUIZ_POLICY") {
            config.policy_kind =
                PolicyKind::parse(&raw).ok_or(ArgsError::InvalidPolicy { raw })?;
        }
        if let Some(raw) = lookup("KANJI_QUIZ_SEED") {
            config.seed = Some(parse_seed(&raw)?);
        }
        if let Some(raw) = lookup("KANJI_QUIZ_ROUNDS") {
            config.rounds = parse_count("KANJI_QUIZ_ROUNDS", &raw)?;
        }
        Ok(config)
    }

    /// Applies command line flags on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags or malformed values.
    pub fn apply_args(mut self, args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" | "-n" => {
                    let value = require_value(&mut args, "--questions")?;
                    self.questions = parse_count("--questions", &value)?;
                }
                "--policy" => {
                    let value = require_value(&mut args, "--policy")?;
                    self.policy_kind = PolicyKind::parse(&value)
                        .ok_or(ArgsError::InvalidPolicy { raw: value })?;
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    self.seed = Some(parse_seed(&value)?);
                }
                "--rounds" => {
                    let value = require_value(&mut args, "--rounds")?;
                    self.rounds = parse_count("--rounds", &value)?;
                }
                "--json" => self.json = true,
                "--help" | "-h" => self.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn policy(&self) -> SamplingPolicy {
        match self.policy_kind {
            PolicyKind::Draw => SamplingPolicy::Draw {
                count: self.questions,
            },
            PolicyKind::Shuffle => SamplingPolicy::Shuffle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_draw_five_once() {
        let config = Config::from_env(no_env).unwrap().apply_args(Vec::new()).unwrap();
        assert_eq!(config.policy(), SamplingPolicy::Draw { count: 5 });
        assert_eq!(config.rounds, 1);
        assert_eq!(config.seed, None);
        assert!(!config.json);
    }

    #[test]
    fn env_values_are_read() {
        let env = |key: &str| match key {
            "KANJI_QUIZ_POLICY" => Some("shuffle".to_string()),
            "KANJI_QUIZ_SEED" => Some("99".to_string()),
            "KANJI_QUIZ_ROUNDS" => Some("2".to_string()),
            _ => None,
        };
        let config = Config::from_env(env).unwrap();
        assert_eq!(config.policy(), SamplingPolicy::Shuffle);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.rounds, 2);
    }

    #[test]
    fn flags_override_env() {
        let env = |key: &str| (key == "KANJI_QUIZ_QUESTIONS").then(|| "9".to_string());
        let config = Config::from_env(env)
            .unwrap()
            .apply_args(args(&["--questions", "3", "--seed", "7", "--json"]))
            .unwrap();
        assert_eq!(config.policy(), SamplingPolicy::Draw { count: 3 });
        assert_eq!(config.seed, Some(7));
        assert!(config.json);
    }

    #[test]
    fn bad_values_are_rejected() {
        let base = Config::default();
        assert_eq!(
            base.clone().apply_args(args(&["--questions", "0"])).unwrap_err(),
            ArgsError::InvalidCount {
                flag: "--questions",
                raw: "0".to_string()
            }
        );
        assert_eq!(
            base.clone().apply_args(args(&["--policy", "all"])).unwrap_err(),
            ArgsError::InvalidPolicy {
                raw: "all".to_string()
            }
        );
        assert_eq!(
            base.clone().apply_args(args(&["--seed"])).unwrap_err(),
            ArgsError::MissingValue { flag: "--seed" }
        );
        assert_eq!(
            base.apply_args(args(&["--verbose"])).unwrap_err(),
            ArgsError::UnknownArg("--verbose".to_string())
        );
    }

    #[test]
    fn help_flag_is_recorded() {
        let config = Config::default().apply_args(args(&["-h"])).unwrap();
        assert!(config.help);
    }
}
