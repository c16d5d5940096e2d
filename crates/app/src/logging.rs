use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Preferred filter variable; `RUST_LOG` is consulted when it is unset.
pub const LOG_ENV: &str = "KANJI_QUIZ_LOG";

const DEFAULT_FILTER: &str = "warn";

fn filter_directives() -> String {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the quiz text on stdout.
pub fn init_tracing() {
    let directives = filter_directives();
    let env_filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
