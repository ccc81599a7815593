use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding docscope's own filter directives.
pub const LOG_ENV: &str = "DOCSCOPE_LOG";

/// Docscope crates log at `info`, everything else only at `warn`.
const DEFAULT_DIRECTIVES: &str = "warn,docscope_api=info,docscope_core=info,docscope_cli=info";

/// Directory holding the rolling log files (`~/.docscope/logs`).
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".docscope/logs")
}

/// `DOCSCOPE_LOG` wins over `RUST_LOG`; with neither set the crate defaults apply.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber for one docscope component.
///
/// Events go to `~/.docscope/logs/<component>.<date>`. With `to_stderr` they are also
/// echoed to stderr in compact form, keeping stdout free for command output.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
