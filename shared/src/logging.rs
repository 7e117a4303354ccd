//! Tracing setup shared by the checker binary and its tests

/// Default level when neither `--log-level` nor `RUST_LOG` says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter directive string for the given base level
///
/// `RUST_LOG` takes precedence when set, otherwise the checker crates log at
/// `level` and the HTTP stack stays at `warn`.
pub fn filter_directives(level: Option<&str>) -> String {
    if let Ok(from_env) = std::env::var("RUST_LOG") {
        if !from_env.trim().is_empty() {
            return from_env;
        }
    }

    let base_level = level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("checker={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the global tracing subscriber
///
/// Events go to stderr so stdout only carries the human-readable report.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(level);

    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
