use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TASKLINE_LOG";

/// Non-blank `TASKLINE_LOG` value, if any.
pub fn env_filter() -> Option<String> {
    non_blank(std::env::var(LOG_ENV).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Installs a stderr subscriber for `filter`. Returns whether logging is on.
///
/// Logs share stderr with command errors; stdout stays reserved for command output.
pub fn init(filter: Option<&str>) -> bool {
    let Some(filter) = filter else {
        return false;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
