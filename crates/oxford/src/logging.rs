//! Log setup. Everything goes to stderr so stdout stays parseable JSON.

use oxford_core::config::LoggingConfig;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG`, when set, replaces `level`.
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Exactly one of the two layers is installed.
    let json = json_format.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let pretty = (!json_format).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

/// `--verbose` forces `debug` and `--json-logs` forces JSON; otherwise the
/// config file's `logging` section decides, defaulting to quiet `warn`.
pub fn init_from_config(config: &LoggingConfig, verbose_override: bool, json_logs_override: bool) {
    let level = if verbose_override {
        "debug"
    } else {
        config.level.as_str()
    };
    let json_format = json_logs_override || config.format == "json";
    init(level, json_format);
}
