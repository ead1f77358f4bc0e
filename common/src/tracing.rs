use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes a new tracing configuration which logs to stderr.
///
/// - `rust_log`: Used to set the RUST_LOG environment variable if it is not provided. You can set the default log level (e.g. `warn`),
///   but you can also configure module-specific log levels using comma-separated entries formatted like `path::to::module=log_level`, e.g.
///   `warn,tf_inventory=info`
///
/// Logs are emitted as JSON lines when the `JSON_LOGS` environment variable is set.
pub fn init_tracing(rust_log: &str) {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", rust_log);
    }

    let filter = EnvFilter::from_default_env();

    let json_logs = env::var_os("JSON_LOGS").is_some();

    // stdout is reserved for command output such as dry runs
    if json_logs {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .with_filter(filter);

        tracing_subscriber::registry().with(layer).init();
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(layer).init();
    }
}
