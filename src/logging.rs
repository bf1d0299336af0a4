//! Logging and tracing configuration
//!
//! Logs go to stderr so that stdout only carries exercise answers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "algo_toolbox=warn,warn",
        1 => "algo_toolbox=info,warn",
        2 => "algo_toolbox=debug,warn",
        _ => "algo_toolbox=trace,info",
    }
}

/// Initialize tracing for the binaries.
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbosity`.
/// Call once per process.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
