use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "segment_intersect=warn";
const VERBOSE_FILTER: &str = "segment_intersect=debug,info";

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// Logs share the terminal with prompts, so they go to stderr without
/// timestamps and stay quiet unless something goes wrong.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
