use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides `--log-level`.
pub const LOG_ENV: &str = "ASBCALC_LOG";

/// Initialize logging to stderr so stdout stays machine-readable.
///
/// The filter comes from `ASBCALC_LOG` when set, otherwise from `level`
/// applied to this binary and the core crate.
pub fn init_logging(level: &str) {
    let default_filter = format!("asbcalc={level},asb_dividend_core={level}");
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
}
