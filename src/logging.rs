use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Sends log output to stderr so it never mixes with results. `RUST_LOG`
/// overrides the `-d` level when it's set.
pub fn setup_logging(verbosity: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(verbosity).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    if let Err(err) = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .try_init()
    {
        eprintln!("WARNING: Failed to set up logging ({}).", err);
    }

    tracing::debug!(verbosity, "logging initialized");
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::level_filter;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0), LevelFilter::WARN);
        assert_eq!(level_filter(1), LevelFilter::INFO);
        assert_eq!(level_filter(2), LevelFilter::DEBUG);
        assert_eq!(level_filter(3), LevelFilter::TRACE);
        assert_eq!(level_filter(9), LevelFilter::TRACE);
    }
}
