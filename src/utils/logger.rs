use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Quiet unless verbose, so log lines
/// don't interleave with prompts.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "cinema_flow=debug,info"
    } else {
        "cinema_flow=warn"
    }
}

/// Logs go to stderr: stdout carries the menu and prompts, and piping it
/// must not pick up diagnostics.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false), "cinema_flow=warn");
        assert!(default_filter(true).starts_with("cinema_flow=debug"));
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
    }
}
