use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compact human-readable events on stderr.
pub fn init_cli_logger(verbose: bool) {
    install(default_directive(verbose), false);
}

/// One JSON object per event on stderr, for `--log-json`.
pub fn init_json_logger() {
    install(default_directive(false), true);
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bowling_analytics=debug,info"
    } else {
        "bowling_analytics=info"
    }
}

fn install(directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter);
    if json {
        subscriber.with(layer.json()).init();
    } else {
        subscriber.with(layer.compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_crate_level_only() {
        assert_eq!(default_directive(false), "bowling_analytics=info");
        assert_eq!(default_directive(true), "bowling_analytics=debug,info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }
}
