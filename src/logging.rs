use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// A valid `RUST_LOG` takes precedence; otherwise `-v` picks the level.
fn filter_for(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level_for(verbose).into()))
}

/// Logs go to stderr so provisioned file contents on stdout stay clean.
pub fn init(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter_for(verbose, rust_log.as_deref()))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn verbosity_sets_level_without_rust_log() {
        assert_eq!(filter_for(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filter_for(2, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_overrides_verbosity() {
        assert_eq!(filter_for(0, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter_for(3, Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn invalid_rust_log_falls_back_to_verbosity() {
        assert_eq!(
            filter_for(1, Some("cohere_plugin=loud")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
        assert_eq!(filter_for(2, Some("  ")).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
