use std::sync::Once;

use env_logger::WriteStyle;

/// Where the log filter comes from and whether output is colored.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter in `env_logger` syntax, e.g. "swatch_grid=debug,warn".
    /// Falls back to `RUST_LOG`, then to `info`.
    pub filter: Option<String>,
    /// `false` forces plain output even on a terminal.
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, color: true }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn resolved_filter(&self) -> Option<String> {
        self.filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolved_filter() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        builder.write_style(if config.color { WriteStyle::Auto } else { WriteStyle::Never });

        // Test binaries may have installed their own logger already.
        if builder.try_init().is_ok() {
            log::debug!("logger installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_colored_without_filter() {
        let c = LoggingConfig::default();
        assert!(c.filter.is_none());
        assert!(c.color);
    }

    #[test]
    fn explicit_filter_wins() {
        let c = LoggingConfig::default().with_filter(Some("swatch_grid=debug".into()));
        assert_eq!(c.resolved_filter().as_deref(), Some("swatch_grid=debug"));
    }

    #[test]
    fn with_color_off() {
        assert!(!LoggingConfig::default().with_color(false).color);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default().with_filter(Some("warn".into())));
        init_logging(LoggingConfig::default());
    }
}
