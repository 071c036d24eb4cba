use std::fmt;

use chrono::Local;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::defaults::DEFAULT_LOG_FILTER;

/// Prints `[timestamp]` or `[timestamp][prefix]` in front of every event.
#[derive(Debug, Clone)]
pub struct PrefixedLocalTime {
    prefix: Option<String>,
}

impl PrefixedLocalTime {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }
}

impl FormatTime for PrefixedLocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            write!(w, "[{}][{}]", timestamp, prefix)
        } else {
            write!(w, "[{}]", timestamp)
        }
    }
}

/// Installs the global subscriber. Later calls are ignored, so binaries and
/// tests can both call this freely.
pub fn init_logger(prefix: Option<String>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(PrefixedLocalTime::new(prefix))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}
