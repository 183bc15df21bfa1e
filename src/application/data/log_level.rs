use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Every parsed node and filesystem call
    Debug,
    /// Creation summary
    Info,
    /// Skipped nodes and recoverable oddities
    #[default]
    Warn,
    Error,
    /// No log output at all
    Silent,
}

impl LogLevel {
    /// Maximum level for the subscriber, `None` when nothing should be logged
    pub fn max_level(self) -> Option<tracing::Level> {
        Some(match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Silent => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_disables_logging() {
        assert_eq!(LogLevel::Silent.max_level(), None);
        assert_eq!(LogLevel::default().max_level(), Some(tracing::Level::WARN));
    }
}
