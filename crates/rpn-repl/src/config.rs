//! REPL configuration.

use log::LevelFilter;

/// Options for an interactive session.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Text printed before each input line.
    pub prompt: String,
    /// Print the welcome banner on start.
    pub show_banner: bool,
    /// Logging filter installed by the binary.
    pub log_level: LevelFilter,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
            log_level: LevelFilter::Warn,
        }
    }
}
