//! Storefront configuration

use clap::{Args, Parser};

/// Log level used when neither `--log-level` nor `RUST_LOG` is given.
///
/// Stderr shares the terminal with the session, so only failures are logged by default.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// What happens when more units are requested than are in stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ShortfallPolicy {
    /// Leave product browsing and go back to the menu.
    #[default]
    EndBrowsing,

    /// Skip the failed add and offer to add another product.
    Continue,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

/// Interactive storefront configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Interactive storefront demo", long_about = None)]
pub struct StorefrontConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Behaviour when a requested quantity exceeds stock (end-browsing, continue)
    #[arg(
        long,
        env = "STOREFRONT_ON_INSUFFICIENT_STOCK",
        value_enum,
        default_value_t = ShortfallPolicy::EndBrowsing
    )]
    pub on_insufficient_stock: ShortfallPolicy,
}

impl StorefrontConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
