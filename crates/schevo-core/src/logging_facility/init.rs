//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests attach a capture layer instead
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs the global tracing subscriber for the selected profile. Only the
/// first call has any effect. `RUST_LOG` overrides the profile's default
/// filter. All output goes to stderr so stdout stays clean for JSON reports.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, default filter `schevo=debug`
/// - **Production**: JSON structured logs, default filter `schevo=info`
/// - **Test**: Plain registry with no output
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("schevo=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("schevo=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
