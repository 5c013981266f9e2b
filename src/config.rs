// src/config.rs
// =============================================================================
// Run configuration.
//
// There is no config file: everything comes from the command line and is
// folded into a ValidateConfig once, at startup. The rest of the program only
// ever sees this struct, never the raw CLI arguments.
// =============================================================================

use std::time::Duration;

use crate::cli::Cli;

// Sent with every external request so site owners can identify us
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLITENESS_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

// Settings for the shared HTTP client
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidateConfig {
    /// When false no HTTP client is built and external links are not checked
    pub check_external: bool,
    /// Pause after every external check
    pub politeness_delay: Duration,
    /// Upper bound on simultaneous external checks (always >= 1)
    pub concurrency: usize,
    pub http: HttpConfig,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            check_external: true,
            politeness_delay: DEFAULT_POLITENESS_DELAY,
            concurrency: 1,
            http: HttpConfig::default(),
        }
    }
}

impl From<&Cli> for ValidateConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            check_external: !cli.skip_external,
            politeness_delay: Duration::from_millis(cli.delay_ms),
            concurrency: cli.concurrency.max(1),
            http: HttpConfig {
                user_agent: USER_AGENT.to_string(),
                timeout: Duration::from_secs(cli.timeout),
                max_redirects: cli.max_redirects,
            },
        }
    }
}
