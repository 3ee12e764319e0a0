//! Error types for configuration and navigation

use thiserror::Error;

/// Problems with the build-time API configuration.
///
/// These are deployment errors: the entry point refuses to mount the app
/// when one is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; build with {0}=<backend base url>")]
    MissingApiUrl(&'static str),

    #[error("API base URL is empty")]
    EmptyApiUrl,

    #[error("API base URL {value:?} is not an absolute URL: {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Failure to hand a URL to the browser
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,

    #[error("browser rejected navigation to {url}: {reason}")]
    Rejected { url: String, reason: String },
}
