//! Frontend configuration

use crate::error::ConfigError;
use url::Url;

/// Login presentation and timing configuration
pub struct LoginConfig;

impl LoginConfig {
    /// Delay before the development auto-login fires, in milliseconds
    pub const AUTO_LOGIN_DELAY_MS: u32 = 3_000;

    /// Hostname that enables auto-login. Matched exactly.
    pub const DEV_HOSTNAME: &'static str = "localhost";

    /// Path appended to the API base URL
    pub const LOGIN_PATH: &'static str = "/login";

    /// Tooltip show delay in milliseconds
    pub const TOOLTIP_SHOW_DELAY_MS: u32 = 200;

    /// Tooltip hide delay in milliseconds
    pub const TOOLTIP_HIDE_DELAY_MS: u32 = 0;

    /// Stable identifier used by test automation to find the control
    pub const TEST_ID: &'static str = "GoogleLogin";

    /// Build-time environment variable holding the API base URL
    pub const API_URL_ENV: &'static str = "API_URL";
}

/// Base URL of the backend API the login endpoint lives under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate `base_url` as an absolute http(s) URL.
    ///
    /// A trailing `/` is trimmed so the login path can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidApiUrl {
            value: trimmed.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL baked in at build time through `API_URL`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_optional(option_env!("API_URL"))
    }

    fn from_optional(value: Option<&str>) -> Result<Self, ConfigError> {
        value
            .ok_or(ConfigError::MissingApiUrl(LoginConfig::API_URL_ENV))
            .and_then(Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
