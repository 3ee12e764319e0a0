//! Execution environment detection

use crate::config::LoginConfig;

/// Where the component tree is being rendered
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    /// Interactive browser page served from `hostname`
    Browser { hostname: String },
    /// No browser globals, e.g. a server-side render pass or a worker
    #[default]
    Server,
}

impl Environment {
    pub fn browser(hostname: impl Into<String>) -> Self {
        Self::Browser {
            hostname: hostname.into(),
        }
    }

    /// Inspect the current page.
    ///
    /// Never panics: a missing `window` or unreadable location both classify
    /// as [`Environment::Server`].
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let hostname = web_sys::window().and_then(|w| w.location().hostname().ok());
            match hostname {
                Some(hostname) => Self::Browser { hostname },
                None => Self::Server,
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::Server
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        match self {
            Self::Browser { hostname } => Some(hostname),
            Self::Server => None,
        }
    }

    /// True only in a browser whose hostname is exactly `localhost`.
    pub fn is_dev_host(&self) -> bool {
        self.hostname() == Some(LoginConfig::DEV_HOSTNAME)
    }
}
