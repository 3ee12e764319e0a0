//! Login navigation and development auto-login

use crate::config::{ApiConfig, LoginConfig};
use crate::environment::Environment;
use crate::navigation::Navigator;
use crate::scheduler::{Scheduler, TimerHandle};
use std::rc::Rc;

/// Join the API base URL and the login path.
///
/// No normalization happens here; [`ApiConfig`] already trims trailing
/// slashes.
pub fn compute_login_url(base_url: &str) -> String {
    format!("{base_url}{}", LoginConfig::LOGIN_PATH)
}

/// Sends the user to the external login endpoint
#[derive(Clone)]
pub struct LoginTrigger {
    login_url: String,
    navigator: Rc<dyn Navigator>,
}

impl LoginTrigger {
    pub fn new(api: &ApiConfig, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            login_url: compute_login_url(api.base_url()),
            navigator,
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Full-page navigation to the login URL. Every call issues a new
    /// navigation; failures are logged and dropped.
    pub fn navigate_to_login(&self) {
        tracing::info!(url = %self.login_url, "Navigating to login");
        if let Err(err) = self.navigator.navigate(&self.login_url) {
            tracing::warn!(url = %self.login_url, error = %err, "Login navigation failed");
        }
    }

    /// Schedule a single navigation after
    /// [`LoginConfig::AUTO_LOGIN_DELAY_MS`] when running in a browser on
    /// `localhost`. Returns `None` everywhere else.
    ///
    /// Dropping the returned handle before the delay elapses cancels the
    /// navigation.
    pub fn maybe_auto_login(
        &self,
        environment: &Environment,
        scheduler: &dyn Scheduler,
    ) -> Option<TimerHandle> {
        if !environment.is_dev_host() {
            return None;
        }

        tracing::debug!(
            delay_ms = LoginConfig::AUTO_LOGIN_DELAY_MS,
            "Scheduling development auto-login"
        );
        let trigger = self.clone();
        Some(scheduler.schedule(
            LoginConfig::AUTO_LOGIN_DELAY_MS,
            Box::new(move || trigger.navigate_to_login()),
        ))
    }
}

impl std::fmt::Debug for LoginTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginTrigger")
            .field("login_url", &self.login_url)
            .finish_non_exhaustive()
    }
}
