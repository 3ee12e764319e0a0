//! Full-page navigation

use crate::error::NavigationError;

/// Sends the browser to another document
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Assigns `window.location.href`, leaving the current page entirely
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        window
            .location()
            .set_href(url)
            .map_err(|err| NavigationError::Rejected {
                url: url.to_string(),
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn navigate(&self, _url: &str) -> Result<(), NavigationError> {
        Err(NavigationError::NoWindow)
    }
}
