pub mod auth;
pub mod components;
pub mod config;
pub mod environment;
pub mod error;
pub mod navigation;
pub mod scheduler;
pub mod styles;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use auth::{GoogleLoginButton, LoginContext, LoginProvider, LoginTrigger};
pub use components::{Placement, Tooltip};
pub use config::{ApiConfig, LoginConfig};
pub use environment::Environment;
pub use error::{ConfigError, NavigationError};
pub use navigation::{BrowserNavigator, Navigator};
pub use scheduler::{BrowserScheduler, Scheduler, SharedScheduler, TimerHandle};
