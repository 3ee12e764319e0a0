//! Login trigger, context and button

pub mod component;
pub mod context;
pub mod trigger;

// Re-export commonly used items
pub use component::{login_button_classes, GoogleLoginButton, GoogleLoginButtonProps, LOGIN_LABEL};
pub use context::{use_login, LoginContext, LoginProvider};
pub use trigger::{compute_login_url, LoginTrigger};
