//! "Login with Google" button

use super::context::use_login;
use super::trigger::LoginTrigger;
use crate::components::{BetaNotice, GoogleIcon, InfoIcon, Placement, Tooltip};
use crate::config::LoginConfig;
use crate::scheduler::SharedScheduler;
use crate::styles;
use yew::prelude::*;

pub const LOGIN_LABEL: &str = "Login with Google";

#[derive(Properties, Clone, PartialEq)]
pub struct GoogleLoginButtonProps {
    /// Wrap the button in the beta-users tooltip
    #[prop_or(true)]
    pub show_tooltip: bool,
    /// Extra classes appended after the defaults
    #[prop_or_default]
    pub class: Classes,
}

/// Default classes followed by the caller's extras
pub fn login_button_classes(extra: &Classes) -> Classes {
    classes!(styles::FLAT_BUTTON, styles::LOGIN_BUTTON_BASE, extra.clone())
}

/// Button that sends the user to `{api}/login`.
///
/// On `localhost` it also clicks itself once after
/// [`LoginConfig::AUTO_LOGIN_DELAY_MS`]; unmounting first cancels that.
#[function_component(GoogleLoginButton)]
pub fn google_login_button(props: &GoogleLoginButtonProps) -> Html {
    let login = use_login();
    let trigger = use_memo(login.clone(), |login| {
        LoginTrigger::new(&login.api, login.navigator.clone())
    });
    let scheduler = SharedScheduler::from(login.scheduler.clone());

    // Development auto-login, cancelled on unmount
    {
        let trigger = trigger.clone();
        use_effect_with(login, move |login| {
            let pending = trigger.maybe_auto_login(&login.environment, login.scheduler.as_ref());
            move || {
                if pending.is_some() {
                    tracing::debug!("Cancelling pending auto-login");
                }
                drop(pending);
            }
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| trigger.navigate_to_login());

    let button = html! {
        <button
            type="button"
            class={login_button_classes(&props.class)}
            data-testid={LoginConfig::TEST_ID}
            {onclick}
        >
            <GoogleIcon class={styles::GOOGLE_ICON} />
            <span>{LOGIN_LABEL}</span>
            <InfoIcon class={styles::INFO_ICON} size={14} />
        </button>
    };

    if !props.show_tooltip {
        return button;
    }

    html! {
        <Tooltip
            content={html! { <BetaNotice /> }}
            delay_ms={LoginConfig::TOOLTIP_SHOW_DELAY_MS}
            close_delay_ms={LoginConfig::TOOLTIP_HIDE_DELAY_MS}
            placement={Placement::Bottom}
            {scheduler}
        >
            {button}
        </Tooltip>
    }
}
