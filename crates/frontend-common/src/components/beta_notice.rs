//! Beta-gating notice shown in the login tooltip

use crate::styles;
use yew::prelude::*;

pub const BETA_NOTICE_HEADING: &str = "Beta Users Only";
pub const BETA_NOTICE_TEXT: &str = "This login is only for existing beta users. If you're not a beta user yet, please join our waitlist below.";

#[function_component(BetaNotice)]
pub fn beta_notice() -> Html {
    html! {
        <div class={styles::NOTICE_BODY}>
            <div class={styles::NOTICE_HEADING}>{BETA_NOTICE_HEADING}</div>
            <div class={styles::NOTICE_TEXT}>{BETA_NOTICE_TEXT}</div>
        </div>
    }
}
