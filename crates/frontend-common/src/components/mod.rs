mod beta_notice;
mod icons;
mod tooltip;

pub use beta_notice::{BetaNotice, BETA_NOTICE_HEADING, BETA_NOTICE_TEXT};
pub use icons::{GoogleIcon, InfoIcon};
pub use tooltip::{Placement, Tooltip};
