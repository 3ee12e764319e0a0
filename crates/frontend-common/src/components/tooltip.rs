//! Hover/focus tooltip

use crate::config::LoginConfig;
use crate::scheduler::{SharedScheduler, TimerHandle};
use crate::styles;
use yew::prelude::*;

/// Side of the anchor the tooltip opens on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    const fn position_classes(self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Self::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            Self::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
            Self::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
        }
    }
}

/// Reasons the tooltip is wanted. Hover and focus come and go independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Triggers {
    hovered: bool,
    focused: bool,
}

impl Triggers {
    const fn wants_visible(self) -> bool {
        self.hovered || self.focused
    }
}

/// What to do with the pending timer after a trigger changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Already showing what is wanted; drop any pending change
    Settle,
    /// A timer toward the wanted state is already running
    Wait,
    /// Start a timer toward `visible`
    Schedule { visible: bool },
}

/// `pending` is the visibility the running timer will apply, if any.
const fn next_step(visible: bool, wanted: bool, pending: Option<bool>) -> Step {
    if visible == wanted {
        return Step::Settle;
    }
    match pending {
        Some(target) if target == wanted => Step::Wait,
        _ => Step::Schedule { visible: wanted },
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub content: Html,
    pub children: Children,
    #[prop_or(LoginConfig::TOOLTIP_SHOW_DELAY_MS)]
    pub delay_ms: u32,
    #[prop_or(LoginConfig::TOOLTIP_HIDE_DELAY_MS)]
    pub close_delay_ms: u32,
    #[prop_or_default]
    pub placement: Placement,
    /// Clock for the show/hide delays
    #[prop_or_default]
    pub scheduler: SharedScheduler,
}

/// Wraps its children and reveals `content` next to them on hover or focus.
///
/// The content stays mounted while hidden so it can be found by role. It
/// hides only once neither the pointer nor keyboard focus remains.
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let visible = use_state(|| false);
    let triggers = use_mut_ref(Triggers::default);
    let pending = use_mut_ref(|| None::<(bool, TimerHandle)>);

    let update = {
        let visible = visible.clone();
        let triggers = triggers.clone();
        let pending = pending.clone();
        let scheduler = props.scheduler.clone();
        let (delay_ms, close_delay_ms) = (props.delay_ms, props.close_delay_ms);
        move |change: fn(&mut Triggers)| {
            let wanted = {
                let mut triggers = triggers.borrow_mut();
                change(&mut triggers);
                triggers.wants_visible()
            };
            let target = pending.borrow().as_ref().map(|(target, _)| *target);

            match next_step(*visible, wanted, target) {
                Step::Wait => {}
                Step::Settle => {
                    pending.borrow_mut().take();
                }
                Step::Schedule { visible: show } => {
                    let delay_ms = if show { delay_ms } else { close_delay_ms };
                    if delay_ms == 0 {
                        pending.borrow_mut().take();
                        visible.set(show);
                        return;
                    }
                    let handle = {
                        let visible = visible.clone();
                        let pending = pending.clone();
                        scheduler.schedule(
                            delay_ms,
                            Box::new(move || {
                                let fired = pending.borrow_mut().take();
                                if let Some(handle) = fired {
                                    handle.1.forget();
                                }
                                visible.set(show);
                            }),
                        )
                    };
                    // Replacing the pending handle cancels the previous timer.
                    *pending.borrow_mut() = Some((show, handle));
                }
            }
        }
    };

    let callback = |change: fn(&mut Triggers)| {
        let update = update.clone();
        Callback::from(move |_: ()| update(change))
    };
    let on_enter = callback(|t| t.hovered = true);
    let on_leave = callback(|t| t.hovered = false);
    let on_focus = callback(|t| t.focused = true);
    let on_blur = callback(|t| t.focused = false);

    // Cancel a pending transition on unmount
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    let surface_state = if *visible {
        styles::TOOLTIP_VISIBLE
    } else {
        styles::TOOLTIP_HIDDEN
    };

    html! {
        <div
            class={styles::TOOLTIP_ANCHOR}
            onmouseenter={on_enter.reform(|_: MouseEvent| ())}
            onmouseleave={on_leave.reform(|_: MouseEvent| ())}
            onfocusin={on_focus.reform(|_: FocusEvent| ())}
            onfocusout={on_blur.reform(|_: FocusEvent| ())}
        >
            {props.children.clone()}
            <div
                role="tooltip"
                data-placement={props.placement.as_str()}
                aria-hidden={(!*visible).to_string()}
                class={classes!(
                    styles::TOOLTIP_SURFACE,
                    props.placement.position_classes(),
                    surface_state,
                )}
            >
                {props.content.clone()}
            </div>
        </div>
    }
}
