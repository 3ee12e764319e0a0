//! One-shot timers that cancel on drop

use gloo::timers::callback::Timeout;
use std::rc::Rc;

/// Handle to a scheduled callback. Dropping it cancels the callback if it
/// has not fired yet.
#[must_use = "dropping the handle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Let the callback fire even after the handle goes away
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Source of delayed callbacks
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// `setTimeout` through gloo
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, callback);
        // Dropping a gloo Timeout clears it.
        TimerHandle::new(move || drop(timeout))
    }
}

/// Reference-counted scheduler usable as a component prop.
///
/// Two handles are equal when they point at the same scheduler. Defaults to
/// [`BrowserScheduler`].
#[derive(Clone)]
pub struct SharedScheduler(Rc<dyn Scheduler>);

impl SharedScheduler {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self(scheduler)
    }
}

impl From<Rc<dyn Scheduler>> for SharedScheduler {
    fn from(scheduler: Rc<dyn Scheduler>) -> Self {
        Self(scheduler)
    }
}

impl Default for SharedScheduler {
    fn default() -> Self {
        Self(Rc::new(BrowserScheduler))
    }
}

impl PartialEq for SharedScheduler {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl std::ops::Deref for SharedScheduler {
    type Target = dyn Scheduler;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for SharedScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedScheduler").finish_non_exhaustive()
    }
}
