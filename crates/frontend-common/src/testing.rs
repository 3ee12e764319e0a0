//! Deterministic stand-ins for the browser clock and location.

use crate::error::NavigationError;
use crate::navigation::Navigator;
use crate::scheduler::{Scheduler, TimerHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Pending = (u64, u64, Box<dyn FnOnce()>);

#[derive(Default)]
struct ClockState {
    now_ms: Cell<u64>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

/// Scheduler driven by [`ManualScheduler::advance`] instead of real time
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<ClockState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.now_ms.get()
    }

    /// Number of callbacks scheduled and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.state.pending.borrow().len()
    }

    /// Move the clock forward, firing every callback that comes due in
    /// deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.now_ms.get() + ms;
        loop {
            let due = {
                let mut pending = self.state.pending.borrow_mut();
                let next = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (deadline, _, _))| *deadline <= target)
                    .min_by_key(|(_, (deadline, id, _))| (*deadline, *id))
                    .map(|(index, _)| index);
                next.map(|index| pending.remove(index))
            };
            let Some((deadline, _, callback)) = due else {
                break;
            };
            self.state.now_ms.set(deadline);
            callback();
        }
        self.state.now_ms.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        let deadline = self.state.now_ms.get() + u64::from(delay_ms);
        self.state
            .pending
            .borrow_mut()
            .push((deadline, id, callback));

        let state = Rc::downgrade(&self.state);
        TimerHandle::new(move || {
            if let Some(state) = state.upgrade() {
                state.pending.borrow_mut().retain(|(_, pending_id, _)| *pending_id != id);
            }
        })
    }
}

/// Navigator that records URLs instead of leaving the page
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.visits.borrow().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.visits.borrow_mut().push(url.to_string());
        Ok(())
    }
}
