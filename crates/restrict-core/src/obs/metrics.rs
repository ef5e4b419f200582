use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for factory, negation, and pattern work.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub rejections: EventRejections,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Factory output by variant
    pub basic_built: u64,
    pub text_built: u64,
    pub composite_built: u64,

    // Root negation calls
    pub negations: u64,

    // Pattern compiler
    pub patterns_compiled: u64,
    pub pattern_escapes: u64,
}

///
/// EventRejections
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventRejections {
    pub missing_argument: u64,
    pub same_wildcard: u64,
    pub text_operator: u64,
    pub set_operand: u64,
}

impl EventRejections {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.missing_argument
            .saturating_add(self.same_wildcard)
            .saturating_add(self.text_operator)
            .saturating_add(self.set_operand)
    }
}

///
/// EventReport
/// Point-in-time snapshot handed to callers.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub counters: EventState,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

#[must_use]
pub(crate) fn report() -> EventReport {
    EventReport {
        counters: with_state(Clone::clone),
    }
}
