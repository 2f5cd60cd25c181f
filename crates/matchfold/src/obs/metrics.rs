use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for the rewrite pass.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventState {
    pub ops: RewriteOps,
    pub functions: BTreeMap<String, FunctionCounters>,
}

///
/// RewriteOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RewriteOps {
    pub attempts: u64,

    // Holders compiled, by flavor
    pub regex_holders: u64,
    pub like_holders: u64,

    // Rewrites emitted, by target operation
    pub starts_with: u64,
    pub ends_with: u64,
    pub is_substr: u64,

    // Skips, by reason
    pub skipped_disabled: u64,
    pub skipped_invalid: u64,
    pub skipped_no_match: u64,
}

///
/// FunctionCounters
/// Per source-function (`like`, `regexp_matches`) breakdown.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FunctionCounters {
    pub attempts: u64,
    pub rewritten: u64,
    pub skipped: u64,
}

///
/// RewriteReport
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct RewriteReport {
    /// `None` when nothing has been recorded since the last reset.
    pub counters: Option<EventState>,
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

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

#[must_use]
pub(crate) fn report() -> RewriteReport {
    with_state(|m| {
        let recorded = m.ops.attempts > 0 || m.ops.regex_holders > 0 || m.ops.like_holders > 0;
        let counters = recorded.then(|| m.clone());

        RewriteReport { counters }
    })
}
