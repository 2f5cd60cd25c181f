//! Metrics sink boundary.
//!
//! Rewrite logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{obs::metrics, pattern::Shape};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// Config turned the pass or every matching shape off.
    Disabled,
    /// Shape, translation or compile failure.
    InvalidCall,
    /// Pattern text matched no recognizer.
    NoMatch,
}

///
/// HolderFlavor
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HolderFlavor {
    Regex,
    SqlLike,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    HolderBuilt {
        flavor: HolderFlavor,
    },
    Attempt {
        function: &'static str,
    },
    Rewritten {
        function: &'static str,
        shape: Shape,
    },
    Skipped {
        function: &'static str,
        reason: SkipReason,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::HolderBuilt { flavor } => {
                metrics::with_state_mut(|m| match flavor {
                    HolderFlavor::Regex => {
                        m.ops.regex_holders = m.ops.regex_holders.saturating_add(1);
                    }
                    HolderFlavor::SqlLike => {
                        m.ops.like_holders = m.ops.like_holders.saturating_add(1);
                    }
                });
            }

            MetricsEvent::Attempt { function } => {
                metrics::with_state_mut(|m| {
                    m.ops.attempts = m.ops.attempts.saturating_add(1);
                    let entry = m.functions.entry(function.to_string()).or_default();
                    entry.attempts = entry.attempts.saturating_add(1);
                });
            }

            MetricsEvent::Rewritten { function, shape } => {
                metrics::with_state_mut(|m| {
                    match shape {
                        Shape::StartsWith => {
                            m.ops.starts_with = m.ops.starts_with.saturating_add(1);
                        }
                        Shape::EndsWith => m.ops.ends_with = m.ops.ends_with.saturating_add(1),
                        Shape::IsSubstr => m.ops.is_substr = m.ops.is_substr.saturating_add(1),
                    }
                    let entry = m.functions.entry(function.to_string()).or_default();
                    entry.rewritten = entry.rewritten.saturating_add(1);
                });
            }

            MetricsEvent::Skipped { function, reason } => {
                metrics::with_state_mut(|m| {
                    match reason {
                        SkipReason::Disabled => {
                            m.ops.skipped_disabled = m.ops.skipped_disabled.saturating_add(1);
                        }
                        SkipReason::InvalidCall => {
                            m.ops.skipped_invalid = m.ops.skipped_invalid.saturating_add(1);
                        }
                        SkipReason::NoMatch => {
                            m.ops.skipped_no_match = m.ops.skipped_no_match.saturating_add(1);
                        }
                    }
                    let entry = m.functions.entry(function.to_string()).or_default();
                    entry.skipped = entry.skipped.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current metrics state.
#[must_use]
pub fn metrics_report() -> metrics::RewriteReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
