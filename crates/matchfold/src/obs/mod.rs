//! Observability: rewrite-pass counters and sink abstractions.
//!
//! Diagnostic text goes through the `log` facade; counters go through
//! the sink defined here.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventState, FunctionCounters, RewriteOps, RewriteReport};
pub use sink::{
    HolderFlavor, MetricsEvent, MetricsSink, SkipReason, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
