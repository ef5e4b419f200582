//! Observability: in-process telemetry (metrics) and sink abstractions.
//!
//! Counters are thread-local and observational only; they never feed back
//! into restriction values.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::{EventOps, EventRejections, EventReport, EventState};
pub use sink::{
    MetricsEvent, MetricsSink, RejectKind, metrics_report, metrics_reset_all, with_metrics_sink,
};
