//! Metrics sink boundary.
//!
//! Algebra code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{obs::metrics, restriction::RestrictionKind};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// RejectKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectKind {
    MissingArgument,
    SameWildcard,
    TextOperator,
    SetOperand,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    RestrictionBuilt { kind: RestrictionKind },
    Negated { kind: RestrictionKind },
    PatternCompiled { escapes: u64 },
    Rejected { reason: RejectKind },
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
        metrics::with_state_mut(|m| match event {
            MetricsEvent::RestrictionBuilt { kind } => {
                let slot = match kind {
                    RestrictionKind::Basic => &mut m.ops.basic_built,
                    RestrictionKind::Text => &mut m.ops.text_built,
                    RestrictionKind::Composite => &mut m.ops.composite_built,
                };
                *slot = slot.saturating_add(1);
            }

            MetricsEvent::Negated { .. } => {
                m.ops.negations = m.ops.negations.saturating_add(1);
            }

            MetricsEvent::PatternCompiled { escapes } => {
                m.ops.patterns_compiled = m.ops.patterns_compiled.saturating_add(1);
                m.ops.pattern_escapes = m.ops.pattern_escapes.saturating_add(escapes);
            }

            MetricsEvent::Rejected { reason } => {
                let slot = match reason {
                    RejectKind::MissingArgument => &mut m.rejections.missing_argument,
                    RejectKind::SameWildcard => &mut m.rejections.same_wildcard,
                    RejectKind::TextOperator => &mut m.rejections.text_operator,
                    RejectKind::SetOperand => &mut m.rejections.set_operand,
                };
                *slot = slot.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` comes from a live `&dyn MetricsSink` installed by
        //   `with_metrics_sink`, which restores the previous slot on every
        //   exit (including unwind) before that borrow ends.
        // - The pointer is only dereferenced synchronously here and never stored.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's metrics.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics counters on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The erased pointer is installed only for this dynamic scope; `Guard`
    //   restores the previous slot on all exits.
    // - Only shared access is ever materialized from it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
