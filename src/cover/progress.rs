use std::sync::atomic::{AtomicUsize, Ordering};

/// One-way sink for coverage progress reports. Values are fractions in
/// `[0, 1]`; the terminal `1.0` is delivered exactly once.
pub trait ProgressSink: Send + Sync {
    fn report(&self, fraction: f64);
}

impl<F> ProgressSink for F
where
    F: Fn(f64) + Send + Sync,
{
    fn report(&self, fraction: f64) {
        self(fraction)
    }
}

/// Shared progress bookkeeping: a completed-row counter plus a
/// last-reported-percent register.
///
/// Publishing `completed / total` directly from workers is racy and emits
/// duplicates; the register is advanced through an atomic CAS loop
/// instead, so each integer milestone is reported at most once and
/// reports never decrease.
pub(crate) struct ProgressTracker<'a> {
    total_rows: usize,
    completed: AtomicUsize,
    last_percent: AtomicUsize,
    sink: Option<&'a dyn ProgressSink>,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(
        total_rows: usize,
        sink: Option<&'a dyn ProgressSink>,
    ) -> Self {
        Self {
            total_rows,
            completed: AtomicUsize::new(0),
            last_percent: AtomicUsize::new(0),
            sink,
        }
    }

    /// Called by a worker after each finished latitude row.
    pub(crate) fn row_done(&self) {
        let Some(sink) = self.sink else {
            return;
        };
        if self.total_rows == 0 {
            return;
        }

        let done = self.completed.fetch_add(1, Ordering::AcqRel) + 1;
        let percent = done * 100 / self.total_rows;
        // 100% is held back; the terminal report belongs to `finish`.
        if percent >= 100 {
            return;
        }

        let advanced = self
            .last_percent
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                (percent > last).then_some(percent)
            })
            .is_ok();
        if advanced {
            sink.report(percent as f64 / 100.0);
        }
    }

    /// Issues the terminal `1.0` report. Called once, after every row has
    /// completed and only when the scan was not cancelled.
    pub(crate) fn finish(&self) {
        if let Some(sink) = self.sink {
            sink.report(1.0);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
