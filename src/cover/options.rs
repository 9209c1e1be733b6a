use std::{fmt, sync::Arc};

use crate::cover::{CancelToken, ProgressSink};

/// Tuning knobs for a coverage run.
#[derive(Clone)]
pub struct CoverOptions {
    /// Worker threads for the latitude-row scan (default: available cores).
    pub threads: usize,
    /// Optional sink receiving progress fractions in `[0, 1]`.
    pub progress: Option<Arc<dyn ProgressSink>>,
    /// Optional cooperative cancellation token.
    pub cancel: Option<CancelToken>,
}

impl Default for CoverOptions {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            progress: None,
            cancel: None,
        }
    }
}

impl fmt::Debug for CoverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverOptions")
            .field("threads", &self.threads)
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thread_count_matches_cores() {
        let options = CoverOptions::default();
        assert_eq!(options.threads, num_cpus::get());
        assert!(options.progress.is_none());
        assert!(options.cancel.is_none());
    }
}
