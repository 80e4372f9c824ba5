//! Pointer handler profiling.
//!
//! Move handlers run on every pointer event during a session, so they are
//! wrapped in [`profile_scope!`](crate::profile_scope). With the `profiling`
//! feature each scope records its duration into a per-thread registry keyed
//! by scope name; without it the macro compiles to nothing.
//!
//! ```ignore
//! use homelab_panels::perf::{operation_stats, set_profiling_enabled};
//!
//! set_profiling_enabled(true);
//! // ... drive a drag session ...
//! if let Some(stats) = operation_stats("drag_pointer_move") {
//!     println!("avg {:.3}ms, p95 {:.3}ms", stats.average(), stats.p95());
//! }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::trace;

/// Samples retained per scope name
const WINDOW: usize = 100;

static ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

thread_local! {
    static REGISTRY: RefCell<HashMap<&'static str, OperationStats>> = RefCell::new(HashMap::new());
}

/// Time the rest of the enclosing block under `name`.
///
/// ```ignore
/// fn pointer_move(&mut self, event: &PointerEvent) {
///     profile_scope!("drag_pointer_move");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Turn sample collection on or off for every thread.
pub fn set_profiling_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Statistics
// ============================================================================

/// Handler durations for one scope name, in milliseconds.
///
/// Averages and percentiles cover the last `WINDOW` samples; `count`, `min`
/// and `max` cover every sample since the last reset.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    recent: VecDeque<f64>,
    count: u64,
    min: Option<f64>,
    max: Option<f64>,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(ms);
        self.count += 1;
        self.min = Some(self.min.map_or(ms, |m| m.min(ms)));
        self.max = Some(self.max.map_or(ms, |m| m.max(ms)));
    }

    pub fn average(&self) -> f64 {
        match self.recent.len() {
            0 => 0.0,
            n => self.recent.iter().sum::<f64>() / n as f64,
        }
    }

    /// Nearest-rank 95th percentile of the retained samples.
    pub fn p95(&self) -> f64 {
        let mut sorted: Vec<f64> = self.recent.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);
        let rank = (sorted.len() * 95 / 100).min(sorted.len().saturating_sub(1));
        sorted.get(rank).copied().unwrap_or(0.0)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min_ms(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn max_ms(&self) -> f64 {
        self.max.unwrap_or(0.0)
    }
}

/// Add a sample for `name` on the current thread.
pub fn record_operation(name: &'static str, elapsed_ms: f64) {
    REGISTRY.with(|r| r.borrow_mut().entry(name).or_default().record(elapsed_ms));
}

/// Copy of the samples recorded for `name` on the current thread.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    REGISTRY.with(|r| r.borrow().get(name).cloned())
}

pub fn reset_operation_stats() {
    REGISTRY.with(|r| r.borrow_mut().clear());
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Records the time between construction and drop while profiling is enabled.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.elapsed_ms();
        record_operation(self.name, elapsed_ms);
        trace!(scope = self.name, elapsed_ms, "Handler timed");
    }
}
