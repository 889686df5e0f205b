//! Timing guards for the input hot paths.
//!
//! Pointer moves, zone lookups and marker event processing run once per
//! host event, often 60+ times a second. An [`InputTimer`] wraps one such
//! call and logs when it overruns its budget.
//!
//! Building with `--features profiling` additionally turns every
//! `profile_scope!("name")` into a timer with a 1 ms budget whose overruns
//! are reported at `trace` level. Without the feature the macro expands to
//! nothing.

use crate::constants::{PROFILE_BUDGET, SLOW_INPUT_BUDGET};
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// Time the rest of the enclosing scope when the `profiling` feature is on.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _profile_guard = $crate::perf::InputTimer::profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Report {
    /// Overruns are a real problem: `warn!`
    Warn,
    /// Overruns are profiling output: `trace!`
    Trace,
}

/// Guard that reports on drop if its scope took longer than `budget`.
#[derive(Debug)]
pub struct InputTimer {
    name: &'static str,
    started: Instant,
    budget: Duration,
    report: Report,
}

impl InputTimer {
    pub fn new(name: &'static str, budget: Duration) -> Self {
        Self {
            name,
            started: Instant::now(),
            budget,
            report: Report::Warn,
        }
    }

    /// Timer with the default input-path budget.
    pub fn for_input(name: &'static str) -> Self {
        Self::new(name, SLOW_INPUT_BUDGET)
    }

    /// Timer used by `profile_scope!`.
    pub fn profiling(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
            budget: PROFILE_BUDGET,
            report: Report::Trace,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn over_budget(&self) -> bool {
        self.elapsed() > self.budget
    }
}

impl Drop for InputTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if elapsed <= self.budget {
            return;
        }
        let elapsed_us = elapsed.as_micros() as u64;
        let budget_us = self.budget.as_micros() as u64;
        match self.report {
            Report::Warn => warn!(
                operation = self.name,
                elapsed_us,
                budget_us,
                "Input handling over budget"
            ),
            Report::Trace => trace!(operation = self.name, elapsed_us, budget_us, "[PERF]"),
        }
    }
}

/// Run `f` under an [`InputTimer`] and return its result.
#[inline]
pub fn timed<T>(name: &'static str, budget: Duration, f: impl FnOnce() -> T) -> T {
    let _timer = InputTimer::new(name, budget);
    f()
}
