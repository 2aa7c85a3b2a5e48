//! Wall-clock instrumentation for single calls.
//!
//! [`instrument`] turns any `Fn(A) -> T` into an equivalent callable that
//! measures each invocation, emits a `tracing` event and appends a
//! [`TimingReport`] to a caller-owned [`TimingLog`]. The wrapped result is
//! returned untouched. Multiple arguments are passed as a tuple; zero
//! arguments as `()`.
//!
//! The fallible variants ([`try_instrument`], [`try_time_call`]) only report
//! when the computation returns `Ok`; an `Err` is handed back as-is with no
//! report. A panic unwinds through the wrapper and is never reported either.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::info;

/// Elapsed time of one completed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingReport {
    pub function: &'static str,
    #[serde(rename = "elapsed_secs", serialize_with = "duration_secs")]
    pub elapsed: Duration,
}

fn duration_secs<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(value.as_secs_f64())
}

/// Ordered collection of reports produced by instrumented calls.
///
/// Interior mutability keeps instrumented callables `Fn`; the log is meant for
/// one thread.
#[derive(Debug, Default)]
pub struct TimingLog {
    reports: RefCell<Vec<TimingReport>>,
}

impl TimingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, report: TimingReport) {
        self.reports.borrow_mut().push(report);
    }

    pub fn reports(&self) -> Vec<TimingReport> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Sum of every recorded duration.
    pub fn total(&self) -> Duration {
        self.reports.borrow().iter().map(|report| report.elapsed).sum()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<TimingReport> {
        std::mem::take(&mut *self.reports.borrow_mut())
    }
}

fn report(function: &'static str, elapsed: Duration, log: &TimingLog) {
    info!(
        function,
        elapsed_secs = elapsed.as_secs_f64(),
        "Function {function} Execution Time: {:.6} seconds",
        elapsed.as_secs_f64()
    );
    log.record(TimingReport { function, elapsed });
}

/// Run `func` once, timing it.
pub fn time_call<T, F>(function: &'static str, log: &TimingLog, func: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = func();
    let elapsed = start.elapsed();
    report(function, elapsed, log);
    result
}

/// Run a fallible `func` once, timing it only when it succeeds.
pub fn try_time_call<T, E, F>(function: &'static str, log: &TimingLog, func: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let result = func()?;
    let elapsed = start.elapsed();
    report(function, elapsed, log);
    Ok(result)
}

/// Wrap `func` so every call is timed and logged under `function`.
pub fn instrument<'log, A, T, F>(
    function: &'static str,
    log: &'log TimingLog,
    func: F,
) -> impl Fn(A) -> T + 'log
where
    F: Fn(A) -> T + 'log,
{
    move |args| time_call(function, log, || func(args))
}

/// Wrap a fallible `func`; only successful calls are timed and logged.
pub fn try_instrument<'log, A, T, E, F>(
    function: &'static str,
    log: &'log TimingLog,
    func: F,
) -> impl Fn(A) -> Result<T, E> + 'log
where
    F: Fn(A) -> Result<T, E> + 'log,
{
    move |args| try_time_call(function, log, || func(args))
}
