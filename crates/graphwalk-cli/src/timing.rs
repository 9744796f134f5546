//! Per-command latency collection for `--timing` / `GRAPHWALK_TIMING`.
//!
//! Samples are kept per thread and drained into a [`TimingReport`] once the
//! command has finished.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

thread_local! {
    static SAMPLES: RefCell<Vec<(String, Duration)>> = const { RefCell::new(Vec::new()) };
}

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Latency percentiles for one named operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpTiming {
    pub name: String,
    pub count: usize,
    #[serde(rename = "p50_us", serialize_with = "as_micros")]
    pub p50: Duration,
    #[serde(rename = "p95_us", serialize_with = "as_micros")]
    pub p95: Duration,
    #[serde(rename = "p99_us", serialize_with = "as_micros")]
    pub p99: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimingReport {
    pub operations: Vec<OpTiming>,
}

fn as_micros<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u128(value.as_micros())
}

/// `GRAPHWALK_TIMING` accepts `1`, `true`, `yes` or `on`, in any case.
#[must_use]
pub fn enabled_from_env() -> bool {
    std::env::var("GRAPHWALK_TIMING").is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    ["1", "true", "yes", "on"].iter().any(|t| value.trim().eq_ignore_ascii_case(t))
}

/// Turning collection off also drops any pending samples.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
    if !enabled {
        clear();
    }
}

#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn clear() {
    SAMPLES.with(|samples| samples.borrow_mut().clear());
}

/// Run `f`, recording its wall time under `name` when collection is enabled.
pub fn timed<R>(name: &str, f: impl FnOnce() -> R) -> R {
    if !is_enabled() {
        return f();
    }
    let started = Instant::now();
    let result = f();
    record(name, started.elapsed());
    result
}

fn record(name: &str, elapsed: Duration) {
    SAMPLES.with(|samples| samples.borrow_mut().push((name.to_string(), elapsed)));
}

/// Drain this thread's samples into a report, one row per name.
#[must_use]
pub fn collect_report() -> TimingReport {
    let samples = SAMPLES.with(|samples| std::mem::take(&mut *samples.borrow_mut()));

    let mut grouped: BTreeMap<String, Vec<Duration>> = BTreeMap::new();
    for (name, elapsed) in samples {
        grouped.entry(name).or_default().push(elapsed);
    }

    let operations = grouped
        .into_iter()
        .map(|(name, mut values)| {
            values.sort_unstable();
            OpTiming {
                name,
                count: values.len(),
                p50: percentile(&values, 50),
                p95: percentile(&values, 95),
                p99: percentile(&values, 99),
            }
        })
        .collect();

    TimingReport { operations }
}

impl TimingReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    #[must_use]
    pub fn display_table(&self) -> String {
        if self.is_empty() {
            return "No timing samples recorded.".to_string();
        }

        let mut out = format!(
            "{:<24} {:>6} {:>10} {:>10} {:>10}\n{:-<64}\n",
            "operation", "count", "p50", "p95", "p99", ""
        );
        for op in &self.operations {
            let _ = writeln!(
                out,
                "{:<24} {:>6} {:>10} {:>10} {:>10}",
                op.name,
                op.count,
                format_duration(op.p50),
                format_duration(op.p95),
                format_duration(op.p99)
            );
        }
        out
    }
}

/// Nearest-rank percentile over an ascending slice.
fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let rank = (pct.min(100) * sorted.len()).div_ceil(100);
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    match micros {
        1_000_000.. => format!("{}.{:03}s", micros / 1_000_000, (micros % 1_000_000) / 1_000),
        1_000.. => format!("{}.{:03}ms", micros / 1_000, micros % 1_000),
        _ => format!("{micros}µs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn disabled_collection_records_nothing() {
        let _guard = GUARD.lock().expect("guard");
        set_enabled(false);

        assert_eq!(timed("cmd.bfs", || 7_u8), 7);
        assert!(collect_report().is_empty());
    }

    #[test]
    fn enabled_collection_records_one_sample() {
        let _guard = GUARD.lock().expect("guard");
        set_enabled(true);
        clear();

        timed("cmd.stats", || std::thread::sleep(Duration::from_micros(50)));
        let report = collect_report();
        assert_eq!(report.operations.len(), 1);
        assert_eq!(report.operations[0].name, "cmd.stats");
        assert_eq!(report.operations[0].count, 1);
        assert!(report.operations[0].p50 > Duration::ZERO);

        set_enabled(false);
    }

    #[test]
    fn report_groups_by_name_in_sorted_order() {
        let _guard = GUARD.lock().expect("guard");
        clear();

        record("replay", Duration::from_micros(3_000));
        record("replay", Duration::from_micros(1_000));
        record("replay", Duration::from_micros(2_000));
        record("components", Duration::from_micros(5_000));

        let report = collect_report();
        let names: Vec<&str> = report.operations.iter().map(|op| op.name.as_str()).collect();
        assert_eq!(names, ["components", "replay"]);

        let replay = &report.operations[1];
        assert_eq!(replay.count, 3);
        assert_eq!(replay.p50, Duration::from_micros(2_000));
        assert_eq!(replay.p99, Duration::from_micros(3_000));
        assert!(collect_report().is_empty(), "collect drains the buffer");
    }

    #[test]
    fn report_serializes_microseconds() {
        let report = TimingReport {
            operations: vec![OpTiming {
                name: "cmd.dfs".into(),
                count: 2,
                p50: Duration::from_micros(10),
                p95: Duration::from_micros(20),
                p99: Duration::from_micros(30),
            }],
        };
        let value = serde_json::to_value(&report).expect("json");
        assert_eq!(value["operations"][0]["p95_us"], 20);
        assert!(report.display_table().contains("cmd.dfs"));
    }

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.500ms");
        assert_eq!(format_duration(Duration::from_millis(2_250)), "2.250s");
    }

    #[test]
    fn truthy_values() {
        for value in ["1", "TRUE", "yes", " on "] {
            assert!(is_truthy(value), "{value}");
        }
        assert!(!is_truthy("0"));
        assert!(!is_truthy("off"));
    }
}
