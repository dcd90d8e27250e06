//! Dashboard load sequencing.
//!
//! The snapshot and the trend series are fetched together and settle as a
//! unit: the dashboard is `Ready` only when both arrive, and either
//! failure fails the load as a whole. A generation counter marks each
//! load; a completion carrying a superseded generation belongs to a
//! district the user has already navigated away from and is dropped
//! wholesale.

use contracts::snapshot::{DistrictSnapshot, TrendPoint, TrendResponse};

/// Trend window requested alongside every snapshot.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Everything the dashboard renders for one district.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub snapshot: DistrictSnapshot,
    pub trends: Vec<TrendPoint>,
}

/// Tri-state of the load sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed(String),
    Ready(DashboardData),
}

/// Combines the two fetch outcomes. Partial data is never rendered; when
/// both fail, the snapshot error wins.
pub fn settle(
    snapshot: Result<DistrictSnapshot, String>,
    trend: Result<TrendResponse, String>,
) -> LoadPhase {
    match (snapshot, trend) {
        (Ok(snapshot), Ok(trend)) => LoadPhase::Ready(DashboardData {
            snapshot,
            trends: trend.trends,
        }),
        (Err(e), _) | (_, Err(e)) => LoadPhase::Failed(e),
    }
}

/// Monotonic ticket dispenser for in-flight loads. Every (re)load takes a
/// fresh generation and only the completion holding the current one may
/// apply its result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    /// Starts a new load, invalidating every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// True while `generation` is still the newest load.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::district::DistrictRef;
    use contracts::snapshot::MetricSnapshot;

    fn district(code: &str) -> DistrictRef {
        DistrictRef {
            id: 1,
            state: "Uttar Pradesh".to_string(),
            district_name: "Lucknow".to_string(),
            district_code: code.to_string(),
        }
    }

    fn snapshot_for(code: &str) -> DistrictSnapshot {
        DistrictSnapshot {
            current: MetricSnapshot {
                year: 2025,
                month: 1,
                people_benefited: 45_000,
                ..Default::default()
            },
            previous: None,
            district: district(code),
            comparison: Default::default(),
        }
    }

    fn trend_for(code: &str, points: usize) -> TrendResponse {
        TrendResponse {
            district: district(code),
            trends: vec![TrendPoint::default(); points],
        }
    }

    #[test]
    fn both_successes_settle_ready() {
        let phase = settle(Ok(snapshot_for("UP-LUC")), Ok(trend_for("UP-LUC", 6)));
        match phase {
            LoadPhase::Ready(data) => {
                assert_eq!(data.snapshot.district.district_code, "UP-LUC");
                assert_eq!(data.trends.len(), 6);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn failed_trend_fails_the_whole_load() {
        let phase = settle(Ok(snapshot_for("UP-LUC")), Err("Request timed out".to_string()));
        assert_eq!(phase, LoadPhase::Failed("Request timed out".to_string()));
    }

    #[test]
    fn failed_snapshot_fails_the_whole_load() {
        let phase = settle(Err("HTTP error: 500".to_string()), Ok(trend_for("UP-LUC", 6)));
        assert_eq!(phase, LoadPhase::Failed("HTTP error: 500".to_string()));
    }

    #[test]
    fn double_failure_reports_the_snapshot_error() {
        let phase = settle(
            Err("HTTP error: 500".to_string()),
            Err("Request timed out".to_string()),
        );
        assert_eq!(phase, LoadPhase::Failed("HTTP error: 500".to_string()));
    }

    #[test]
    fn each_load_takes_a_fresh_generation() {
        let mut counter = GenerationCounter::default();
        let first = counter.begin();
        let second = counter.begin();
        assert_ne!(first, second);
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn retry_reloads_from_scratch() {
        let mut counter = GenerationCounter::default();
        let mut phase = LoadPhase::Loading;

        let first = counter.begin();
        if counter.is_current(first) {
            phase = settle(Err("Request timed out".to_string()), Ok(trend_for("UP-LUC", 6)));
        }
        assert!(matches!(phase, LoadPhase::Failed(_)));

        // User presses Retry: a fresh generation re-enters Loading and both
        // fetches run again.
        let second = counter.begin();
        phase = LoadPhase::Loading;
        assert!(!counter.is_current(first));
        if counter.is_current(second) {
            phase = settle(Ok(snapshot_for("UP-LUC")), Ok(trend_for("UP-LUC", 6)));
        }
        assert!(matches!(phase, LoadPhase::Ready(_)));
    }

    #[test]
    fn late_completion_for_a_previous_district_is_ignored() {
        let mut counter = GenerationCounter::default();
        let mut phase = LoadPhase::Loading;

        let for_lucknow = counter.begin();
        // User switches district before the first load settles.
        let for_kanpur = counter.begin();

        if counter.is_current(for_lucknow) {
            phase = settle(Ok(snapshot_for("UP-LUC")), Ok(trend_for("UP-LUC", 6)));
        }
        assert_eq!(phase, LoadPhase::Loading);

        if counter.is_current(for_kanpur) {
            phase = settle(Ok(snapshot_for("UP-KAN")), Ok(trend_for("UP-KAN", 6)));
        }
        match phase {
            LoadPhase::Ready(data) => assert_eq!(data.snapshot.district.district_code, "UP-KAN"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }
}
