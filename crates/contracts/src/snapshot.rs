use crate::district::DistrictRef;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Monthly snapshot
// ---------------------------------------------------------------------------

/// Metric values reported for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    #[serde(default)]
    pub people_benefited: u64,
    #[serde(default)]
    pub workdays_created: u64,
    /// Rupees, reported with paise precision.
    #[serde(default)]
    pub wages_paid: f64,
    #[serde(default)]
    pub payments_on_time_percent: f64,
    #[serde(default)]
    pub works_completed: u64,
}

/// Month-over-month percentage change per metric. An absent entry means
/// the backend had no previous value to compare against, which is distinct
/// from a present `0.0` (unchanged).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub people_benefited: Option<f64>,
    #[serde(default)]
    pub workdays_created: Option<f64>,
    #[serde(default)]
    pub wages_paid: Option<f64>,
    #[serde(default)]
    pub payments_on_time_percent: Option<f64>,
    #[serde(default)]
    pub works_completed: Option<f64>,
}

/// `GET /api/v1/districts/{code}/snapshot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSnapshot {
    pub current: MetricSnapshot,
    #[serde(default)]
    pub previous: Option<MetricSnapshot>,
    pub district: DistrictRef,
    #[serde(default)]
    pub comparison: Comparison,
}

// ---------------------------------------------------------------------------
// Trend history
// ---------------------------------------------------------------------------

/// One point of the trend series, tagged with its period label
/// ("Jan 2025"). The backend returns points in chronological order and the
/// chart preserves that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month_year: String,
    #[serde(default)]
    pub people_benefited: u64,
    #[serde(default)]
    pub workdays_created: u64,
    #[serde(default)]
    pub wages_paid: f64,
    #[serde(default)]
    pub payments_on_time_percent: f64,
    #[serde(default)]
    pub works_completed: u64,
}

/// `GET /api/v1/districts/{code}/trend?months=N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    pub district: DistrictRef,
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_payload_deserializes() {
        let payload = r#"{
            "current": {
                "year": 2025, "month": 1,
                "people_benefited": 45000,
                "workdays_created": 900000,
                "wages_paid": 158400000.0,
                "payments_on_time_percent": 92.5,
                "works_completed": 350
            },
            "previous": {
                "year": 2024, "month": 12,
                "people_benefited": 44000,
                "workdays_created": 880000,
                "wages_paid": 154000000.0,
                "payments_on_time_percent": 91.0,
                "works_completed": 340
            },
            "district": {"id": 1, "state": "Uttar Pradesh", "district_name": "Lucknow", "district_code": "UP-LUC"},
            "comparison": {
                "people_benefited": 2.27,
                "workdays_created": 2.27,
                "wages_paid": 2.86,
                "payments_on_time_percent": 1.65,
                "works_completed": 2.94
            }
        }"#;
        let snapshot: DistrictSnapshot = serde_json::from_str(payload).unwrap();
        assert_eq!(snapshot.current.people_benefited, 45_000);
        assert_eq!(snapshot.current.month, 1);
        assert_eq!(snapshot.previous.as_ref().map(|p| p.month), Some(12));
        assert_eq!(snapshot.comparison.people_benefited, Some(2.27));
        assert_eq!(snapshot.district.district_code, "UP-LUC");
    }

    #[test]
    fn first_month_omits_previous_and_comparison() {
        let payload = r#"{
            "current": {"year": 2025, "month": 1, "people_benefited": 45000},
            "district": {"id": 1, "state": "Uttar Pradesh", "district_name": "Lucknow", "district_code": "UP-LUC"}
        }"#;
        let snapshot: DistrictSnapshot = serde_json::from_str(payload).unwrap();
        assert!(snapshot.previous.is_none());
        assert_eq!(snapshot.comparison, Comparison::default());
        // Metrics the backend had no figures for default to zero.
        assert_eq!(snapshot.current.works_completed, 0);
    }

    #[test]
    fn absent_comparison_entry_differs_from_zero() {
        let payload = r#"{"people_benefited": 0.0, "wages_paid": null}"#;
        let comparison: Comparison = serde_json::from_str(payload).unwrap();
        assert_eq!(comparison.people_benefited, Some(0.0));
        assert_eq!(comparison.wages_paid, None);
        assert_eq!(comparison.works_completed, None);
    }

    #[test]
    fn trend_points_keep_backend_order() {
        let payload = r#"{
            "district": {"id": 1, "state": "Uttar Pradesh", "district_name": "Lucknow", "district_code": "UP-LUC"},
            "trends": [
                {"month_year": "Aug 2024", "people_benefited": 40000},
                {"month_year": "Sep 2024", "people_benefited": 41000},
                {"month_year": "Oct 2024", "people_benefited": 42000}
            ]
        }"#;
        let response: TrendResponse = serde_json::from_str(payload).unwrap();
        let labels: Vec<&str> = response.trends.iter().map(|p| p.month_year.as_str()).collect();
        assert_eq!(labels, ["Aug 2024", "Sep 2024", "Oct 2024"]);
    }
}
