use crate::snapshot::{Comparison, MetricSnapshot, TrendPoint};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric identity
// ---------------------------------------------------------------------------

/// The closed set of MGNREGA metrics the dashboard tracks. Every match on
/// `Metric` is exhaustive, so adding a metric is a compile-checked change
/// across cards, narration and the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    PeopleBenefited,
    WorkdaysCreated,
    WagesPaid,
    PaymentsOnTimePercent,
    WorksCompleted,
}

impl Metric {
    /// All metrics, in card order.
    pub const ALL: [Metric; 5] = [
        Metric::PeopleBenefited,
        Metric::WorkdaysCreated,
        Metric::WagesPaid,
        Metric::PaymentsOnTimePercent,
        Metric::WorksCompleted,
    ];

    /// Metrics offered by the trend chart. Completed works is a slow-moving
    /// count and stays off the chart.
    pub const CHARTABLE: [Metric; 4] = [
        Metric::PeopleBenefited,
        Metric::WorkdaysCreated,
        Metric::WagesPaid,
        Metric::PaymentsOnTimePercent,
    ];

    /// Wire identifier used by the backend API.
    pub fn key(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "people_benefited",
            Metric::WorkdaysCreated => "workdays_created",
            Metric::WagesPaid => "wages_paid",
            Metric::PaymentsOnTimePercent => "payments_on_time_percent",
            Metric::WorksCompleted => "works_completed",
        }
    }

    /// Reverse of [`Metric::key`]; `None` for identifiers outside the set.
    pub fn parse(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|metric| metric.key() == key)
    }

    /// Card title.
    pub fn label(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "People Benefited",
            Metric::WorkdaysCreated => "Workdays Created",
            Metric::WagesPaid => "Wages Paid",
            Metric::PaymentsOnTimePercent => "On-Time Payments",
            Metric::WorksCompleted => "Works Completed",
        }
    }

    /// Compact label for the chart's metric picker.
    pub fn short_label(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "People Benefited",
            Metric::WorkdaysCreated => "Workdays",
            Metric::WagesPaid => "Wages Paid",
            Metric::PaymentsOnTimePercent => "On-Time %",
            Metric::WorksCompleted => "Works",
        }
    }

    /// Icon name understood by the frontend icon helper.
    pub fn icon(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "users",
            Metric::WorkdaysCreated => "briefcase",
            Metric::WagesPaid => "wallet",
            Metric::PaymentsOnTimePercent => "clock",
            Metric::WorksCompleted => "check-circle",
        }
    }

    /// Accent slug used in card and chart-picker class names.
    pub fn accent(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "blue",
            Metric::WorkdaysCreated => "green",
            Metric::WagesPaid => "orange",
            Metric::PaymentsOnTimePercent => "purple",
            Metric::WorksCompleted => "pink",
        }
    }

    /// Stroke colour for the trend line.
    pub fn color(self) -> &'static str {
        match self {
            Metric::PeopleBenefited => "#3b82f6",
            Metric::WorkdaysCreated => "#10b981",
            Metric::WagesPaid => "#f59e0b",
            Metric::PaymentsOnTimePercent => "#8b5cf6",
            Metric::WorksCompleted => "#ec4899",
        }
    }

    /// Unit suffix shown after the compact card value.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Metric::WagesPaid => Some("₹"),
            Metric::PaymentsOnTimePercent => Some("%"),
            _ => None,
        }
    }

    /// Percent metrics are displayed and narrated at one decimal instead of
    /// in spoken-number form.
    pub fn is_percent(self) -> bool {
        matches!(self, Metric::PaymentsOnTimePercent)
    }

    // ---- values -----------------------------------------------------------

    /// Raw value of this metric in a monthly snapshot.
    pub fn value_in(self, snapshot: &MetricSnapshot) -> f64 {
        match self {
            Metric::PeopleBenefited => snapshot.people_benefited as f64,
            Metric::WorkdaysCreated => snapshot.workdays_created as f64,
            Metric::WagesPaid => snapshot.wages_paid,
            Metric::PaymentsOnTimePercent => snapshot.payments_on_time_percent,
            Metric::WorksCompleted => snapshot.works_completed as f64,
        }
    }

    /// Value shown on the metric card. Wages arrive with paise precision
    /// but the card shows whole rupees.
    pub fn card_value(self, snapshot: &MetricSnapshot) -> f64 {
        match self {
            Metric::WagesPaid => snapshot.wages_paid.trunc(),
            _ => self.value_in(snapshot),
        }
    }

    /// Value of this metric at one trend point.
    pub fn value_at(self, point: &TrendPoint) -> f64 {
        match self {
            Metric::PeopleBenefited => point.people_benefited as f64,
            Metric::WorkdaysCreated => point.workdays_created as f64,
            Metric::WagesPaid => point.wages_paid,
            Metric::PaymentsOnTimePercent => point.payments_on_time_percent,
            Metric::WorksCompleted => point.works_completed as f64,
        }
    }

    /// Month-over-month change entry for this metric, if the backend had a
    /// previous month to compare against.
    pub fn change_in(self, comparison: &Comparison) -> Option<f64> {
        match self {
            Metric::PeopleBenefited => comparison.people_benefited,
            Metric::WorkdaysCreated => comparison.workdays_created,
            Metric::WagesPaid => comparison.wages_paid,
            Metric::PaymentsOnTimePercent => comparison.payments_on_time_percent,
            Metric::WorksCompleted => comparison.works_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::parse(metric.key()), Some(metric));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(Metric::parse("households_served"), None);
        assert_eq!(Metric::parse(""), None);
    }

    #[test]
    fn serde_uses_the_wire_keys() {
        let json = serde_json::to_string(&Metric::PaymentsOnTimePercent).unwrap();
        assert_eq!(json, "\"payments_on_time_percent\"");
        let back: Metric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Metric::PaymentsOnTimePercent);
    }

    #[test]
    fn chart_set_skips_completed_works() {
        assert!(!Metric::CHARTABLE.contains(&Metric::WorksCompleted));
        assert_eq!(Metric::CHARTABLE.len(), 4);
    }

    #[test]
    fn values_map_to_snapshot_fields() {
        let snapshot = MetricSnapshot {
            year: 2025,
            month: 1,
            people_benefited: 45_000,
            workdays_created: 900_000,
            wages_paid: 158_400_000.5,
            payments_on_time_percent: 92.5,
            works_completed: 350,
        };
        assert_eq!(Metric::PeopleBenefited.value_in(&snapshot), 45_000.0);
        assert_eq!(Metric::PaymentsOnTimePercent.value_in(&snapshot), 92.5);
        // Cards round wages down to whole rupees; other metrics pass through.
        assert_eq!(Metric::WagesPaid.card_value(&snapshot), 158_400_000.0);
        assert_eq!(Metric::WorksCompleted.card_value(&snapshot), 350.0);
    }

    #[test]
    fn change_reads_the_matching_comparison_entry() {
        let comparison = Comparison {
            people_benefited: Some(2.27),
            wages_paid: Some(-1.4),
            ..Default::default()
        };
        assert_eq!(Metric::PeopleBenefited.change_in(&comparison), Some(2.27));
        assert_eq!(Metric::WagesPaid.change_in(&comparison), Some(-1.4));
        assert_eq!(Metric::WorkdaysCreated.change_in(&comparison), None);
    }
}
