//! Narration sentences for metric cards.
//!
//! Each metric has a fixed sentence template; when the backend supplied a
//! comparison entry, a second sentence describes the change. An absent
//! comparison and an exactly-zero one are different cases: absent means
//! "no prior month", zero means "unchanged".

use crate::shared::number_format::spoken_indian;
use contracts::metrics::Metric;

/// Spoken when an identifier outside the metric set is requested.
pub const UNKNOWN_METRIC: &str = "Metric not found.";

/// One user-initiated narration: the metric, its current value and the
/// comparison entry, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationRequest {
    pub metric: Metric,
    pub value: f64,
    pub change: Option<f64>,
}

impl NarrationRequest {
    pub fn new(metric: Metric, value: f64, change: Option<f64>) -> Self {
        Self { metric, value, change }
    }

    /// Text handed to the speech service.
    pub fn sentence(&self) -> String {
        compose(self.metric, self.value, self.change)
    }
}

/// Builds the narration text for one metric value.
pub fn compose(metric: Metric, value: f64, change: Option<f64>) -> String {
    let spoken = spoken_indian(value.max(0.0) as u64);
    let mut text = match metric {
        Metric::PeopleBenefited => format!("{} people benefited from MGNREGA work.", spoken),
        Metric::WorkdaysCreated => format!("{} workdays were created.", spoken),
        Metric::WagesPaid => format!("Wages of {} rupees were paid.", spoken),
        Metric::PaymentsOnTimePercent => {
            format!("{:.1} percent of payments were made on time.", value)
        }
        Metric::WorksCompleted => format!("{} works were completed.", spoken),
    };

    if let Some(change) = change {
        if change > 0.0 {
            text.push_str(&format!(
                " This is {:.1} percent more than the previous month.",
                change.abs()
            ));
        } else if change < 0.0 {
            text.push_str(&format!(
                " This is {:.1} percent less than the previous month.",
                change.abs()
            ));
        } else {
            text.push_str(" This is similar to the previous month.");
        }
    }

    text
}

/// String-keyed entry point for callers holding a raw identifier. Unknown
/// keys degrade to [`UNKNOWN_METRIC`] instead of failing.
pub fn compose_for_key(key: &str, value: f64, change: Option<f64>) -> String {
    match Metric::parse(key) {
        Some(metric) => compose(metric, value, change),
        None => UNKNOWN_METRIC.to_string(),
    }
}
