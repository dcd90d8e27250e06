//! Backend calls for the dashboard data pair.

use crate::shared::api_utils::get_json;
use contracts::snapshot::{DistrictSnapshot, TrendResponse};

/// Latest monthly snapshot with the previous-month comparison.
pub async fn get_snapshot(district_code: &str) -> Result<DistrictSnapshot, String> {
    get_json(&format!("/districts/{}/snapshot", district_code)).await
}

/// Metric history for the trailing `months` months.
pub async fn get_trend(district_code: &str, months: u32) -> Result<TrendResponse, String> {
    get_json(&format!("/districts/{}/trend?months={}", district_code, months)).await
}
