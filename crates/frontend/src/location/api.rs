//! Backend calls for district discovery.

use crate::shared::api_utils::{get_json, post_json};
use contracts::district::{
    DistrictListResponse, GeolocateRequest, GeolocateResponse, StatesResponse,
};

/// Every state the backend tracks, with district counts.
pub async fn get_states() -> Result<StatesResponse, String> {
    get_json("/districts/states").await
}

/// Districts of one state.
pub async fn get_districts(state: &str) -> Result<DistrictListResponse, String> {
    get_json(&format!("/districts?state={}", urlencoding::encode(state))).await
}

/// Nearest tracked district to the given coordinates.
pub async fn geolocate(latitude: f64, longitude: f64) -> Result<GeolocateResponse, String> {
    post_json("/geolocate", &GeolocateRequest { latitude, longitude }).await
}
