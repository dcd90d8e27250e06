use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Districts
// ---------------------------------------------------------------------------

/// One district as the backend lists it. `district_code` is the stable
/// identifier every snapshot and trend request is keyed on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistrictRef {
    pub id: i64,
    pub state: String,
    pub district_name: String,
    pub district_code: String,
}

/// State entry for the cascading selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInfo {
    pub name: String,
    /// How many districts the backend tracks in this state.
    pub district_count: u32,
}

/// `GET /api/v1/districts/states`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatesResponse {
    pub states: Vec<StateInfo>,
}

/// `GET /api/v1/districts?state=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictListResponse {
    pub districts: Vec<DistrictRef>,
    pub total: u32,
}

// ---------------------------------------------------------------------------
// Geolocation
// ---------------------------------------------------------------------------

/// `POST /api/v1/geolocate` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeolocateRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// `POST /api/v1/geolocate` response: the nearest tracked district and how
/// far away it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocateResponse {
    pub district: DistrictRef,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_list_payload_deserializes() {
        let payload = r#"{
            "districts": [
                {"id": 1, "state": "Uttar Pradesh", "district_name": "Lucknow", "district_code": "UP-LUC"},
                {"id": 2, "state": "Uttar Pradesh", "district_name": "Kanpur", "district_code": "UP-KAN"}
            ],
            "total": 2
        }"#;
        let list: DistrictListResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.districts[0].district_code, "UP-LUC");
        assert_eq!(list.districts[1].district_name, "Kanpur");
    }

    #[test]
    fn geolocate_request_serializes_coordinates() {
        let body = GeolocateRequest { latitude: 26.85, longitude: 80.95 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["latitude"], 26.85);
        assert_eq!(json["longitude"], 80.95);
    }

    #[test]
    fn geolocate_response_carries_distance() {
        let payload = r#"{
            "district": {"id": 1, "state": "Uttar Pradesh", "district_name": "Lucknow", "district_code": "UP-LUC"},
            "distance_km": 12.4
        }"#;
        let response: GeolocateResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.district.district_name, "Lucknow");
        assert!((response.distance_km - 12.4).abs() < f64::EPSILON);
    }
}
