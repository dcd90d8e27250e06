//! District resolution state machine.
//!
//! The selector UI drives these transitions; the machine itself never
//! touches the network or the browser, which keeps every path testable.
//! `Resolved` is terminal: handing the district to the dashboard ends the
//! flow, and only the explicit "Change District" action resets it.

use contracts::district::DistrictRef;

/// Why a resolution attempt failed. Every variant is recoverable; manual
/// selection stays available in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// The host exposes no coordinate capability.
    CapabilityUnavailable,
    /// The user declined the coordinate request.
    PermissionDenied,
    /// The backend could not match the coordinates to a district, or the
    /// lookup request itself failed.
    LookupFailed,
}

impl LocationError {
    /// Message shown in the selector's alert box.
    pub fn user_message(self) -> &'static str {
        match self {
            LocationError::CapabilityUnavailable => {
                "Geolocation is not supported by your browser."
            }
            LocationError::PermissionDenied => {
                "Please allow location access to use this feature."
            }
            LocationError::LookupFailed => {
                "Failed to find nearest district. Please try manual selection."
            }
        }
    }

    /// Whether retrying the coordinate path can possibly succeed.
    pub fn retryable(self) -> bool {
        !matches!(self, LocationError::CapabilityUnavailable)
    }
}

/// Phases of picking a district.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationFlow {
    #[default]
    Unresolved,
    ResolvingByCoordinates,
    ResolvingManually,
    Resolved(DistrictRef),
    Failed(LocationError),
}

impl LocationFlow {
    /// User pressed "Use My Location". Without the capability the flow
    /// fails immediately and no request is issued.
    pub fn request_coordinates(&self, capability_available: bool) -> LocationFlow {
        match self {
            LocationFlow::Resolved(_) => self.clone(),
            _ if capability_available => LocationFlow::ResolvingByCoordinates,
            _ => LocationFlow::Failed(LocationError::CapabilityUnavailable),
        }
    }

    /// Coordinate lookup produced a district. Ignored unless a coordinate
    /// resolution is still the active attempt: a stale completion must not
    /// override a resolution that happened in the meantime.
    pub fn coordinates_resolved(&self, district: DistrictRef) -> LocationFlow {
        match self {
            LocationFlow::ResolvingByCoordinates => LocationFlow::Resolved(district),
            _ => self.clone(),
        }
    }

    /// Coordinate lookup failed. Ignored when the coordinate attempt is no
    /// longer the active one.
    pub fn coordinates_failed(&self, error: LocationError) -> LocationFlow {
        match self {
            LocationFlow::ResolvingByCoordinates => LocationFlow::Failed(error),
            _ => self.clone(),
        }
    }

    /// User started picking state and district by hand.
    pub fn enter_manual(&self) -> LocationFlow {
        match self {
            LocationFlow::Unresolved
            | LocationFlow::Failed(_)
            | LocationFlow::ResolvingManually => LocationFlow::ResolvingManually,
            _ => self.clone(),
        }
    }

    /// Manual form submitted. Submitting with nothing selected is a no-op.
    /// A concrete selection resolves from any non-resolved phase; if a
    /// coordinate lookup is still in flight its completion becomes stale.
    pub fn submit_manual(&self, selection: Option<DistrictRef>) -> LocationFlow {
        match (self, selection) {
            (LocationFlow::Resolved(_), _) => self.clone(),
            (_, Some(district)) => LocationFlow::Resolved(district),
            (_, None) => self.clone(),
        }
    }

    /// "Change District": back to square one.
    pub fn reset(&self) -> LocationFlow {
        LocationFlow::Unresolved
    }

    /// A coordinate lookup is currently running (drives the spinner).
    pub fn is_locating(&self) -> bool {
        matches!(self, LocationFlow::ResolvingByCoordinates)
    }

    /// The error to surface, when the flow is in a failed phase.
    pub fn error(&self) -> Option<LocationError> {
        match self {
            LocationFlow::Failed(e) => Some(*e),
            _ => None,
        }
    }

    pub fn resolved(&self) -> Option<&DistrictRef> {
        match self {
            LocationFlow::Resolved(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lucknow() -> DistrictRef {
        DistrictRef {
            id: 1,
            state: "Uttar Pradesh".to_string(),
            district_name: "Lucknow".to_string(),
            district_code: "UP-LUC".to_string(),
        }
    }

    #[test]
    fn missing_capability_fails_without_a_request() {
        let flow = LocationFlow::Unresolved.request_coordinates(false);
        assert_eq!(flow, LocationFlow::Failed(LocationError::CapabilityUnavailable));
        assert!(!LocationError::CapabilityUnavailable.retryable());
    }

    #[test]
    fn coordinate_lookup_happy_path() {
        let flow = LocationFlow::Unresolved.request_coordinates(true);
        assert!(flow.is_locating());
        let flow = flow.coordinates_resolved(lucknow());
        assert_eq!(flow.resolved().map(|d| d.district_code.as_str()), Some("UP-LUC"));
    }

    #[test]
    fn permission_and_lookup_failures_surface_distinct_messages() {
        let denied = LocationFlow::ResolvingByCoordinates
            .coordinates_failed(LocationError::PermissionDenied);
        let missed = LocationFlow::ResolvingByCoordinates
            .coordinates_failed(LocationError::LookupFailed);
        assert_ne!(
            denied.error().unwrap().user_message(),
            missed.error().unwrap().user_message()
        );
        assert!(denied.error().unwrap().retryable());
    }

    #[test]
    fn failed_flow_can_retry_either_path() {
        let failed = LocationFlow::Failed(LocationError::PermissionDenied);
        assert_eq!(failed.request_coordinates(true), LocationFlow::ResolvingByCoordinates);
        assert_eq!(failed.enter_manual(), LocationFlow::ResolvingManually);
    }

    #[test]
    fn manual_submit_without_a_selection_is_a_no_op() {
        let manual = LocationFlow::Unresolved.enter_manual();
        assert_eq!(manual.submit_manual(None), LocationFlow::ResolvingManually);
    }

    #[test]
    fn manual_submit_resolves_the_selected_district() {
        let flow = LocationFlow::Unresolved.enter_manual().submit_manual(Some(lucknow()));
        assert_eq!(flow.resolved().map(|d| d.district_name.as_str()), Some("Lucknow"));
    }

    #[test]
    fn stale_coordinate_completion_cannot_override_a_manual_choice() {
        // Lookup still in flight when the user submits the manual form.
        let flow = LocationFlow::Unresolved.request_coordinates(true);
        let flow = flow.submit_manual(Some(lucknow()));
        let other = DistrictRef { district_code: "UP-KAN".to_string(), ..lucknow() };
        let flow = flow.coordinates_resolved(other);
        assert_eq!(flow.resolved().map(|d| d.district_code.as_str()), Some("UP-LUC"));
        // A stale failure must not dislodge the resolution either.
        let flow = flow.coordinates_failed(LocationError::LookupFailed);
        assert!(flow.resolved().is_some());
    }

    #[test]
    fn reset_returns_to_unresolved() {
        assert_eq!(LocationFlow::Resolved(lucknow()).reset(), LocationFlow::Unresolved);
        assert_eq!(LocationFlow::Failed(LocationError::LookupFailed).reset(), LocationFlow::Unresolved);
    }
}
