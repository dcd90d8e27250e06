//! District selector: geolocation shortcut plus the state/district form.

use crate::location::api;
use crate::location::flow::{LocationError, LocationFlow};
use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;
use contracts::district::{DistrictRef, StateInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError};

#[component]
pub fn LocationSelector(
    /// Called once per resolution with the chosen district.
    on_select: Callback<DistrictRef>,
) -> impl IntoView {
    let flow = RwSignal::new(LocationFlow::Unresolved);
    let states = RwSignal::new(Vec::<StateInfo>::new());
    let districts = RwSignal::new(Vec::<DistrictRef>::new());
    let selected_state = RwSignal::new(String::new());
    let selected_code = RwSignal::new(String::new());

    // State list, once on mount.
    spawn_local(async move {
        match api::get_states().await {
            Ok(response) => states.set(response.states),
            Err(err) => log::error!("Failed to load states: {}", err),
        }
    });

    // District list follows the chosen state; changing state clears the
    // district selection.
    Effect::new(move |_| {
        let state = selected_state.get();
        districts.set(Vec::new());
        selected_code.set(String::new());
        if state.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_districts(&state).await {
                Ok(response) => districts.set(response.districts),
                Err(err) => log::error!("Failed to load districts: {}", err),
            }
        });
    });

    // Single transition point: whenever a step resolves the flow, hand the
    // district to the parent.
    let apply = move |next: LocationFlow| {
        let resolved = next.resolved().cloned();
        flow.set(next);
        if let Some(district) = resolved {
            on_select.run(district);
        }
    };

    let handle_geolocate = move |_| {
        let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
        let next = flow.get_untracked().request_coordinates(geolocation.is_some());
        let locating = next.is_locating();
        flow.set(next);
        let Some(geolocation) = geolocation else { return };
        if !locating {
            return;
        }

        let on_position = Closure::once_into_js(move |position: Position| {
            let coordinates = position.coords();
            let (latitude, longitude) = (coordinates.latitude(), coordinates.longitude());
            spawn_local(async move {
                match api::geolocate(latitude, longitude).await {
                    Ok(response) => {
                        apply(flow.get_untracked().coordinates_resolved(response.district));
                    }
                    Err(err) => {
                        log::error!("Nearest-district lookup failed: {}", err);
                        apply(flow.get_untracked().coordinates_failed(LocationError::LookupFailed));
                    }
                }
            });
        });
        let on_error = Closure::once_into_js(move |error: PositionError| {
            let cause = if error.code() == PositionError::PERMISSION_DENIED {
                LocationError::PermissionDenied
            } else {
                LocationError::LookupFailed
            };
            apply(flow.get_untracked().coordinates_failed(cause));
        });

        if geolocation
            .get_current_position_with_error_callback(
                on_position.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            )
            .is_err()
        {
            apply(flow.get_untracked().coordinates_failed(LocationError::LookupFailed));
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = selected_code.get_untracked();
        let selection = districts
            .get_untracked()
            .into_iter()
            .find(|d| d.district_code == code);
        apply(flow.get_untracked().submit_manual(selection));
    };

    let on_state_change = Callback::new(move |value: String| {
        flow.set(flow.get_untracked().enter_manual());
        selected_state.set(value);
    });
    let on_district_change = Callback::new(move |value: String| {
        flow.set(flow.get_untracked().enter_manual());
        selected_code.set(value);
    });

    let state_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Select a state".to_string())];
        options.extend(states.get().into_iter().map(|s| {
            let label = format!("{} ({} districts)", s.name, s.district_count);
            (s.name, label)
        }));
        options
    });
    let district_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Select a district".to_string())];
        options.extend(
            districts
                .get()
                .into_iter()
                .map(|d| (d.district_code, d.district_name)),
        );
        options
    });

    view! {
        <div class="selector">
            <div class="card card--accent selector__welcome">
                <h1 class="selector__title">"Our Voice, Our Rights"</h1>
                <p class="selector__lead">"MGNREGA Transparency Dashboard"</p>
                <p class="selector__note">"Track employment and wage payments in your district"</p>
            </div>

            {move || flow.get().error().map(|err| view! {
                <div class="alert alert--error" role="alert">
                    {icon("alert-circle")}
                    <p>{err.user_message()}</p>
                </div>
            })}

            <div class="card selector__panel">
                <h2 class="selector__heading">"Select Your District"</h2>

                <Button
                    class="selector__geolocate"
                    disabled=Signal::derive(move || flow.get().is_locating())
                    on_click=Callback::new(handle_geolocate)
                >
                    {move || if flow.get().is_locating() {
                        view! {
                            <span class="spinner" aria-hidden="true"></span>
                            <span>"Finding your location..."</span>
                        }.into_any()
                    } else {
                        view! {
                            {icon("navigation")}
                            <span>"Use My Location"</span>
                        }.into_any()
                    }}
                </Button>

                <div class="selector__divider">
                    <span>"Or select manually"</span>
                </div>

                <form class="selector__form" on:submit=handle_submit>
                    <Select
                        label="State"
                        id="state-select"
                        value=selected_state
                        on_change=on_state_change
                        options=state_options
                    />
                    <Select
                        label="District"
                        id="district-select"
                        value=selected_code
                        on_change=on_district_change
                        options=district_options
                        disabled=Signal::derive(move || selected_state.get().is_empty())
                    />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || {
                            selected_code.get().is_empty() || flow.get().is_locating()
                        })
                    >
                        {icon("map-pin")}
                        <span>"View Dashboard"</span>
                    </Button>
                </form>
            </div>

            <div class="selector__info-grid">
                <div class="card selector__info">
                    {icon("bar-chart-3")}
                    <h3>"Live Data"</h3>
                    <p>"Real MGNREGA statistics sourced from data.gov.in"</p>
                </div>
                <div class="card selector__info">
                    {icon("volume-2")}
                    <h3>"Audio Guide"</h3>
                    <p>"Every metric can be read aloud in Hindi"</p>
                </div>
                <div class="card selector__info">
                    {icon("smartphone")}
                    <h3>"Mobile Friendly"</h3>
                    <p>"Works on low-end devices and slow networks"</p>
                </div>
            </div>
        </div>
    }
}
