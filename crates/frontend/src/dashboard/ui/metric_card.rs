//! One metric card: compact value, month-over-month change, narration.

use crate::shared::icons::icon;
use crate::shared::number_format::{format_change, format_compact};
use crate::speech::explain::NarrationRequest;
use crate::speech::{use_speech, SPEECH_LANG};
use contracts::metrics::Metric;
use leptos::prelude::*;

#[component]
pub fn MetricCard(
    metric: Metric,
    /// Current value, already adjusted for display (whole rupees etc.).
    value: f64,
    /// Month-over-month change; `None` when there is no previous month.
    change: Option<f64>,
) -> impl IntoView {
    let speech = use_speech();
    let request = NarrationRequest::new(metric, value, change);

    let handle_narrate = move |_| {
        if speech.is_active() {
            speech.cancel();
        } else if !speech.narrate(&request.sentence(), SPEECH_LANG) {
            log::warn!("Narration unavailable for {}", metric.key());
        }
    };

    let display_value = format_compact(value);

    let change_view = change.map(|pct| {
        if pct > 0.0 {
            view! {
                <div class="metric-card__change metric-card__change--up">
                    {icon("trending-up")}
                    <span>{format_change(pct)}</span>
                </div>
            }
            .into_any()
        } else if pct < 0.0 {
            view! {
                <div class="metric-card__change metric-card__change--down">
                    {icon("trending-down")}
                    <span>{format_change(pct)}</span>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="metric-card__change metric-card__change--flat">
                    {icon("minus")}
                    <span>"No change"</span>
                </div>
            }
            .into_any()
        }
    });

    view! {
        <div class=format!("metric-card metric-card--{}", metric.accent())>
            <div class="metric-card__header">
                <div class="metric-card__icon">{icon(metric.icon())}</div>
                <button
                    class=move || {
                        if speech.is_active() {
                            "metric-card__speak metric-card__speak--active"
                        } else {
                            "metric-card__speak"
                        }
                    }
                    aria-label="Read this metric aloud"
                    on:click=handle_narrate
                >
                    {move || if speech.is_active() { icon("volume-x") } else { icon("volume-2") }}
                </button>
            </div>
            <div class="metric-card__value">
                {display_value}
                {metric.unit().map(|unit| view! { <span class="metric-card__unit">{unit}</span> })}
            </div>
            <div class="metric-card__title">{metric.label()}</div>
            {change_view}
        </div>
    }
}
