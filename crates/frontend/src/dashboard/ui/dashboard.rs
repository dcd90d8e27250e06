//! Dashboard page: masthead, metric cards, trend chart.

use crate::dashboard::api;
use crate::dashboard::load::{settle, DashboardData, GenerationCounter, LoadPhase, DEFAULT_TREND_MONTHS};
use crate::dashboard::ui::{MetricCard, TrendChart};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::district::DistrictRef;
use contracts::metrics::Metric;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Dashboard(
    /// District whose numbers are shown; swapping it restarts the load.
    #[prop(into)]
    district: Signal<DistrictRef>,
    /// "Change District" action.
    on_back: Callback<()>,
) -> impl IntoView {
    let phase = RwSignal::new(LoadPhase::Loading);
    let selected_metric = RwSignal::new(Metric::PeopleBenefited);
    let generation = StoredValue::new(GenerationCounter::default());
    let reload_tick = RwSignal::new(0u32);

    Effect::new(move |_| {
        let district = district.get();
        let _ = reload_tick.get();
        if district.district_code.is_empty() {
            return;
        }

        let mut ticket = 0;
        generation.update_value(|counter| ticket = counter.begin());
        phase.set(LoadPhase::Loading);

        spawn_local(async move {
            let code = district.district_code;
            let (snapshot, trend) = futures::join!(
                api::get_snapshot(&code),
                api::get_trend(&code, DEFAULT_TREND_MONTHS),
            );
            let settled = settle(snapshot, trend);
            if !generation.with_value(|counter| counter.is_current(ticket)) {
                log::debug!("Dropping stale dashboard load for {}", code);
                return;
            }
            if let LoadPhase::Failed(cause) = &settled {
                log::error!("Dashboard load failed for {}: {}", code, cause);
            }
            phase.set(settled);
        });
    });

    let retry = Callback::new(move |_: ()| reload_tick.update(|t| *t += 1));

    view! {
        <div class="dashboard">
            {move || match phase.get() {
                LoadPhase::Loading => loading_view().into_any(),
                LoadPhase::Failed(_) => failed_view(retry).into_any(),
                LoadPhase::Ready(data) => view! {
                    <DashboardContent data=data selected_metric=selected_metric on_back=on_back />
                }
                .into_any(),
            }}
        </div>
    }
}

fn loading_view() -> impl IntoView {
    view! {
        <div class="dashboard__status">
            <div class="dashboard__spinner" aria-hidden="true">{icon("refresh-cw")}</div>
            <p>"Loading dashboard..."</p>
        </div>
    }
}

/// The cause is already logged; users get one recoverable message.
fn failed_view(retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="dashboard__status dashboard__status--error" role="alert">
            {icon("alert-circle")}
            <p>"Failed to load dashboard data"</p>
            <Button on_click=Callback::new(move |_| retry.run(()))>
                {icon("refresh-cw")}
                <span>"Retry"</span>
            </Button>
        </div>
    }
}

#[component]
fn DashboardContent(
    data: DashboardData,
    selected_metric: RwSignal<Metric>,
    on_back: Callback<()>,
) -> impl IntoView {
    let district = data.snapshot.district.clone();
    let current = data.snapshot.current.clone();
    let comparison = data.snapshot.comparison.clone();
    let period = month_label(current.month, current.year);

    view! {
        <div class="dashboard__content">
            <div class="card dashboard__masthead">
                <div class="dashboard__masthead-row">
                    <button class="dashboard__back" on:click=move |_| on_back.run(())>
                        {icon("arrow-left")}
                        <span>"Change District"</span>
                    </button>
                    <div class="dashboard__period">
                        {icon("calendar")}
                        <span>{period}</span>
                    </div>
                </div>
                <h1 class="dashboard__district">{district.district_name.clone()}</h1>
                <p class="dashboard__state">{district.state.clone()}</p>
            </div>

            <div class="dashboard__grid">
                {Metric::ALL
                    .iter()
                    .map(|&metric| {
                        view! {
                            <MetricCard
                                metric=metric
                                value=metric.card_value(&current)
                                change=metric.change_in(&comparison)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card chart-picker">
                <h2 class="chart-picker__title">"Select Metric for Trend Chart"</h2>
                <div class="chart-picker__buttons">
                    {Metric::CHARTABLE
                        .iter()
                        .map(|&metric| {
                            view! {
                                <button
                                    class=move || {
                                        let active = if selected_metric.get() == metric {
                                            " is-active"
                                        } else {
                                            ""
                                        };
                                        format!("chart-picker__button chart-picker__button--{}{}", metric.accent(), active)
                                    }
                                    on:click=move |_| selected_metric.set(metric)
                                >
                                    {metric.short_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <TrendChart trends=data.trends metric=selected_metric />

            <div class="card card--accent dashboard__about">
                <h3>"About MGNREGA"</h3>
                <p>
                    "The Mahatma Gandhi National Rural Employment Guarantee Act guarantees "
                    "100 days of wage employment per year to every rural household. This "
                    "dashboard tracks how the scheme performs in your district: how many "
                    "people found work, the workdays and wages generated, how promptly "
                    "wages were paid and how many works were completed."
                </p>
            </div>
        </div>
    }
}

/// "January 2025" from a snapshot's month and year.
fn month_label(month: u32, year: i32) -> String {
    match chrono::Month::try_from(month as u8) {
        Ok(m) => format!("{} {}", m.name(), year),
        Err(_) => format!("{} {}", month, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_names_the_month() {
        assert_eq!(month_label(1, 2025), "January 2025");
        assert_eq!(month_label(12, 2024), "December 2024");
    }

    #[test]
    fn month_label_degrades_on_out_of_range_input() {
        assert_eq!(month_label(0, 2025), "0 2025");
        assert_eq!(month_label(13, 2025), "13 2025");
    }
}
