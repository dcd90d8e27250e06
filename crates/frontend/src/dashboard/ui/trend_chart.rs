//! SVG line chart of one metric across the trend window.

use crate::shared::number_format::format_compact;
use contracts::metrics::Metric;
use contracts::snapshot::TrendPoint;
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PAD_X: f64 = 48.0;
const PAD_Y: f64 = 28.0;

#[component]
pub fn TrendChart(
    /// Points in chronological order, as returned by the backend.
    trends: Vec<TrendPoint>,
    /// Metric currently charted; switching re-plots the same points.
    #[prop(into)]
    metric: Signal<Metric>,
) -> impl IntoView {
    view! {
        <div class="card trend-chart">
            <h2 class="trend-chart__title">
                {move || format!("6-Month Trend: {}", metric.get().label())}
            </h2>
            {move || {
                let metric = metric.get();
                let values: Vec<f64> = trends.iter().map(|p| metric.value_at(p)).collect();
                if values.is_empty() {
                    return view! {
                        <div class="trend-chart__empty">"No trend data available"</div>
                    }
                    .into_any();
                }

                let points = chart_points(&values, WIDTH, HEIGHT, PAD_X, PAD_Y);
                let path = points
                    .iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

                let ticks = if max > min {
                    (0..4)
                        .map(|i| {
                            let f = i as f64 / 3.0;
                            let value = min + f * (max - min);
                            let y = PAD_Y + (HEIGHT - 2.0 * PAD_Y) * (1.0 - f);
                            view! {
                                <g>
                                    <line
                                        x1=format!("{}", PAD_X)
                                        y1=format!("{:.1}", y)
                                        x2=format!("{}", WIDTH - PAD_X)
                                        y2=format!("{:.1}", y)
                                        class="trend-chart__grid"
                                    />
                                    <text
                                        x=format!("{}", PAD_X - 8.0)
                                        y=format!("{:.1}", y + 4.0)
                                        class="trend-chart__tick"
                                        text-anchor="end"
                                    >
                                        {value_label(metric, value)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                        .into_any()
                } else {
                    let y = HEIGHT / 2.0;
                    view! {
                        <g>
                            <line
                                x1=format!("{}", PAD_X)
                                y1=format!("{:.1}", y)
                                x2=format!("{}", WIDTH - PAD_X)
                                y2=format!("{:.1}", y)
                                class="trend-chart__grid"
                            />
                            <text
                                x=format!("{}", PAD_X - 8.0)
                                y=format!("{:.1}", y + 4.0)
                                class="trend-chart__tick"
                                text-anchor="end"
                            >
                                {value_label(metric, max)}
                            </text>
                        </g>
                    }
                    .into_any()
                };

                let dots = points
                    .iter()
                    .zip(trends.iter())
                    .map(|(&(x, y), point)| {
                        let tooltip =
                            format!("{}: {}", point.month_year, value_label(metric, metric.value_at(point)));
                        view! {
                            <circle
                                cx=format!("{:.1}", x)
                                cy=format!("{:.1}", y)
                                r="4"
                                fill=metric.color()
                                stroke="#ffffff"
                                stroke-width="1.5"
                            >
                                <title>{tooltip}</title>
                            </circle>
                        }
                    })
                    .collect_view();

                let month_labels = points
                    .iter()
                    .zip(trends.iter())
                    .map(|(&(x, _), point)| {
                        view! {
                            <text
                                x=format!("{:.1}", x)
                                y=format!("{}", HEIGHT - 8.0)
                                class="trend-chart__label"
                                text-anchor="middle"
                            >
                                {point.month_year.clone()}
                            </text>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        class="trend-chart__plot"
                        viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                        role="img"
                    >
                        {ticks}
                        <polyline
                            points=path
                            fill="none"
                            stroke=metric.color()
                            stroke-width="3"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                        {dots}
                        {month_labels}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

fn value_label(metric: Metric, value: f64) -> String {
    if metric.is_percent() {
        format!("{:.1}%", value)
    } else {
        format_compact(value)
    }
}

/// Maps a series onto plot coordinates, left to right, higher value means
/// higher point. A flat or single-point series centres vertically instead
/// of dividing by a zero range.
fn chart_points(values: &[f64], width: f64, height: f64, pad_x: f64, pad_y: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span_x = width - 2.0 * pad_x;
    let span_y = height - 2.0 * pad_y;
    let step = if values.len() > 1 {
        span_x / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() > 1 {
                pad_x + step * i as f64
            } else {
                width / 2.0
            };
            let y = if max > min {
                pad_y + span_y * (1.0 - (value - min) / (max - min))
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_points() {
        assert!(chart_points(&[], WIDTH, HEIGHT, PAD_X, PAD_Y).is_empty());
    }

    #[test]
    fn single_point_is_centred() {
        let points = chart_points(&[42.0], WIDTH, HEIGHT, PAD_X, PAD_Y);
        assert_eq!(points, vec![(WIDTH / 2.0, HEIGHT / 2.0)]);
    }

    #[test]
    fn points_run_left_to_right_across_the_plot_area() {
        let points = chart_points(&[1.0, 2.0, 3.0, 4.0], WIDTH, HEIGHT, PAD_X, PAD_Y);
        assert_eq!(points.first().map(|p| p.0), Some(PAD_X));
        assert_eq!(points.last().map(|p| p.0), Some(WIDTH - PAD_X));
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn higher_values_plot_higher() {
        // SVG y grows downward, so a rising series has falling y.
        let points = chart_points(&[10.0, 20.0, 30.0], WIDTH, HEIGHT, PAD_X, PAD_Y);
        assert!(points.windows(2).all(|w| w[0].1 > w[1].1));
        assert_eq!(points[0].1, HEIGHT - PAD_Y);
        assert_eq!(points[2].1, PAD_Y);
    }

    #[test]
    fn flat_series_centres_vertically() {
        let points = chart_points(&[5.0, 5.0, 5.0], WIDTH, HEIGHT, PAD_X, PAD_Y);
        assert!(points.iter().all(|&(_, y)| y == HEIGHT / 2.0));
    }

    #[test]
    fn axis_labels_follow_the_metric_kind() {
        assert_eq!(value_label(Metric::PaymentsOnTimePercent, 92.5), "92.5%");
        assert_eq!(value_label(Metric::WagesPaid, 158_400_000.0), "15.84Cr");
        assert_eq!(value_label(Metric::PeopleBenefited, 45_000.0), "45.0K");
    }
}
