//! Per-question chart card for the analytics page.

use leptos::prelude::*;

use crate::net::types::QuestionStats;
use crate::state::analytics::{ChartKind, bar_data, pie_slices, total_count};

const PIE_SIZE: f64 = 200.0;
const PIE_RADIUS: f64 = 90.0;

/// Renders one question's tallies as a bar chart, a pie chart, or a plain
/// response total, depending on the question type.
#[component]
pub fn StatChart(stats: QuestionStats) -> impl IntoView {
    let total = total_count(&stats.stats);
    let body = match ChartKind::for_type(stats.question_type) {
        ChartKind::Bar => bar_chart(&stats).into_any(),
        ChartKind::Pie => pie_chart(&stats).into_any(),
        ChartKind::Text => view! {
            <p class="stat-chart__text-note">
                {format!("{total} text responses. Text responses cannot be visualized as charts.")}
            </p>
        }
        .into_any(),
    };

    view! {
        <div class="stat-chart">
            <div class="stat-chart__header">
                <h3 class="stat-chart__title">{stats.question.clone()}</h3>
                <span class="stat-chart__total">{format!("{total} answers")}</span>
            </div>
            {body}
        </div>
    }
}

fn bar_chart(stats: &QuestionStats) -> impl IntoView + use<> {
    let bars = bar_data(&stats.stats);
    if bars.is_empty() {
        return empty_note().into_any();
    }

    view! {
        <div class="stat-chart__bars">
            {bars
                .into_iter()
                .map(|bar| {
                    view! {
                        <div class="stat-chart__bar-col">
                            <span class="stat-chart__bar-count">{bar.count}</span>
                            <div
                                class="stat-chart__bar"
                                style=format!("height: {:.1}%", bar.height_pct)
                            ></div>
                            <span class="stat-chart__bar-label">{bar.label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn pie_chart(stats: &QuestionStats) -> impl IntoView + use<> {
    let center = PIE_SIZE / 2.0;
    let slices = pie_slices(&stats.stats, center, center, PIE_RADIUS);
    if slices.is_empty() {
        return empty_note().into_any();
    }

    let legend = slices
        .iter()
        .map(|slice| {
            view! {
                <li class="stat-chart__legend-item">
                    <span
                        class="stat-chart__legend-swatch"
                        style=format!("background-color: {}", slice.color)
                    ></span>
                    {slice.legend()}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="stat-chart__pie">
            <svg
                viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}")
                class="stat-chart__pie-svg"
            >
                {slices
                    .iter()
                    .map(|slice| view! { <path d=slice.path.clone() fill=slice.color/> })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="stat-chart__legend">{legend}</ul>
        </div>
    }
    .into_any()
}

fn empty_note() -> impl IntoView {
    view! { <p class="stat-chart__empty">"No answers recorded yet."</p> }
}
