use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::{CountBucket, OverviewStats};
use contracts::domain::a001_species::Species;
use leptos::prelude::*;

/// Summary charts over the full species collection. The catalog filters
/// below never feed into these, so the buckets are computed once.
#[component]
pub fn OverviewDashboard(species: Vec<Species>) -> impl IntoView {
    let stats = OverviewStats::compute(&species);

    view! {
        <section class="overview" id="overview">
            <div class="overview__head">
                {icon("bar-chart")}
                <h2 class="section-title">"Dataset Overview"</h2>
            </div>
            <div class="overview__grid">
                {column_chart("Value chain linkage", stats.linkage_counts)}
                {row_chart("Species type", stats.species_type_counts)}
                {row_chart("Habitat spread", stats.habitat_counts)}
            </div>
        </section>
    }
}

/// Vertical bars, one per bucket, with the count above each bar and the
/// label under the baseline.
fn column_chart(title: &'static str, buckets: Vec<CountBucket>) -> impl IntoView {
    let scale = OverviewStats::scale_max(&buckets);
    let slots = buckets.len().max(1);
    let slot_width = 240 / slots;
    let bar_width = slot_width * 3 / 5;

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <svg class="chart" viewBox="0 0 240 168" role="img" aria-label=title>
                <line x1="0" y1="128" x2="240" y2="128" class="chart__axis"></line>
                {buckets
                    .into_iter()
                    .enumerate()
                    .map(|(index, bucket)| {
                        let bar_height = bucket.count * 100 / scale;
                        let x = index * slot_width + (slot_width - bar_width) / 2;
                        let y = 128 - bar_height;
                        let center = x + bar_width / 2;
                        view! {
                            <rect
                                x=x.to_string()
                                y=y.to_string()
                                width=bar_width.to_string()
                                height=bar_height.to_string()
                                rx="3"
                                class="chart__bar"
                            ></rect>
                            <text
                                x=center.to_string()
                                y=(y - 6).to_string()
                                text-anchor="middle"
                                class="chart__count"
                            >
                                {bucket.count}
                            </text>
                            <text
                                x=center.to_string()
                                y="148"
                                text-anchor="middle"
                                class="chart__label"
                            >
                                {bucket.label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Horizontal bars with right-aligned labels, scaled against the largest
/// bucket. Grows with the bucket count, so it suits open-ended facets.
fn row_chart(title: &'static str, buckets: Vec<CountBucket>) -> impl IntoView {
    let scale = OverviewStats::scale_max(&buckets);
    let height = (buckets.len() * 28 + 8).max(36);

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <svg
                class="chart"
                viewBox=format!("0 0 320 {}", height)
                role="img"
                aria-label=title
            >
                {buckets
                    .into_iter()
                    .enumerate()
                    .map(|(index, bucket)| {
                        let row_top = 8 + index * 28;
                        let baseline = row_top + 11;
                        let bar_width = bucket.count * 158 / scale;
                        view! {
                            <text
                                x="106"
                                y=baseline.to_string()
                                text-anchor="end"
                                class="chart__label"
                            >
                                {bucket.label}
                            </text>
                            <rect
                                x="114"
                                y=row_top.to_string()
                                width=bar_width.to_string()
                                height="14"
                                rx="3"
                                class="chart__bar"
                            ></rect>
                            <text
                                x=(120 + bar_width).to_string()
                                y=baseline.to_string()
                                class="chart__count"
                            >
                                {bucket.count}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
