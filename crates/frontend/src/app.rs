use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_species::ui::SpeciesCatalog;
use crate::domain::a002_recommendation::ui::RecommendationSection;
use crate::layout::Header;
use crate::shared::api;
use contracts::domain::Dataset;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let (dataset, set_dataset) = signal(None::<Dataset>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Single fetch on mount; everything after this runs off the in-memory dataset.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_dataset().await {
                Ok(data) => {
                    set_dataset.set(Some(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load dataset: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    view! {
        <Header />
        <main class="page-main">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="page-status">
                            <span>"Loading dataset..."</span>
                        </div>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div class="page-status page-status--error">
                            <strong>"Could not load the dataset: "</strong>
                            {err}
                        </div>
                    }
                    .into_any();
                }
                match dataset.get() {
                    Some(data) => view! {
                        <OverviewDashboard species=data.species.clone() />
                        <SpeciesCatalog species=data.species.clone() />
                        <RecommendationSection recommendations=data.recommendations.clone() />
                    }
                    .into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </main>
        <footer class="page-footer">
            <span>"Compiled from district-level value chain assessments."</span>
        </footer>
    }
}
