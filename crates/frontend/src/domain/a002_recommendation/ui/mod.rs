use crate::shared::icons::icon;
use contracts::domain::a002_recommendation::Recommendation;
use leptos::prelude::*;

/// Static recommendation blocks, rendered once below the catalog.
///
/// `content` is author-curated markup from the dataset file and is injected
/// verbatim. Species fields never take this path; they always render as
/// escaped text.
#[component]
pub fn RecommendationSection(recommendations: Vec<Recommendation>) -> impl IntoView {
    if recommendations.is_empty() {
        return view! { <></> }.into_any();
    }

    view! {
        <section class="recommendations" id="recommendations">
            <div class="recommendations__head">
                {icon("lightbulb")}
                <h2 class="section-title">"Recommendations"</h2>
            </div>
            <div class="recommendations__grid">
                {recommendations.into_iter().map(|block| view! {
                    <article class="recommendation-card">
                        <h3 class="recommendation-card__title">{block.title}</h3>
                        <div class="recommendation-card__content" inner_html=block.content></div>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}
