use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__badge">{icon("leaf")}</span>
                <div class="header__titles">
                    <h1 class="header__title">"Forest & Farm Commodity Atlas"</h1>
                    <p class="header__subtitle">
                        "NTFP and agro-commodity species across districts, with value chain profiles and promotion leads"
                    </p>
                </div>
            </div>
        </header>
    }
}
