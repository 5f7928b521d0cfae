use crate::shared::icons::icon;
use contracts::domain::a001_species::Species;
use leptos::ev;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use web_sys::window;

/// Modal detail view for one species record. Closes on the header button,
/// a click on the overlay, or Escape.
#[component]
pub fn SpeciesDetails(species: Species, on_close: Callback<()>) -> impl IntoView {
    // Unregistered with the component's reactive owner, so Escape stops
    // firing once the modal is gone.
    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    // Suspend page scrolling while the overlay is up.
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("modal-open");
    }
    on_cleanup(move || {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().remove_1("modal-open");
        }
    });

    let handle_overlay_click = move |_| on_close.run(());
    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();
    let handle_close = move |_| on_close.run(());

    let image_failed = RwSignal::new(false);
    let has_image = !species.image.is_empty();
    let image = species.image.clone();
    let name = species.name.clone();
    let alt_name = species.name.clone();
    let initials = species.initials();
    let botanical = species.botanical.clone();
    let species_type = species.species_type.clone();
    let product_focus = species.product_focus.clone();
    let linkage_label = species.linkage.display_name();
    let linkage_class = format!("tag tag--{}", species.linkage.code().to_lowercase());
    let habitat = if species.habitat.is_empty() {
        "Not specified".to_string()
    } else {
        species.habitat.clone()
    };
    let strength = species.strength.clone();
    let justification = species.justification.clone();

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal species-details" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{name}</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    <div class="species-details__media">
                        {move || {
                            if has_image && !image_failed.get() {
                                view! {
                                    <img
                                        src=image.clone()
                                        alt=alt_name.clone()
                                        on:error=move |_| image_failed.set(true)
                                    />
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="species-details__placeholder">{initials.clone()}</div>
                                }
                                .into_any()
                            }
                        }}
                    </div>

                    {if botanical.is_empty() {
                        view! { <></> }.into_any()
                    } else {
                        view! { <p class="species-details__botanical">{botanical}</p> }.into_any()
                    }}

                    <div class="species-details__chips">
                        <span class="chip">{species_type}</span>
                        <span class="chip chip--muted">{product_focus}</span>
                        <span class=linkage_class>{linkage_label}</span>
                    </div>

                    <div class="details-grid">
                        {detail_row("Habitat", habitat)}
                        {detail_row("Conservation", species.conservation.clone())}
                        {detail_row("Volume potential", species.volume.clone())}
                        {detail_row("Commercial value", species.commercial_value.clone())}
                    </div>

                    {chip_row("Districts", species.districts.clone())}
                    {chip_row("Parts used", species.parts_used.clone())}
                    {chip_row("Products", species.products.clone())}

                    {narrative_block("Market strength", strength)}
                    {narrative_block("Why promote it", justification)}
                </div>
            </div>
        </div>
    }
}

/// Labelled chip list; empty lists render nothing.
fn chip_row(label: &'static str, values: Vec<String>) -> AnyView {
    if values.is_empty() {
        return view! { <></> }.into_any();
    }
    view! {
        <div class="details-field details-field--wide">
            <span class="details-field__label">{label}</span>
            <div class="details-field__chips">
                {values
                    .into_iter()
                    .map(|value| view! { <span class="chip chip--muted">{value}</span> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// One label/value row; blank values render nothing.
fn detail_row(label: &'static str, value: String) -> AnyView {
    if value.is_empty() {
        return view! { <></> }.into_any();
    }
    view! {
        <div class="details-field">
            <span class="details-field__label">{label}</span>
            <span class="details-field__value">{value}</span>
        </div>
    }
    .into_any()
}

fn narrative_block(title: &'static str, text: String) -> AnyView {
    if text.is_empty() {
        return view! { <></> }.into_any();
    }
    view! {
        <div class="details-note">
            <h4 class="details-note__title">{title}</h4>
            <p class="details-note__text">{text}</p>
        </div>
    }
    .into_any()
}
