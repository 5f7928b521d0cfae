use crate::domain::a001_species::ui::details::SpeciesDetails;
use crate::shared::icons::icon;
use contracts::domain::a001_species::{
    filter_species, sort_for_display, FacetIndex, FilterEvent, FilterState, Linkage, Species,
};
use leptos::ev;
use leptos::prelude::*;

/// Filterable card catalog over the canonical species collection.
///
/// Owns the filter state; every control folds one `FilterEvent` into it and
/// the whole subset is recomputed from scratch on each change. Facet options
/// come from the full collection once and never narrow with the filters.
#[component]
pub fn SpeciesCatalog(species: Vec<Species>) -> impl IntoView {
    let facets = FacetIndex::build(&species);
    let species_types = distinct_species_types(&species);
    let total = species.len();
    let collection = StoredValue::new(species);

    let filter_state = RwSignal::new(FilterState::default());
    let (selected, set_selected) = signal(None::<Species>);

    let dispatch = move |event: FilterEvent| {
        filter_state.update(|state| state.apply(event));
    };

    let filtered = move || {
        let state = filter_state.get();
        collection.with_value(|all| {
            let mut subset = filter_species(all, &state);
            sort_for_display(&mut subset);
            subset.into_iter().cloned().collect::<Vec<Species>>()
        })
    };

    let FacetIndex {
        districts,
        habitats,
        parts,
    } = facets;

    view! {
        <section class="catalog" id="catalog">
            <div class="catalog__head">
                <h2 class="section-title">"Species Catalog"</h2>
                <span class="catalog__counter">
                    {move || format!("Showing {} of {} species", filtered().len(), total)}
                </span>
            </div>

            <div class="filter-panel">
                <div class="filter-panel__header">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = filter_state.get().active_count();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>

                <div class="filter-panel__row">
                    <div class="search-box">
                        {icon("search")}
                        <input
                            type="text"
                            class="search-box__input"
                            placeholder="Search name, district, product, use..."
                            on:input=move |ev| dispatch(FilterEvent::Search(event_target_value(&ev)))
                        />
                    </div>

                    <div class="filter-group">
                        <label class="filter-group__label">"District"</label>
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if value.is_empty() {
                                    dispatch(FilterEvent::District(None));
                                } else {
                                    dispatch(FilterEvent::District(Some(value)));
                                }
                            }
                        >
                            <option value="">{"All districts"}</option>
                            {districts.into_iter().map(|district| view! {
                                <option value=district.clone()>{district.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="filter-group">
                        <label class="filter-group__label">"Habitat"</label>
                        <select
                            class="form-control"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if value.is_empty() {
                                    dispatch(FilterEvent::Habitat(None));
                                } else {
                                    dispatch(FilterEvent::Habitat(Some(value)));
                                }
                            }
                        >
                            <option value="">{"All habitats"}</option>
                            {habitats.into_iter().map(|habitat| view! {
                                <option value=habitat.clone()>{habitat.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="filter-panel__row">
                    <div class="filter-group">
                        <label class="filter-group__label">"Type"</label>
                        <div class="chip-group">
                            <button
                                class=move || group_button_class(filter_state.get().species_type.is_none())
                                on:click=move |_| dispatch(FilterEvent::SpeciesType(None))
                            >
                                "All"
                            </button>
                            {species_types.into_iter().map(|species_type| {
                                let label = species_type.clone();
                                let active_value = species_type.clone();
                                view! {
                                    <button
                                        class=move || group_button_class(
                                            filter_state.get().species_type.as_deref() == Some(active_value.as_str()),
                                        )
                                        on:click=move |_| dispatch(FilterEvent::SpeciesType(Some(species_type.clone())))
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="filter-group">
                        <label class="filter-group__label">"Linkage"</label>
                        <div class="chip-group">
                            <button
                                class=move || group_button_class(filter_state.get().linkage.is_none())
                                on:click=move |_| dispatch(FilterEvent::Linkage(None))
                            >
                                "All"
                            </button>
                            {Linkage::all().into_iter().map(|linkage| view! {
                                <button
                                    class=move || group_button_class(filter_state.get().linkage == Some(linkage))
                                    on:click=move |_| dispatch(FilterEvent::Linkage(Some(linkage)))
                                >
                                    {linkage.display_name()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="filter-panel__row">
                    <div class="filter-group filter-group--wide">
                        <label class="filter-group__label">"Parts used"</label>
                        <div class="checkbox-group">
                            <label class="checkbox-item checkbox-item--reset">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filter_state.get().parts.is_empty()
                                    on:change=move |_| dispatch(FilterEvent::AllParts)
                                />
                                <span>"All parts"</span>
                            </label>
                            {parts.into_iter().map(|part| {
                                let label = part.clone();
                                let checked_name = part.clone();
                                view! {
                                    <label class="checkbox-item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || filter_state.get().parts.contains(&checked_name)
                                            on:change=move |ev| dispatch(FilterEvent::Part {
                                                name: part.clone(),
                                                selected: event_target_checked(&ev),
                                            })
                                        />
                                        <span>{label}</span>
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            {move || {
                let subset = filtered();
                if subset.is_empty() {
                    view! {
                        <div class="catalog__empty">
                            <p class="catalog__empty-title">"No species match the current filters."</p>
                            <p class="catalog__empty-hint">"Widen or clear a filter to see more of the collection."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="species-grid">
                            {subset.into_iter().map(|species| species_card(species, set_selected)).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || {
                selected.get().map(|record| view! {
                    <SpeciesDetails
                        species=record
                        on_close=Callback::new(move |_| set_selected.set(None))
                    />
                })
            }}
        </section>
    }
}

fn species_card(species: Species, set_selected: WriteSignal<Option<Species>>) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let has_image = !species.image.is_empty();
    let image = species.image.clone();
    let name = species.name.clone();
    let card_name = species.name.clone();
    let botanical = species.botanical.clone();
    let species_type = species.species_type.clone();
    let product_focus = species.product_focus.clone();
    let districts = species.districts.join(", ");
    let linkage_label = species.linkage.display_name();
    let linkage_class = format!("tag tag--{}", species.linkage.code().to_lowercase());
    let initials = species.initials();
    let keyed_species = species.clone();

    view! {
        <article
            class="species-card"
            tabindex="0"
            on:click=move |_| set_selected.set(Some(species.clone()))
            on:keydown=move |ev: ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    set_selected.set(Some(keyed_species.clone()));
                }
            }
        >
            <div class="species-card__media">
                {move || {
                    if has_image && !image_failed.get() {
                        view! {
                            <img
                                src=image.clone()
                                alt=name.clone()
                                loading="lazy"
                                on:error=move |_| image_failed.set(true)
                            />
                        }
                        .into_any()
                    } else {
                        view! { <div class="species-card__placeholder">{initials.clone()}</div> }.into_any()
                    }
                }}
                <span class=linkage_class>{linkage_label}</span>
            </div>
            <div class="species-card__body">
                <h3 class="species-card__name">{card_name}</h3>
                {if botanical.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! { <p class="species-card__botanical">{botanical}</p> }.into_any()
                }}
                <div class="species-card__chips">
                    <span class="chip">{species_type}</span>
                    <span class="chip chip--muted">{product_focus}</span>
                </div>
                {if districts.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <p class="species-card__districts">
                            {icon("map-pin")}
                            <span>{districts}</span>
                        </p>
                    }
                    .into_any()
                }}
            </div>
        </article>
    }
}

fn group_button_class(active: bool) -> &'static str {
    if active {
        "chip-button chip-button--active"
    } else {
        "chip-button"
    }
}

/// Distinct species types in first-seen dataset order, for the type buttons.
fn distinct_species_types(collection: &[Species]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for species in collection {
        if !types.iter().any(|existing| existing == &species.species_type) {
            types.push(species.species_type.clone());
        }
    }
    types
}
