use dioxus::prelude::*;

use remate_common::filter::{self, FilterChoice, ListingFilter, ALL};
use remate_common::fixtures::RECOMMENDED_KINDS;
use remate_common::listing::{Condition, Listing};

use super::listing_card::ListingCard;
use super::shared_state::use_shared_state;

#[component]
pub fn MarketplaceView() -> Element {
    let shared_state = use_shared_state();
    let mut listing_filter = use_signal(|| ListingFilter {
        search_description: true,
        ..ListingFilter::default()
    });

    let current = listing_filter.read().clone();
    let (visible, locations, categories) = {
        let shared = shared_state.read();
        let available = filter::marketplace(shared.store.listings());
        let visible: Vec<Listing> = available
            .into_iter()
            .filter(|l| current.matches(l))
            .cloned()
            .collect();
        let listings = shared.store.listings();
        (
            visible,
            filter::distinct_locations(listings),
            filter::distinct_categories(listings),
        )
    };
    let count = visible.len();

    rsx! {
        div { class: "marketplace",
            h2 { "Marketplace" }
            p { "Browse reusable components listed by consumers" }
            div { class: "filter-bar",
                input {
                    r#type: "text",
                    placeholder: "Search components...",
                    value: "{current.query}",
                    oninput: move |evt| listing_filter.write().query = evt.value(),
                }
                select {
                    value: "{current.location.option_value()}",
                    onchange: move |evt| {
                        if let Ok(choice) = evt.value().parse::<FilterChoice<String>>() {
                            listing_filter.write().location = choice;
                        }
                    },
                    option { value: ALL, "All Locations" }
                    for loc in locations {
                        option { key: "{loc}", value: "{loc}", "{loc}" }
                    }
                }
                select {
                    value: "{current.condition.option_value()}",
                    onchange: move |evt| {
                        if let Ok(choice) = evt.value().parse::<FilterChoice<Condition>>() {
                            listing_filter.write().condition = choice;
                        }
                    },
                    option { value: ALL, "All Conditions" }
                    for cond in Condition::all().iter() {
                        option { key: "{cond}", value: "{cond}", "{cond}" }
                    }
                }
                select {
                    value: "{current.category.option_value()}",
                    onchange: move |evt| {
                        if let Ok(choice) = evt.value().parse::<FilterChoice<String>>() {
                            listing_filter.write().category = choice;
                        }
                    },
                    option { value: ALL, "All Categories" }
                    for cat in categories {
                        option { key: "{cat}", value: "{cat}", "{cat}" }
                    }
                }
            }
            div { class: "recommended-kinds",
                span { "Recommended for you: " }
                for kind in RECOMMENDED_KINDS.iter() {
                    span { class: "chip", key: "{kind}", "{kind}" }
                }
            }
            p { class: "result-count", "{count} components available" }
            if visible.is_empty() {
                p { class: "empty-state", "No components match your filters" }
            } else {
                div { class: "listing-grid",
                    for listing in visible {
                        ListingCard { key: "{listing.id}", listing: listing.clone(), show_actions: true }
                    }
                }
            }
        }
    }
}
