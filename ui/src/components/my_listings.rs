use dioxus::prelude::*;

use remate_common::error::Action;
use remate_common::filter::{self, FilterChoice, ListingFilter, ALL};
use remate_common::listing::{Listing, ListingStatus};

use super::app::Route;
use super::listing_card::{attempt, condition_class, status_class};
use super::session_state::use_session;
use super::shared_state::use_shared_state;
use super::toast::use_toasts;

/// The signed-in consumer's own listings with title search and status filter.
#[component]
pub fn MyListings() -> Element {
    let session = use_session();
    let shared_state = use_shared_state();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut listing_filter = use_signal(ListingFilter::default);

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };

    let current = listing_filter.read().clone();
    let visible: Vec<Listing> = {
        let shared = shared_state.read();
        filter::owned_by(shared.store.listings(), &user.id)
            .into_iter()
            .filter(|l| current.matches(l))
            .cloned()
            .collect()
    };
    let status_value = current.status.option_value();

    rsx! {
        div { class: "my-listings",
            div { class: "listings-header",
                h2 { "My Listings" }
                button {
                    onclick: move |_| { nav.push(Route::ConsumerUpload {}); },
                    "Upload Component"
                }
            }
            div { class: "filter-bar",
                input {
                    r#type: "text",
                    placeholder: "Search your listings...",
                    value: "{current.query}",
                    oninput: move |evt| listing_filter.write().query = evt.value(),
                }
                select {
                    value: "{status_value}",
                    onchange: move |evt| {
                        if let Ok(choice) = evt.value().parse::<FilterChoice<ListingStatus>>() {
                            listing_filter.write().status = choice;
                        }
                    },
                    option { value: ALL, "All Status" }
                    for st in ListingStatus::all().iter() {
                        option { key: "{st}", value: "{st}", "{st}" }
                    }
                }
            }
            if visible.is_empty() {
                div { class: "empty-state",
                    p { "No listings found" }
                    button {
                        onclick: move |_| { nav.push(Route::ConsumerUpload {}); },
                        "Upload your first component"
                    }
                }
            } else {
                div { class: "listing-rows",
                    for listing in visible {
                        div { class: "listing-row", key: "{listing.id}",
                            div { class: "listing-info",
                                h3 { "{listing.title}" }
                                p { "{listing.description}" }
                                span { class: condition_class(listing.condition), "{listing.condition}" }
                                span { class: status_class(listing.status), "{listing.status}" }
                                span { class: "views", "{listing.views} views" }
                            }
                            div { class: "listing-actions",
                                button {
                                    onclick: move |_| attempt(toasts, Action::EditListing),
                                    "Edit"
                                }
                                button {
                                    class: "danger",
                                    onclick: move |_| attempt(toasts, Action::DeleteListing),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
