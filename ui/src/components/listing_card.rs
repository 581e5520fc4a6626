use dioxus::prelude::*;

use remate_common::error::Action;
use remate_common::listing::{Condition, Listing, ListingStatus};
use remate_common::store::unavailable;

use super::toast::{use_toasts, ToastState};

pub fn condition_class(condition: Condition) -> &'static str {
    match condition {
        Condition::Excellent => "badge badge-excellent",
        Condition::Good => "badge badge-good",
        Condition::Fair => "badge badge-fair",
        Condition::Poor => "badge badge-poor",
    }
}

pub fn status_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "badge badge-active",
        ListingStatus::Reserved => "badge badge-reserved",
        ListingStatus::Sold => "badge badge-sold",
    }
}

/// Run a not-yet-built action and report the refusal.
pub fn attempt(mut toasts: Signal<ToastState>, action: Action) {
    if let Err(err) = unavailable(action) {
        tracing::debug!("refused: {err}");
        toasts.write().market_error(&err);
    }
}

/// Marketplace card for one listing.
#[component]
pub fn ListingCard(listing: Listing, show_actions: bool) -> Element {
    let toasts = use_toasts();
    let thumbnail = listing.thumbnail().unwrap_or_default().to_string();
    let uploaded = listing.upload_date.format("%d %b %Y").to_string();

    rsx! {
        div { class: "listing-card",
            div { class: "listing-header",
                h3 { "{listing.title}" }
                span { class: status_class(listing.status), "{listing.status}" }
            }
            p { class: "listing-meta",
                "{listing.location} · {listing.views} views · {uploaded}"
            }
            if !thumbnail.is_empty() {
                img { src: "{thumbnail}", alt: "{listing.title}" }
            }
            p { class: "listing-description", "{listing.description}" }
            div { class: "listing-tags",
                span { class: condition_class(listing.condition), "{listing.condition}" }
                span { class: "category", "{listing.category}" }
                span { class: "classification", "{listing.classification}" }
            }
            if show_actions {
                div { class: "listing-actions",
                    button {
                        onclick: move |_| attempt(toasts, Action::ViewDetails),
                        "View Details"
                    }
                    button {
                        onclick: move |_| attempt(toasts, Action::ExpressInterest),
                        "Express Interest"
                    }
                }
            }
        }
    }
}
