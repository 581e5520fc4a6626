use dioxus::prelude::*;

use remate_common::dashboard::BusinessOverview;
use remate_common::exchange::ExchangeRecord;
use remate_common::identity::Role;
use remate_common::listing::Listing;

use super::app::Route;
use super::impact_view::ImpactCards;
use super::listing_card::ListingCard;
use super::session_state::use_session;
use super::shared_state::use_shared_state;

#[component]
pub fn BusinessDashboardView() -> Element {
    let session = use_session();
    let shared_state = use_shared_state();
    let nav = use_navigator();

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };

    let shared = shared_state.read();
    let overview = BusinessOverview::build(&shared.store, &user);
    let impact = overview.impact.clone();
    let recommended: Vec<Listing> = overview.recommended.iter().map(|l| (*l).clone()).collect();
    let exchanges: Vec<ExchangeRecord> = overview
        .recent_exchanges
        .iter()
        .map(|e| (*e).clone())
        .collect();
    let wishlist_preview = overview.wishlist_preview.to_vec();
    let wishlist_len = overview.wishlist_len;
    drop(shared);

    let unverified = user.verified == Some(false);

    rsx! {
        div { class: "business-dashboard",
            div { class: "dashboard-header",
                h2 { "Welcome, {user.name}" }
                p { "Source quality reused components for your operations" }
                button {
                    onclick: move |_| { nav.push(Route::BusinessMarketplace {}); },
                    "Browse Marketplace"
                }
            }
            if unverified {
                div { class: "notice",
                    "Your business account is awaiting verification."
                }
            }
            ImpactCards { impact, role: Role::Business }
            div { class: "recommended",
                h3 { "Recommended Components" }
                if recommended.is_empty() {
                    p { class: "empty-state", "No components available right now" }
                } else {
                    div { class: "listing-grid",
                        for listing in recommended {
                            ListingCard { key: "{listing.id}", listing: listing.clone(), show_actions: true }
                        }
                    }
                }
            }
            div { class: "recent-transactions",
                h3 { "Recent Transactions" }
                if exchanges.is_empty() {
                    p { class: "empty-state", "No transactions yet" }
                } else {
                    for ex in exchanges {
                        {
                            let date = ex.date.format("%d %b %Y").to_string();
                            rsx! {
                                div { class: "transaction-row", key: "{ex.id.0}",
                                    div {
                                        strong { "{ex.listing_title}" }
                                        p { "from {ex.consumer_name} · {date}" }
                                    }
                                    span { class: "amount", "{ex.amount}" }
                                    span { class: "badge", "{ex.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "sidebar",
                div { class: "quick-actions",
                    h3 { "Quick Actions" }
                    button {
                        onclick: move |_| { nav.push(Route::BusinessMarketplace {}); },
                        "Browse Marketplace"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::BusinessWishlist {}); },
                        "Manage Wishlist"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Chat {}); },
                        "Messages"
                    }
                }
                div { class: "wishlist-preview",
                    h3 { "Wishlist ({wishlist_len})" }
                    if wishlist_preview.is_empty() {
                        p { class: "empty-state", "Your wishlist is empty" }
                    } else {
                        ul {
                            for (i, item) in wishlist_preview.iter().enumerate() {
                                li { key: "{i}", "{item}" }
                            }
                        }
                    }
                    button {
                        onclick: move |_| { nav.push(Route::BusinessWishlist {}); },
                        "View Wishlist"
                    }
                }
            }
        }
    }
}
