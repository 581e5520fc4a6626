use dioxus::prelude::*;

use remate_common::dashboard::ConsumerOverview;
use remate_common::identity::Role;

use super::app::Route;
use super::impact_view::ImpactCards;
use super::listing_card::status_class;
use super::session_state::use_session;
use super::shared_state::use_shared_state;

#[component]
pub fn ConsumerDashboardView() -> Element {
    let session = use_session();
    let shared_state = use_shared_state();
    let nav = use_navigator();

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };

    let shared = shared_state.read();
    let overview = ConsumerOverview::build(&shared.store, &user);
    let impact = overview.impact.clone();
    let active_count = overview.active_count;
    let total_views = overview.total_views;
    let chat_count = overview.conversations.len();
    // (title, status) of the sidebar preview
    let preview: Vec<_> = overview
        .preview()
        .iter()
        .map(|l| (l.id.0.clone(), l.title.clone(), l.status))
        .collect();
    drop(shared);

    rsx! {
        div { class: "consumer-dashboard",
            div { class: "dashboard-header",
                h2 { "Welcome back, {user.name}" }
                p { "Track your listings and sustainability impact" }
                button {
                    onclick: move |_| { nav.push(Route::ConsumerUpload {}); },
                    "Upload Component"
                }
            }
            ImpactCards { impact, role: Role::Consumer }
            div { class: "stats-row",
                div { class: "stat",
                    p { class: "stat-value", "{active_count}" }
                    p { "Active Listings" }
                }
                div { class: "stat",
                    p { class: "stat-value", "{total_views}" }
                    p { "Total Views" }
                }
                div { class: "stat",
                    p { class: "stat-value", "{chat_count}" }
                    p { "Conversations" }
                }
            }
            div { class: "sidebar",
                div { class: "quick-actions",
                    h3 { "Quick Actions" }
                    button {
                        onclick: move |_| { nav.push(Route::ConsumerUpload {}); },
                        "Upload New Component"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::ConsumerListings {}); },
                        "View My Listings"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Chat {}); },
                        "Messages"
                    }
                }
                div { class: "my-components",
                    h3 { "My Components" }
                    if preview.is_empty() {
                        p { class: "empty-state", "No components uploaded yet" }
                    } else {
                        for (id, title, status) in preview {
                            div { class: "component-row", key: "{id}",
                                span { "{title}" }
                                span { class: status_class(status), "{status}" }
                            }
                        }
                    }
                    button {
                        onclick: move |_| { nav.push(Route::ConsumerListings {}); },
                        "View All"
                    }
                }
            }
        }
    }
}
