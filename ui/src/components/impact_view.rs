use dioxus::prelude::*;

use remate_common::filter;
use remate_common::identity::Role;
use remate_common::impact::{
    consumer_milestones, impact_cards, progress_percent, ImpactSummary, CO2_KG_PER_EWASTE_KG,
};

use super::session_state::use_session;
use super::shared_state::use_shared_state;

/// The three headline tiles.
#[component]
pub fn ImpactCards(impact: ImpactSummary, role: Role) -> Element {
    let cards = impact_cards(&impact, role);
    rsx! {
        div { class: "impact-cards",
            for card in cards {
                div { class: "impact-card", key: "{card.title}",
                    h4 { "{card.title}" }
                    p { class: "impact-value", "{card.value}" }
                    p { class: "impact-description", "{card.description}" }
                }
            }
        }
    }
}

#[component]
pub fn ImpactView() -> Element {
    let session = use_session();
    let shared_state = use_shared_state();

    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };
    let shared = shared_state.read();
    let impact = shared.store.impact_for(&user.id);
    let listing_count = filter::owned_by(shared.store.listings(), &user.id).len();
    drop(shared);

    match user.role {
        Role::Consumer => rsx! { ConsumerImpact { impact, listing_count } },
        Role::Business => rsx! { BusinessImpact { impact } },
    }
}

#[component]
fn ConsumerImpact(impact: ImpactSummary, listing_count: usize) -> Element {
    let milestones = consumer_milestones(&impact, listing_count);
    let breakdown = [
        ("E-waste Diverted", impact.ewaste_saved_kg, 10.0),
        ("Carbon Footprint Reduced", impact.co2_reduced_kg, 7.0),
    ];

    rsx! {
        div { class: "impact-view",
            h2 { "Your Impact" }
            ImpactCards { impact: impact.clone(), role: Role::Consumer }
            div { class: "milestones",
                h3 { "Achievements" }
                for m in milestones {
                    {
                        let (class, state) = if m.achieved {
                            ("milestone achieved", "Achieved")
                        } else {
                            ("milestone", "Locked")
                        };
                        rsx! {
                            div { class: "{class}", key: "{m.title}",
                                strong { "{m.title}" }
                                p { "{m.description}" }
                                span { "{state}" }
                            }
                        }
                    }
                }
            }
            div { class: "impact-breakdown",
                h3 { "Impact Breakdown" }
                for (label, value, goal) in breakdown {
                    {
                        let percent = format!("{:.0}", progress_percent(value, goal));
                        rsx! {
                            div { class: "progress-row", key: "{label}",
                                span { "{label}: {value} / {goal} kg" }
                                progress { max: "100", value: "{percent}" }
                            }
                        }
                    }
                }
                p { class: "impact-note",
                    "Every 1kg of e-waste recycled saves approximately {CO2_KG_PER_EWASTE_KG}kg of CO₂ emissions"
                }
            }
        }
    }
}

#[component]
fn BusinessImpact(impact: ImpactSummary) -> Element {
    let components = impact.total_components.unwrap_or(0);
    rsx! {
        div { class: "impact-view",
            h2 { "Business Impact" }
            p { "Your business contribution to a sustainable future" }
            ImpactCards { impact: impact.clone(), role: Role::Business }
            div { class: "impact-summary",
                h3 { "Impact Summary" }
                p {
                    "By sourcing {components} reused components you diverted {impact.ewaste_saved_kg} kg \
                     of e-waste from landfill and avoided {impact.co2_reduced_kg} kg of CO₂ emissions."
                }
            }
        }
    }
}
