//! Hand-authored seed data for the marketplace.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::chat::{ChatMessage, Conversation, ConversationId};
use crate::exchange::{ExchangeId, ExchangeRecord, ExchangeStatus};
use crate::identity::{Identity, Role, UserId};
use crate::impact::ImpactSummary;
use crate::listing::{Condition, Listing, ListingId, ListingStatus};
use crate::wishlist::Wishlist;

/// Demo credentials shown on the login page.
pub const DEMO_CONSUMER_EMAIL: &str = "aarav.mehta@gmail.com";
pub const DEMO_BUSINESS_EMAIL: &str = "contact@ecoreclaim.in";
pub const DEMO_PASSWORD: &str = "demo123";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn user(id: &str, name: &str, email: &str, role: Role, location: &str) -> Identity {
    Identity {
        id: UserId::new(id),
        name: name.into(),
        email: email.into(),
        role,
        location: Some(location.into()),
        verified: match role {
            Role::Consumer => None,
            Role::Business => Some(true),
        },
    }
}

pub fn users() -> Vec<Identity> {
    vec![
        user("c123", "Aarav Mehta", DEMO_CONSUMER_EMAIL, Role::Consumer, "Mumbai, MH"),
        user(
            "c124",
            "Priya Sharma",
            "priya.sharma@outlook.com",
            Role::Consumer,
            "Bengaluru, KA",
        ),
        user(
            "b789",
            "EcoReclaim Pvt Ltd",
            DEMO_BUSINESS_EMAIL,
            Role::Business,
            "Delhi, DL",
        ),
        user(
            "b790",
            "GreenLoop Recycling",
            "support@greenloop.in",
            Role::Business,
            "Hyderabad, TS",
        ),
    ]
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId("l001".into()),
            title: "Samsung Galaxy S20 Motherboard".into(),
            description: "Motherboard pulled from a Galaxy S20. Phone had display issues, \
                          but the board is still in working condition. Good for repairs."
                .into(),
            condition: Condition::Good,
            location: "Mumbai, MH".into(),
            images: vec!["/placeholder.svg".into()],
            category: "Motherboard".into(),
            classification: "Motherboard - 80% reusable components".into(),
            upload_date: date(2025, 9, 20),
            views: 12,
            status: ListingStatus::Active,
            owner_id: UserId::new("c123"),
            owner_name: "Aarav Mehta".into(),
        },
        Listing {
            id: ListingId("l002".into()),
            title: "Samsung DDR4 RAM 8GB (x2)".into(),
            description: "Two Samsung DDR4 8GB RAM sticks. Removed during a laptop upgrade. \
                          Still in excellent condition."
                .into(),
            condition: Condition::Excellent,
            location: "Bengaluru, KA".into(),
            images: vec!["/placeholder.svg".into()],
            category: "Memory".into(),
            classification: "RAM - 90% reusable".into(),
            upload_date: date(2025, 9, 18),
            views: 8,
            status: ListingStatus::Active,
            owner_id: UserId::new("c124"),
            owner_name: "Priya Sharma".into(),
        },
        Listing {
            id: ListingId("l003".into()),
            title: "Samsung Galaxy Note 10 Logic Board".into(),
            description: "Logic board from a Note 10. Battery was swollen and damaged the \
                          phone, but board is intact. Can be used for spares."
                .into(),
            condition: Condition::Fair,
            location: "Delhi, DL".into(),
            images: vec!["/placeholder.svg".into()],
            category: "Logic Board".into(),
            classification: "Logic Board - 70% reusable components".into(),
            upload_date: date(2025, 9, 15),
            views: 15,
            status: ListingStatus::Reserved,
            owner_id: UserId::new("c123"),
            owner_name: "Aarav Mehta".into(),
        },
    ]
}

pub fn exchanges() -> Vec<ExchangeRecord> {
    vec![ExchangeRecord {
        id: ExchangeId("t101".into()),
        listing_id: ListingId("l003".into()),
        listing_title: "Samsung Galaxy Note 10 Logic Board".into(),
        consumer_id: UserId::new("c123"),
        consumer_name: "Aarav Mehta".into(),
        business_id: UserId::new("b789"),
        business_name: "EcoReclaim Pvt Ltd".into(),
        status: ExchangeStatus::Completed,
        date: date(2025, 9, 22),
        amount: "₹4,500".into(),
        receipt: Some("receipt_t101.pdf".into()),
    }]
}

pub fn conversations() -> Vec<Conversation> {
    let consumer = UserId::new("c123");
    let business = UserId::new("b789");
    let msg = |id: &str, from: &UserId, name: &str, text: &str, sent_at| ChatMessage {
        id: id.into(),
        sender_id: from.clone(),
        sender_name: name.into(),
        text: text.into(),
        sent_at,
    };
    let last = "Pickup works. Can we schedule it for Sunday afternoon, say around 2 PM?";
    vec![Conversation {
        id: ConversationId("ch001".into()),
        participants: vec![consumer.clone(), business.clone()],
        participant_names: vec!["Aarav Mehta".into(), "EcoReclaim Pvt Ltd".into()],
        messages: vec![
            msg(
                "m001",
                &business,
                "EcoReclaim Pvt Ltd",
                "Hello Aarav, I saw your listing for the Samsung Galaxy Note 10 Logic Board. \
                 Is it still available?",
                at(2025, 9, 20, 14, 32),
            ),
            msg(
                "m002",
                &consumer,
                "Aarav Mehta",
                "Hi! Yes, it's available. Do you want me to ship it or would you prefer a \
                 local pickup in Mumbai?",
                at(2025, 9, 20, 14, 35),
            ),
            msg(
                "m003",
                &business,
                "EcoReclaim Pvt Ltd",
                last,
                at(2025, 9, 20, 14, 38),
            ),
        ],
        last_message: last.into(),
        last_message_at: Some(at(2025, 9, 20, 14, 38)),
    }]
}

pub fn impact() -> HashMap<UserId, ImpactSummary> {
    let entry = |id: &str, ewaste, co2, reuses, total| {
        (
            UserId::new(id),
            ImpactSummary {
                ewaste_saved_kg: ewaste,
                co2_reduced_kg: co2,
                successful_reuses: reuses,
                total_components: total,
            },
        )
    };
    HashMap::from([
        entry("c123", 3.6, 2.4, 2, None),
        entry("c124", 2.1, 1.5, 1, None),
        entry("b789", 14.2, 9.5, 3, Some(18)),
        entry("b790", 9.8, 6.7, 2, Some(12)),
    ])
}

pub fn wishlists() -> HashMap<UserId, Wishlist> {
    let entry = |id: &str, items: [&str; 3]| {
        (
            UserId::new(id),
            Wishlist::new(items.iter().map(|s| s.to_string()).collect()),
        )
    };
    HashMap::from([
        entry(
            "b789",
            ["Samsung Display Panels", "DDR4 RAM Modules", "Logic Boards"],
        ),
        entry(
            "b790",
            ["Laptop Motherboards", "SSD Drives", "Power Supply Units"],
        ),
    ])
}

/// Suggested component kinds shown on the marketplace page.
pub const RECOMMENDED_KINDS: &[&str] = &["Motherboards", "RAM Modules", "Logic Boards"];
