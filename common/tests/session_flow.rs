use std::collections::HashSet;

use chrono::{NaiveDate, TimeZone, Utc};

use remate_common::config::AppConfig;
use remate_common::filter;
use remate_common::identity::{Identity, Role, UserId};
use remate_common::ids::{Clock, FixedClock};
use remate_common::listing::{Condition, ListingId, ListingStatus};
use remate_common::route::{self, AppRoute, Resolution};
use remate_common::session::{MemoryStorage, SessionManager, SignupRequest};
use remate_common::store::FixtureStore;
use remate_common::upload::{ListingDraft, SubmitState};

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap())
}

fn signup_request(name: &str, email: &str, role: Role) -> SignupRequest {
    SignupRequest {
        name: name.into(),
        email: email.into(),
        password: "pw".into(),
        role,
        location: None,
    }
}

#[test]
fn login_matches_email_and_role() {
    let mut store = FixtureStore::new();
    store.insert_user(Identity {
        id: UserId::new("c1"),
        name: "A".into(),
        email: "a@x.com".into(),
        role: Role::Consumer,
        location: None,
        verified: None,
    });
    let mut session = SessionManager::new(MemoryStorage::new());

    assert!(session.login(&store, "a@x.com", "anything", Role::Consumer));
    assert_eq!(session.current(), store.user(&UserId::new("c1")));

    let mut other = SessionManager::new(MemoryStorage::new());
    assert!(!other.login(&store, "a@x.com", "anything", Role::Business));
    assert!(other.current().is_none());
}

#[test]
fn back_to_back_signups_get_distinct_ids() {
    let mut store = FixtureStore::seed();
    let mut session = SessionManager::new(MemoryStorage::new());
    let now = clock().now();
    let prior: HashSet<UserId> = store.users().iter().map(|u| u.id.clone()).collect();

    let mut minted = Vec::new();
    for _ in 0..2 {
        assert!(session.signup(
            &mut store,
            signup_request("New User", "n@x.com", Role::Business),
            now,
        ));
        let current = session.current().unwrap().clone();
        assert!(!prior.contains(&current.id));
        minted.push(current.id);
    }
    assert_ne!(minted[0], minted[1]);
    assert_eq!(store.users().len(), prior.len() + 2);
}

#[test]
fn logout_then_restore_is_logged_out() {
    let mut store = FixtureStore::seed();
    let mut session = SessionManager::new(MemoryStorage::new());
    session.signup(
        &mut store,
        signup_request("Sam", "sam@x.com", Role::Consumer),
        clock().now(),
    );

    // A reload before logout brings the user back.
    let storage = session.into_storage();
    let mut reloaded = SessionManager::new(storage);
    assert_eq!(reloaded.restore().unwrap().map(|u| u.name.as_str()), Some("Sam"));

    reloaded.logout();
    let mut fresh = SessionManager::new(reloaded.into_storage());
    assert!(fresh.restore().unwrap().is_none());
}

#[test]
fn uploaded_listing_shows_up_first_for_its_owner() {
    let mut store = FixtureStore::seed();
    let mut session = SessionManager::new(MemoryStorage::new());
    assert!(session.login(&store, "priya.sharma@outlook.com", "", Role::Consumer));
    let owner = session.current().cloned().unwrap();
    let config = AppConfig::default();

    let draft = ListingDraft {
        title: "Seagate 1TB HDD".into(),
        description: "Pulled from a desktop".into(),
        category: "Hard Drive".into(),
        condition: Some(Condition::Good),
        location: "Bengaluru, KA".into(),
        images: Vec::new(),
    };
    let state = SubmitState::for_draft(&draft).begin_submit().unwrap();
    let id = ListingId(store.next_id('l', clock().now()));
    let listing = draft
        .build(id.clone(), &owner, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(), &config)
        .unwrap();
    store.add_listing(listing);
    assert_eq!(state.finish().unwrap(), SubmitState::Done);

    let mine = filter::owned_by(store.listings(), &owner.id);
    assert_eq!(mine[0].id, id);
    assert_eq!(mine[0].images, vec![config.placeholder_image.clone()]);

    let active = filter::by_status(store.listings(), ListingStatus::Active);
    assert_eq!(active[0].id, id);
    assert!(store.check_invariants().is_empty());
}

#[test]
fn shell_gating_follows_session() {
    let store = FixtureStore::seed();
    let mut session = SessionManager::new(MemoryStorage::new());
    let wanted = AppRoute::parse("/business/marketplace");
    assert_eq!(
        route::resolve(wanted.clone(), session.current()),
        Resolution::Redirect(AppRoute::Login)
    );
    assert!(session.login(&store, "contact@ecoreclaim.in", "demo123", Role::Business));
    assert_eq!(
        route::resolve(wanted.clone(), session.current()),
        Resolution::Render(wanted)
    );
    assert_eq!(
        route::home(session.current().unwrap().role).path(),
        "/business/dashboard"
    );
}
