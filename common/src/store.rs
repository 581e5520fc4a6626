use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::chat::{ChatMessage, Conversation, ConversationId};
use crate::error::{Action, MarketError, Result};
use crate::exchange::ExchangeRecord;
use crate::fixtures;
use crate::identity::{Identity, Role, UserId};
use crate::ids::IdGenerator;
use crate::impact::ImpactSummary;
use crate::listing::{Listing, ListingId};
use crate::wishlist::Wishlist;

/// A broken referential invariant in the store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    UnknownListingOwner { listing: ListingId, owner: UserId },
    UnknownExchangeParty { exchange: String, user: UserId },
    ExchangeRolesNotDistinct { exchange: String },
    ParticipantsMismatch { conversation: ConversationId },
}

/// In-memory repository holding everything the marketplace shows.
///
/// Nothing here is persisted; a reload starts again from [`FixtureStore::seed`].
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    users: Vec<Identity>,
    listings: Vec<Listing>,
    exchanges: Vec<ExchangeRecord>,
    conversations: Vec<Conversation>,
    impact: HashMap<UserId, ImpactSummary>,
    wishlists: HashMap<UserId, Wishlist>,
    ids: IdGenerator,
}

impl FixtureStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store loaded with the demo fixtures.
    pub fn seed() -> Self {
        Self {
            users: fixtures::users(),
            listings: fixtures::listings(),
            exchanges: fixtures::exchanges(),
            conversations: fixtures::conversations(),
            impact: fixtures::impact(),
            wishlists: fixtures::wishlists(),
            ids: IdGenerator::new(),
        }
    }

    // ---------- Users ----------

    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    pub fn user(&self, id: &UserId) -> Option<&Identity> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Exact email and role match.
    pub fn find_user(&self, email: &str, role: Role) -> Option<&Identity> {
        self.users
            .iter()
            .find(|u| u.email == email && u.role == role)
    }

    pub fn insert_user(&mut self, identity: Identity) {
        info!(id = %identity.id, role = %identity.role, "user added");
        self.users.push(identity);
    }

    /// Mint an id that no record in the store uses yet.
    pub fn next_id(&mut self, prefix: char, now: DateTime<Utc>) -> String {
        loop {
            let id = self.ids.next_id(prefix, now);
            if !self.id_in_use(&id) {
                return id;
            }
            debug!(%id, "minted id already in use, retrying");
        }
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.users.iter().any(|u| u.id.0 == id)
            || self.listings.iter().any(|l| l.id.0 == id)
            || self.exchanges.iter().any(|e| e.id.0 == id)
            || self.conversations.iter().any(|c| c.id.0 == id)
    }

    // ---------- Listings ----------

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// New listings go first so they show at the top of every view.
    pub fn add_listing(&mut self, listing: Listing) {
        info!(id = %listing.id, owner = %listing.owner_id, "listing created");
        self.listings.insert(0, listing);
    }

    // ---------- Exchanges ----------

    pub fn exchanges_for_business<'a>(
        &'a self,
        business: &UserId,
    ) -> impl Iterator<Item = &'a ExchangeRecord> + 'a {
        let business = business.clone();
        self.exchanges
            .iter()
            .filter(move |e| e.business_id == business)
    }

    // ---------- Conversations ----------

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    /// Append a message from `sender` to a conversation they take part in.
    pub fn send_message(
        &mut self,
        conversation: &ConversationId,
        sender: &Identity,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MarketError::EmptyMessage);
        }
        let idx = self
            .conversations
            .iter()
            .position(|c| &c.id == conversation)
            .ok_or_else(|| MarketError::UnknownConversation(conversation.clone()))?;
        if !self.conversations[idx].includes(&sender.id) {
            return Err(MarketError::NotParticipant);
        }
        let id = self.next_id('m', now);
        let conv = &mut self.conversations[idx];
        conv.push(ChatMessage {
            id,
            sender_id: sender.id.clone(),
            sender_name: sender.name.clone(),
            text: text.to_string(),
            sent_at: now,
        });
        debug!(conversation = %conv.id, "message sent");
        conv.messages.last().ok_or(MarketError::EmptyMessage)
    }

    // ---------- Impact & wishlists ----------

    /// Users without recorded impact read as all zeros.
    pub fn impact_for(&self, user: &UserId) -> ImpactSummary {
        self.impact.get(user).cloned().unwrap_or_default()
    }

    pub fn wishlist(&self, user: &UserId) -> &[String] {
        self.wishlists
            .get(user)
            .map(Wishlist::items)
            .unwrap_or_default()
    }

    pub fn add_wishlist_item(&mut self, user: &UserId, item: &str) -> bool {
        let added = self.wishlists.entry(user.clone()).or_default().add(item);
        if added {
            debug!(%user, item = item.trim(), "wishlist item added");
        }
        added
    }

    pub fn remove_wishlist_item(&mut self, user: &UserId, item: &str) -> bool {
        self.wishlists
            .get_mut(user)
            .is_some_and(|list| list.remove(item))
    }

    // ---------- Invariants ----------

    /// Check the referential invariants the fixtures are authored to uphold.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for listing in &self.listings {
            if self.user(&listing.owner_id).is_none() {
                violations.push(InvariantViolation::UnknownListingOwner {
                    listing: listing.id.clone(),
                    owner: listing.owner_id.clone(),
                });
            }
        }

        for exchange in &self.exchanges {
            let consumer = self.user(&exchange.consumer_id);
            let business = self.user(&exchange.business_id);
            for (party, found) in [
                (&exchange.consumer_id, consumer),
                (&exchange.business_id, business),
            ] {
                if found.is_none() {
                    violations.push(InvariantViolation::UnknownExchangeParty {
                        exchange: exchange.id.0.clone(),
                        user: party.clone(),
                    });
                }
            }
            if let (Some(c), Some(b)) = (consumer, business) {
                if c.id == b.id || c.role == b.role {
                    violations.push(InvariantViolation::ExchangeRolesNotDistinct {
                        exchange: exchange.id.0.clone(),
                    });
                }
            }
        }

        for conv in &self.conversations {
            let participants: BTreeSet<&UserId> = conv.participants.iter().collect();
            if conv.senders() != participants {
                violations.push(InvariantViolation::ParticipantsMismatch {
                    conversation: conv.id.clone(),
                });
            }
        }

        violations
    }
}

/// Outcome of an action the UI offers but the marketplace does not perform.
pub fn unavailable(action: Action) -> Result<()> {
    Err(MarketError::NotAvailable(action))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn seed_upholds_invariants() {
        assert_eq!(FixtureStore::seed().check_invariants(), Vec::new());
    }

    #[test]
    fn orphan_listing_is_reported() {
        let mut store = FixtureStore::seed();
        let mut listing = store.listings()[0].clone();
        listing.owner_id = UserId::new("ghost");
        store.add_listing(listing);
        assert!(matches!(
            store.check_invariants().as_slice(),
            [InvariantViolation::UnknownListingOwner { .. }]
        ));
    }

    #[test]
    fn add_listing_prepends() {
        let mut store = FixtureStore::seed();
        let mut listing = store.listings()[2].clone();
        listing.id = ListingId("new".into());
        store.add_listing(listing);
        assert_eq!(store.listings()[0].id.0, "new");
        assert_eq!(store.listings().len(), 4);
    }

    #[test]
    fn send_message_appends_and_updates_preview() {
        let mut store = FixtureStore::seed();
        let sender = store.user(&UserId::new("c123")).cloned().unwrap();
        let conv = ConversationId("ch001".into());
        let sent = store
            .send_message(&conv, &sender, "  Sunday is fine  ", now())
            .unwrap()
            .clone();
        assert_eq!(sent.text, "Sunday is fine");
        let thread = store.conversation(&conv).unwrap();
        assert_eq!(thread.messages.len(), 4);
        assert_eq!(thread.last_message, "Sunday is fine");
        assert!(store.check_invariants().is_empty());
    }

    #[test]
    fn send_message_rejects_outsiders_and_blanks() {
        let mut store = FixtureStore::seed();
        let outsider = store.user(&UserId::new("b790")).cloned().unwrap();
        let conv = ConversationId("ch001".into());
        assert_eq!(
            store.send_message(&conv, &outsider, "hi", now()).unwrap_err(),
            MarketError::NotParticipant
        );
        let member = store.user(&UserId::new("c123")).cloned().unwrap();
        assert_eq!(
            store.send_message(&conv, &member, "   ", now()).unwrap_err(),
            MarketError::EmptyMessage
        );
        let missing = ConversationId("nope".into());
        assert!(matches!(
            store.send_message(&missing, &member, "hi", now()),
            Err(MarketError::UnknownConversation(_))
        ));
    }

    #[test]
    fn wishlist_mutations() {
        let mut store = FixtureStore::seed();
        let business = UserId::new("b789");
        assert!(store.add_wishlist_item(&business, "Capacitors"));
        assert_eq!(store.wishlist(&business).last().unwrap(), "Capacitors");
        assert!(store.remove_wishlist_item(&business, "Logic Boards"));
        assert_eq!(store.wishlist(&business).len(), 3);

        let fresh = UserId::new("b999");
        assert!(store.wishlist(&fresh).is_empty());
        assert!(!store.remove_wishlist_item(&fresh, "x"));
        assert!(store.add_wishlist_item(&fresh, "GPUs"));
    }

    #[test]
    fn missing_impact_reads_as_zero() {
        let store = FixtureStore::seed();
        assert_eq!(store.impact_for(&UserId::new("nobody")), ImpactSummary::default());
        assert_eq!(
            store.impact_for(&UserId::new("b789")).total_components,
            Some(18)
        );
    }

    #[test]
    fn next_id_avoids_existing_ids() {
        let mut store = FixtureStore::seed();
        let a = store.next_id('l', now());
        let b = store.next_id('l', now());
        assert_ne!(a, b);
    }

    #[test]
    fn stub_actions_are_not_available() {
        assert_eq!(
            unavailable(Action::DeleteListing),
            Err(MarketError::NotAvailable(Action::DeleteListing))
        );
    }
}
