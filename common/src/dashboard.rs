//! Summaries shown on the per-role dashboards.

use crate::chat::Conversation;
use crate::exchange::ExchangeRecord;
use crate::filter;
use crate::identity::Identity;
use crate::impact::ImpactSummary;
use crate::listing::{Listing, ListingStatus};
use crate::store::FixtureStore;

const CONSUMER_PREVIEW: usize = 3;
const RECOMMENDED: usize = 3;
const RECENT_EXCHANGES: usize = 5;
const WISHLIST_PREVIEW: usize = 4;

#[derive(Debug, Clone)]
pub struct ConsumerOverview<'a> {
    pub impact: ImpactSummary,
    pub listings: Vec<&'a Listing>,
    pub active_count: usize,
    pub total_views: u64,
    pub conversations: Vec<&'a Conversation>,
}

impl<'a> ConsumerOverview<'a> {
    pub fn build(store: &'a FixtureStore, user: &Identity) -> Self {
        let listings = filter::owned_by(store.listings(), &user.id);
        let active_count = listings
            .iter()
            .filter(|l| l.status == ListingStatus::Active)
            .count();
        let total_views = listings.iter().map(|l| u64::from(l.views)).sum();
        Self {
            impact: store.impact_for(&user.id),
            listings,
            active_count,
            total_views,
            conversations: filter::conversations_for(store.conversations(), &user.id),
        }
    }

    /// The few listings previewed in the sidebar.
    pub fn preview(&self) -> &[&'a Listing] {
        &self.listings[..CONSUMER_PREVIEW.min(self.listings.len())]
    }
}

#[derive(Debug, Clone)]
pub struct BusinessOverview<'a> {
    pub impact: ImpactSummary,
    pub recommended: Vec<&'a Listing>,
    pub recent_exchanges: Vec<&'a ExchangeRecord>,
    pub wishlist_preview: &'a [String],
    pub wishlist_len: usize,
}

impl<'a> BusinessOverview<'a> {
    pub fn build(store: &'a FixtureStore, user: &Identity) -> Self {
        let mut recommended = filter::marketplace(store.listings());
        recommended.truncate(RECOMMENDED);
        let wishlist = store.wishlist(&user.id);
        Self {
            impact: store.impact_for(&user.id),
            recommended,
            recent_exchanges: store
                .exchanges_for_business(&user.id)
                .take(RECENT_EXCHANGES)
                .collect(),
            wishlist_preview: &wishlist[..WISHLIST_PREVIEW.min(wishlist.len())],
            wishlist_len: wishlist.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::identity::UserId;

    use super::*;

    fn user(store: &FixtureStore, id: &str) -> Identity {
        store.user(&UserId::new(id)).cloned().unwrap()
    }

    #[test]
    fn consumer_counts() {
        let store = FixtureStore::seed();
        let aarav = user(&store, "c123");
        let overview = ConsumerOverview::build(&store, &aarav);
        assert_eq!(overview.listings.len(), 2);
        assert_eq!(overview.active_count, 1);
        assert_eq!(overview.total_views, 27);
        assert_eq!(overview.conversations.len(), 1);
        assert_eq!(overview.preview().len(), 2);
    }

    #[test]
    fn business_summary() {
        let store = FixtureStore::seed();
        let eco = user(&store, "b789");
        let overview = BusinessOverview::build(&store, &eco);
        assert_eq!(overview.recommended.len(), 2);
        assert!(overview
            .recommended
            .iter()
            .all(|l| l.status == ListingStatus::Active));
        assert_eq!(overview.recent_exchanges.len(), 1);
        assert_eq!(overview.wishlist_len, 3);
        assert_eq!(overview.impact.total_components, Some(18));
    }

    #[test]
    fn new_business_has_empty_summary() {
        let store = FixtureStore::seed();
        let stranger = Identity {
            id: UserId::new("b1"),
            name: "New".into(),
            email: "n@x.com".into(),
            role: crate::identity::Role::Business,
            location: None,
            verified: Some(false),
        };
        let overview = BusinessOverview::build(&store, &stranger);
        assert!(overview.recent_exchanges.is_empty());
        assert!(overview.wishlist_preview.is_empty());
        assert_eq!(overview.impact, ImpactSummary::default());
    }
}
