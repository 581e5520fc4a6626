//! Predicates behind the search boxes and dropdowns of the list views.
//!
//! All filters are conjunctive and never reorder their input.

use std::str::FromStr;

use crate::chat::Conversation;
use crate::identity::UserId;
use crate::listing::{Condition, Listing, ListingStatus};

/// Dropdown value: either the "all" sentinel or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChoice<T> {
    All,
    Only(T),
}

impl<T> Default for FilterChoice<T> {
    fn default() -> Self {
        FilterChoice::All
    }
}

impl<T: PartialEq> FilterChoice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FilterChoice<T> {
    /// Dropdown value of this choice; `"all"` for the sentinel.
    pub fn option_value(&self) -> String
    where
        T: ToString,
    {
        match self {
            FilterChoice::All => ALL.to_string(),
            FilterChoice::Only(v) => v.to_string(),
        }
    }
}

/// Value the UI uses for the "all" dropdown entry.
pub const ALL: &str = "all";

impl<T: FromStr> FromStr for FilterChoice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(FilterChoice::All)
        } else {
            s.parse().map(FilterChoice::Only)
        }
    }
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter state of the marketplace and my-listings views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    /// Also match the query against descriptions, not only titles.
    pub search_description: bool,
    pub status: FilterChoice<ListingStatus>,
    pub condition: FilterChoice<Condition>,
    pub category: FilterChoice<String>,
    /// Substring of the listing location.
    pub location: FilterChoice<String>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        let query_ok = contains_ignore_case(&listing.title, &self.query)
            || (self.search_description
                && contains_ignore_case(&listing.description, &self.query));
        let location_ok = match &self.location {
            FilterChoice::All => true,
            FilterChoice::Only(loc) => listing.location.contains(loc.as_str()),
        };
        query_ok
            && location_ok
            && self.status.admits(&listing.status)
            && self.condition.admits(&listing.condition)
            && self.category.admits(&listing.category)
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

pub fn by_status(listings: &[Listing], status: ListingStatus) -> Vec<&Listing> {
    listings.iter().filter(|l| l.status == status).collect()
}

pub fn owned_by<'a>(listings: &'a [Listing], owner: &UserId) -> Vec<&'a Listing> {
    listings.iter().filter(|l| &l.owner_id == owner).collect()
}

/// What businesses can browse: active listings only.
pub fn marketplace(listings: &[Listing]) -> Vec<&Listing> {
    by_status(listings, ListingStatus::Active)
}

pub fn conversations_for<'a>(
    conversations: &'a [Conversation],
    user: &UserId,
) -> Vec<&'a Conversation> {
    conversations.iter().filter(|c| c.includes(user)).collect()
}

/// Dropdown options: each location once, in first-seen order.
pub fn distinct_locations(listings: &[Listing]) -> Vec<String> {
    distinct(listings.iter().map(|l| l.location.as_str()))
}

pub fn distinct_categories(listings: &[Listing]) -> Vec<String> {
    distinct(listings.iter().map(|l| l.category.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.0.clone()).collect()
    }

    #[test]
    fn status_filter_keeps_order() {
        let listings = fixtures::listings();
        assert_eq!(ids(&by_status(&listings, ListingStatus::Active)), ["l001", "l002"]);
        assert_eq!(ids(&by_status(&listings, ListingStatus::Reserved)), ["l003"]);
        assert!(by_status(&listings, ListingStatus::Sold).is_empty());
    }

    #[test]
    fn default_filter_matches_everything() {
        let listings = fixtures::listings();
        assert_eq!(ListingFilter::default().apply(&listings).len(), listings.len());
    }

    #[test]
    fn query_is_case_insensitive_on_title() {
        let listings = fixtures::listings();
        let filter = ListingFilter {
            query: "GALAXY".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listings)), ["l001", "l003"]);
    }

    #[test]
    fn description_search_is_opt_in() {
        let listings = fixtures::listings();
        let mut filter = ListingFilter {
            query: "laptop upgrade".into(),
            ..Default::default()
        };
        assert!(filter.apply(&listings).is_empty());
        filter.search_description = true;
        assert_eq!(ids(&filter.apply(&listings)), ["l002"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let listings = fixtures::listings();
        let filter = ListingFilter {
            query: "samsung".into(),
            condition: FilterChoice::Only(Condition::Good),
            location: FilterChoice::Only("Mumbai".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&listings)), ["l001"]);

        let none = ListingFilter {
            category: FilterChoice::Only("Memory".into()),
            status: FilterChoice::Only(ListingStatus::Reserved),
            ..Default::default()
        };
        assert!(none.apply(&listings).is_empty());
    }

    #[test]
    fn choice_parses_sentinel() {
        let all: FilterChoice<ListingStatus> = "all".parse().unwrap();
        assert_eq!(all, FilterChoice::All);
        let sold: FilterChoice<ListingStatus> = "Sold".parse().unwrap();
        assert_eq!(sold, FilterChoice::Only(ListingStatus::Sold));
        assert_eq!(sold.option_value(), "Sold");
        assert!("nope".parse::<FilterChoice<Condition>>().is_err());
    }

    #[test]
    fn distinct_options_keep_first_seen_order() {
        let mut listings = fixtures::listings();
        let first = listings[0].clone();
        listings.push(first);
        assert_eq!(
            distinct_locations(&listings),
            ["Mumbai, MH", "Bengaluru, KA", "Delhi, DL"]
        );
        assert_eq!(
            distinct_categories(&listings),
            ["Motherboard", "Memory", "Logic Board"]
        );
    }

    #[test]
    fn conversations_by_participant() {
        let convs = fixtures::conversations();
        assert_eq!(conversations_for(&convs, &UserId::new("b789")).len(), 1);
        assert!(conversations_for(&convs, &UserId::new("c124")).is_empty());
    }
}
