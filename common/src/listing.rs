use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::identity::UserId;

/// Unique listing identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Physical condition of a salvaged component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn all() -> &'static [Condition] {
        &[
            Condition::Excellent,
            Condition::Good,
            Condition::Fair,
            Condition::Poor,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::all()
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| MarketError::UnknownValue {
                kind: "condition",
                value: s.to_string(),
            })
    }
}

/// Where a listing is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Active,
    Reserved,
    Sold,
}

impl ListingStatus {
    pub fn all() -> &'static [ListingStatus] {
        &[
            ListingStatus::Active,
            ListingStatus::Reserved,
            ListingStatus::Sold,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Reserved => "Reserved",
            ListingStatus::Sold => "Sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListingStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingStatus::all()
            .iter()
            .copied()
            .find(|st| st.label() == s)
            .ok_or_else(|| MarketError::UnknownValue {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Categories offered by the upload form.
pub const CATEGORIES: &[&str] = &[
    "Motherboard",
    "Memory",
    "Logic Board",
    "Power Supply",
    "Hard Drive",
    "Graphics Card",
    "Processor",
    "Other",
];

/// A component a consumer has put up for reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub condition: Condition,
    pub location: String,
    /// Image references; the first one is the card thumbnail.
    pub images: Vec<String>,
    pub category: String,
    /// Free-text classification, e.g. "RAM - 90% reusable".
    pub classification: String,
    pub upload_date: NaiveDate,
    pub views: u32,
    pub status: ListingStatus,
    pub owner_id: UserId,
    /// Denormalized display name of the owner.
    pub owner_name: String,
}

impl Listing {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parses_labels() {
        for c in Condition::all() {
            assert_eq!(c.label().parse::<Condition>().unwrap(), *c);
        }
        assert!("Mint".parse::<Condition>().is_err());
    }

    #[test]
    fn status_parses_labels() {
        assert_eq!("Sold".parse::<ListingStatus>().unwrap(), ListingStatus::Sold);
        assert!("sold".parse::<ListingStatus>().is_err());
    }
}
