use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::UserId;
use crate::listing::ListingId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ExchangeStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExchangeStatus::Pending => "Pending",
            ExchangeStatus::Completed => "Completed",
            ExchangeStatus::Cancelled => "Cancelled",
        }
    }
}

/// A hand-over of one listing from a consumer to a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub id: ExchangeId,
    pub listing_id: ListingId,
    pub listing_title: String,
    pub consumer_id: UserId,
    pub consumer_name: String,
    pub business_id: UserId,
    pub business_name: String,
    pub status: ExchangeStatus,
    pub date: NaiveDate,
    /// Display amount including currency symbol, e.g. "₹4,500".
    pub amount: String,
    pub receipt: Option<String>,
}
