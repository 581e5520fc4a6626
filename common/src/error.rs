use std::fmt;

use thiserror::Error;

use crate::chat::ConversationId;

/// Actions the marketplace shows in the UI but does not carry out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditListing,
    DeleteListing,
    ViewDetails,
    ExpressInterest,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::EditListing => write!(f, "editing a listing"),
            Action::DeleteListing => write!(f, "deleting a listing"),
            Action::ViewDetails => write!(f, "viewing listing details"),
            Action::ExpressInterest => write!(f, "expressing interest"),
        }
    }
}

/// Errors from marketplace operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("{0} is not available yet")]
    NotAvailable(Action),
    #[error("required field `{0}` is empty")]
    IncompleteDraft(&'static str),
    #[error("listing cannot be submitted from its current state")]
    NotSubmittable,
    #[error("unknown conversation {0}")]
    UnknownConversation(ConversationId),
    #[error("sender is not a participant of this conversation")]
    NotParticipant,
    #[error("message is empty")]
    EmptyMessage,
    #[error("unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

/// Errors from reading or writing the persisted session slot.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),
    #[error("persisted session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T, E = MarketError> = std::result::Result<T, E>;
