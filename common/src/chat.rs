use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::UserId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: UserId,
    pub sender_name: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// A message thread between a consumer and a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub participants: Vec<UserId>,
    /// Names in the same order as `participants`.
    pub participant_names: Vec<String>,
    pub messages: Vec<ChatMessage>,
    pub last_message: String,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl Conversation {
    pub fn includes(&self, user: &UserId) -> bool {
        self.participants.contains(user)
    }

    /// Name of the first participant whose name differs from `own_name`.
    pub fn other_participant_name(&self, own_name: &str) -> Option<&str> {
        self.participant_names
            .iter()
            .map(String::as_str)
            .find(|name| *name != own_name)
    }

    /// Distinct ids of everyone who has sent a message.
    pub fn senders(&self) -> BTreeSet<&UserId> {
        self.messages.iter().map(|m| &m.sender_id).collect()
    }

    /// Append a message and refresh the preview.
    pub fn push(&mut self, message: ChatMessage) {
        self.last_message = message.text.clone();
        self.last_message_at = Some(message.sent_at);
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn conversation() -> Conversation {
        Conversation {
            id: ConversationId("ch1".into()),
            participants: vec![UserId::new("c1"), UserId::new("b1")],
            participant_names: vec!["Ann".into(), "Shop".into()],
            messages: Vec::new(),
            last_message: String::new(),
            last_message_at: None,
        }
    }

    #[test]
    fn push_updates_preview() {
        let mut conv = conversation();
        let at = Utc.with_ymd_and_hms(2025, 9, 20, 14, 0, 0).unwrap();
        conv.push(ChatMessage {
            id: "m1".into(),
            sender_id: UserId::new("c1"),
            sender_name: "Ann".into(),
            text: "hi".into(),
            sent_at: at,
        });
        assert_eq!(conv.last_message, "hi");
        assert_eq!(conv.last_message_at, Some(at));
        assert_eq!(conv.senders().len(), 1);
    }

    #[test]
    fn other_participant_skips_self() {
        let conv = conversation();
        assert_eq!(conv.other_participant_name("Ann"), Some("Shop"));
        assert_eq!(conv.other_participant_name("Shop"), Some("Ann"));
    }
}
