use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarketError;

/// Stable identifier of a marketplace user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the marketplace a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Lists salvaged components.
    Consumer,
    /// Sources components from consumers.
    Business,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[Role::Consumer, Role::Business]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Consumer => "consumer",
            Role::Business => "business",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Consumer => "Consumer",
            Role::Business => "Business",
        }
    }

    /// First character of ids minted for users of this role.
    pub fn id_prefix(self) -> char {
        match self {
            Role::Consumer => 'c',
            Role::Business => 'b',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumer" => Ok(Role::Consumer),
            "business" => Ok(Role::Business),
            other => Err(MarketError::UnknownValue {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// An authenticated marketplace user, as held by the session and persisted
/// in the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Identity {
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Business).unwrap(), "\"business\"");
        let role: Role = serde_json::from_str("\"consumer\"").unwrap();
        assert_eq!(role, Role::Consumer);
    }

    #[test]
    fn optional_fields_are_omitted() {
        let identity = Identity {
            id: UserId::new("c1"),
            name: "A".into(),
            email: "a@x.com".into(),
            role: Role::Consumer,
            location: None,
            verified: None,
        };
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(
            json,
            r#"{"id":"c1","name":"A","email":"a@x.com","role":"consumer"}"#
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert_eq!("business".parse::<Role>().unwrap(), Role::Business);
    }
}
