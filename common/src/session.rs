use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::SessionError;
use crate::identity::{Identity, Role, UserId};
use crate::store::FixtureStore;

/// A single persisted slot holding the serialized identity.
pub trait SessionStorage {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn store(&mut self, value: &str) -> Result<(), SessionError>;
    fn clear(&mut self) -> Result<(), SessionError>;
}

/// Process-local slot, used natively and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Some(value.into()),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot.clone())
    }

    fn store(&mut self, value: &str) -> Result<(), SessionError> {
        self.slot = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.slot = None;
        Ok(())
    }
}

/// Fields collected by the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub location: Option<String>,
}

/// Tracks who is logged in and mirrors it into [`SessionStorage`].
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    storage: S,
    current: Option<Identity>,
}

impl<S: SessionStorage> SessionManager<S> {
    /// A logged-out session. Call [`SessionManager::restore`] to pick up a
    /// persisted identity.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the persisted identity, if any.
    ///
    /// The restored identity is trusted as-is; it is not checked against the
    /// store.
    pub fn restore(&mut self) -> Result<Option<&Identity>, SessionError> {
        self.current = match self.storage.load()? {
            Some(raw) => Some(serde_json::from_str::<Identity>(&raw)?),
            None => None,
        };
        if let Some(identity) = &self.current {
            info!(id = %identity.id, "session restored");
        }
        Ok(self.current.as_ref())
    }

    /// Log in as the user with exactly this email and role.
    ///
    /// The password is not verified.
    pub fn login(&mut self, store: &FixtureStore, email: &str, _password: &str, role: Role) -> bool {
        let Some(found) = store.find_user(email, role) else {
            info!(%role, "login rejected: no matching user");
            return false;
        };
        let identity = found.clone();
        info!(id = %identity.id, "logged in");
        self.set_current(identity);
        true
    }

    /// Register a new user, add them to the store and log them in.
    pub fn signup(
        &mut self,
        store: &mut FixtureStore,
        request: SignupRequest,
        now: DateTime<Utc>,
    ) -> bool {
        let id = UserId::new(store.next_id(request.role.id_prefix(), now));
        let identity = Identity {
            id,
            name: request.name,
            email: request.email,
            role: request.role,
            location: request.location,
            verified: match request.role {
                Role::Consumer => None,
                Role::Business => Some(false),
            },
        };
        store.insert_user(identity.clone());
        info!(id = %identity.id, "signed up");
        self.set_current(identity);
        true
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            info!(id = %identity.id, "logged out");
        }
        if let Err(err) = self.storage.clear() {
            warn!("failed to clear persisted session: {err}");
        }
    }

    fn set_current(&mut self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(json) => {
                if let Err(err) = self.storage.store(&json) {
                    warn!("failed to persist session: {err}");
                }
            }
            Err(err) => warn!("failed to serialize session: {err}"),
        }
        self.current = Some(identity);
    }
}
