use dioxus::prelude::*;

use remate_common::error::SessionError;
use remate_common::session::{SessionManager, SessionStorage};

/// The session slot in `window.localStorage`.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    key: String,
    #[cfg(not(target_family = "wasm"))]
    fallback: remate_common::session::MemoryStorage,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            #[cfg(not(target_family = "wasm"))]
            fallback: Default::default(),
        }
    }

    /// Read an arbitrary key from the same storage area.
    pub fn read_key(key: &str) -> Option<String> {
        #[cfg(target_family = "wasm")]
        {
            wasm::local_storage()
                .ok()
                .and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(target_family = "wasm"))]
        {
            let _ = key;
            None
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use remate_common::error::SessionError;

    pub fn local_storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window".into()))?
            .local_storage()
            .map_err(|_| SessionError::Storage("localStorage blocked".into()))?
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".into()))
    }
}

#[cfg(target_family = "wasm")]
impl SessionStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, SessionError> {
        wasm::local_storage()?
            .get_item(&self.key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn store(&mut self, value: &str) -> Result<(), SessionError> {
        wasm::local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        wasm::local_storage()?
            .remove_item(&self.key)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

// Native builds (desktop/mobile previews) keep the slot in memory.
#[cfg(not(target_family = "wasm"))]
impl SessionStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, SessionError> {
        tracing::trace!(key = %self.key, "loading session from memory");
        self.fallback.load()
    }

    fn store(&mut self, value: &str) -> Result<(), SessionError> {
        self.fallback.store(value)
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.fallback.clear()
    }
}

pub type AppSession = SessionManager<BrowserStorage>;

/// Build the session for this page load, restoring any persisted identity.
///
/// A corrupt slot is logged and wiped so the user simply starts logged out.
pub fn restore_session(key: &str) -> AppSession {
    let mut session = SessionManager::new(BrowserStorage::new(key));
    if let Err(err) = session.restore() {
        tracing::warn!("discarding persisted session: {err}");
        session.logout();
    }
    session
}

pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}
