//! Durable credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one persisted entry exists: the raw credential string. The session
//! store is its only writer; the gateway reads it to attach the bearer header.
//! Browser access is `csr`-only; native builds see an always-empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key-value slot holding the raw credential.
pub trait CredentialStorage {
    fn load(&self) -> Option<String>;
    fn store(&mut self, token: &str);
    fn remove(&mut self);
}

/// `localStorage`-backed credential slot.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "csr")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            Self::local_storage()?
                .get_item(self.key)
                .ok()
                .flatten()
                .filter(|raw| !raw.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.key;
            None
        }
    }

    fn store(&mut self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::local_storage() else {
                leptos::logging::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            storage_write_ok(storage.set_item(self.key, token), "persist");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&mut self) {
        #[cfg(feature = "csr")]
        {
            match Self::local_storage() {
                Some(storage) => {
                    storage_write_ok(storage.remove_item(self.key), "remove");
                }
                None => leptos::logging::warn!("localStorage unavailable; credential not removed"),
            }
        }
    }
}

/// Warn when a `localStorage` write fails; returns whether it succeeded.
pub fn storage_write_ok<E: std::fmt::Debug>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::warn!("failed to {action} credential: {err:?}");
            false
        }
    }
}

/// In-memory credential slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    token: Option<String>,
}

impl MemoryStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }
}

impl CredentialStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    fn remove(&mut self) {
        self.token = None;
    }
}
