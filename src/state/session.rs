//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the single owner of the persisted credential. Route
//! guards, the header and the API gateway read the in-memory snapshot through
//! `SessionContext`; only the transitions below write storage.
//!
//! DESIGN
//! ======
//! The interval timer and the window-focus listener both call `revalidate`.
//! A transition to "absent" is reported once, because the notice is derived
//! from the present -> absent edge and not from the check itself.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::notice::NoticeState;
use crate::util::clock;
use crate::util::storage::{BrowserStorage, CredentialStorage};
use crate::util::token::{self, Claims};

/// Identity of the signed-in user, derived from the credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub id: i64,
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Self { email: claims.sub, id: claims.id }
    }
}

/// Session transitions the user must be told about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionNotice {
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the server returned an unreadable credential")]
    Malformed,
    #[error("the server returned an already expired credential")]
    Expired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Bumped whenever the identity changes; list caches keyed on an older
    /// epoch are stale.
    pub epoch: u64,
}

impl SessionState {
    /// Rebuild the session from persisted storage at startup.
    pub fn restore(storage: &mut impl CredentialStorage, now_ms: i64) -> (Self, Option<SessionNotice>) {
        let Some(raw) = storage.load() else {
            return (Self::default(), None);
        };
        match token::decode(&raw).filter(|c| !c.is_expired_at(now_ms)) {
            Some(claims) => (Self { session: Some(claims.into()), epoch: 0 }, None),
            None => {
                storage.remove();
                (Self::default(), Some(SessionNotice::Expired))
            }
        }
    }

    /// Persist a freshly issued credential and adopt its identity.
    ///
    /// # Errors
    ///
    /// Rejects credentials that do not decode or are already expired; nothing
    /// is persisted in that case.
    pub fn establish(
        &mut self,
        storage: &mut impl CredentialStorage,
        raw: &str,
        now_ms: i64,
    ) -> Result<Session, SessionError> {
        let claims = token::decode(raw).ok_or(SessionError::Malformed)?;
        if claims.is_expired_at(now_ms) {
            return Err(SessionError::Expired);
        }
        storage.store(raw);
        let session = Session::from(claims);
        self.replace(Some(session.clone()));
        Ok(session)
    }

    /// Drop the credential and the identity.
    pub fn clear(&mut self, storage: &mut impl CredentialStorage) {
        storage.remove();
        self.replace(None);
    }

    /// Re-check the persisted credential against the in-memory session.
    ///
    /// Returns `Expired` only on the present -> absent edge caused by an
    /// expired or unreadable credential.
    pub fn revalidate(&mut self, storage: &mut impl CredentialStorage, now_ms: i64) -> Option<SessionNotice> {
        let Some(current) = self.session.clone() else {
            return None;
        };
        let Some(raw) = storage.load() else {
            // Signed out in another tab.
            self.replace(None);
            return None;
        };
        match token::decode(&raw).filter(|c| !c.is_expired_at(now_ms)) {
            Some(claims) => {
                let next = Session::from(claims);
                if next != current {
                    // Signed in as someone else in another tab.
                    self.replace(Some(next));
                }
                None
            }
            None => {
                self.clear(storage);
                Some(SessionNotice::Expired)
            }
        }
    }

    /// The server rejected the credential.
    pub fn unauthorized(&mut self, storage: &mut impl CredentialStorage) -> Option<SessionNotice> {
        let was_present = self.session.is_some();
        self.clear(storage);
        was_present.then_some(SessionNotice::Expired)
    }

    fn replace(&mut self, session: Option<Session>) {
        if self.session != session {
            self.session = session;
            self.epoch += 1;
        }
    }
}

/// Reactive handle to the session, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    storage_key: &'static str,
}

impl SessionContext {
    /// Restore the persisted session and report an expired credential once.
    pub fn restore(config: &ClientConfig, notices: RwSignal<NoticeState>) -> Self {
        let mut storage = BrowserStorage::new(config.token_storage_key);
        let (state, notice) = SessionState::restore(&mut storage, clock::now_ms());
        let ctx = Self { state: RwSignal::new(state), notices, storage_key: config.token_storage_key };
        ctx.report(notice);
        ctx
    }

    fn storage(self) -> BrowserStorage {
        BrowserStorage::new(self.storage_key)
    }

    /// Current identity (tracked).
    pub fn session(self) -> Option<Session> {
        self.state.with(|s| s.session.clone())
    }

    /// Whether someone is signed in (tracked).
    pub fn is_present(self) -> bool {
        self.state.with(|s| s.session.is_some())
    }

    /// Identity epoch (tracked); changes on every sign-in and sign-out.
    pub fn epoch(self) -> u64 {
        self.state.with(|s| s.epoch)
    }

    /// Credential to present as a bearer token, if one is persisted.
    pub fn bearer_token(self) -> Option<String> {
        self.storage().load()
    }

    /// Adopt the credential returned by login or registration.
    ///
    /// # Errors
    ///
    /// See [`SessionState::establish`].
    pub fn establish(self, raw: &str) -> Result<Session, SessionError> {
        let mut storage = self.storage();
        let mut next = self.state.get_untracked();
        let session = next.establish(&mut storage, raw, clock::now_ms())?;
        self.state.set(next);
        Ok(session)
    }

    /// Explicit sign-out.
    pub fn logout(self) {
        let mut storage = self.storage();
        self.state.update(|s| s.clear(&mut storage));
        self.notices.update(|n| {
            n.success("Logged out", "You have been successfully logged out.");
        });
    }

    /// Shared body of the interval and focus liveness checks.
    pub fn revalidate(self) {
        let mut storage = self.storage();
        let current = self.state.get_untracked();
        let mut next = current.clone();
        let notice = next.revalidate(&mut storage, clock::now_ms());
        if next != current {
            self.state.set(next);
        }
        self.report(notice);
    }

    /// Gateway hook for HTTP 401.
    pub fn handle_unauthorized(self) {
        let mut storage = self.storage();
        let current = self.state.get_untracked();
        let mut next = current.clone();
        let notice = next.unauthorized(&mut storage);
        if next != current {
            self.state.set(next);
        }
        self.report(notice);
    }

    fn report(self, notice: Option<SessionNotice>) {
        if let Some(SessionNotice::Expired) = notice {
            leptos::logging::log!("session expired");
            self.notices.update(|n| {
                n.error("Session expired", "Your session has expired. Please sign in again.");
            });
        }
    }
}

/// Start the periodic and focus-triggered liveness checks.
pub fn install_session_liveness(session: SessionContext, interval: std::time::Duration) {
    #[cfg(feature = "csr")]
    {
        use futures::StreamExt as _;

        let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
        leptos::task::spawn_local(async move {
            gloo_timers::future::IntervalStream::new(millis)
                .for_each(move |()| {
                    session.revalidate();
                    std::future::ready(())
                })
                .await;
        });
        let focus = window_event_listener(leptos::ev::focus, move |_| session.revalidate());
        on_cleanup(move || focus.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, interval);
    }
}
