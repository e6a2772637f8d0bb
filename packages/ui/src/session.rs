//! # Session context: the in-memory half of a login session
//!
//! [`SessionContext`] owns a [`SessionStore`] and mirrors its user in memory.
//! It is an ordinary value: the Dioxus [`crate::SessionProvider`] wraps it in
//! a `Signal`, tests construct it directly over a [`store::MemoryStore`].
//!
//! ## Status
//!
//! | [`SessionStatus`] | Meaning |
//! |-------------------|---------|
//! | `Absent` | no usable session; the stored token (if any) is ignored |
//! | `Unverified` | restored from storage or just logged in, no protected call has answered yet |
//! | `Verified` | a protected call succeeded with the stored token |
//!
//! A protected call rejected with 401 demotes the session to `Absent` and
//! clears storage, see [`SessionContext::record_profile_result`].
//!
//! Operations that change where the user should be return a [`Navigation`]
//! for the caller to act on; the context itself never touches a router.

use api::ApiError;
use store::{KeyValueStore, SessionStore, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Absent,
    Unverified,
    Verified,
}

/// Where the app should go after a session transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Public landing page.
    Home,
    /// Authenticated area.
    Dashboard,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        match self {
            Navigation::Home => "/",
            Navigation::Dashboard => "/dashboard",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionContext<S> {
    store: SessionStore<S>,
    user: Option<User>,
    status: SessionStatus,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Restore the session from storage. Both slots must be present; a lone
    /// token or a lone user yields an absent session. No network call is made.
    pub fn initialize(store: SessionStore<S>) -> Self {
        let session = store.get();
        let (user, status) = match session {
            store::Session {
                token: Some(_),
                user: Some(user),
            } => (Some(user), SessionStatus::Unverified),
            _ => (None, SessionStatus::Absent),
        };
        tracing::debug!("Session initialised as {:?}", status);
        Self { store, user, status }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status != SessionStatus::Absent
    }

    /// The bearer token to send with protected calls.
    pub fn token(&self) -> Option<String> {
        if self.status == SessionStatus::Absent {
            return None;
        }
        self.store.get().token
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn login(&mut self, token: &str, user: User) -> Navigation {
        self.store.set(token, &user);
        self.user = Some(user);
        self.status = SessionStatus::Unverified;
        Navigation::Dashboard
    }

    pub fn logout(&mut self) -> Navigation {
        self.store.clear();
        self.user = None;
        self.status = SessionStatus::Absent;
        Navigation::Home
    }

    /// Replace the cached user after a profile change. The token is kept and
    /// not re-validated.
    pub fn refresh_user(&mut self, user: User) {
        self.store.set_user(&user);
        self.user = Some(user);
    }

    /// The token to confirm with `GET /auth/me`, while the session is
    /// `Unverified`.
    pub fn pending_verification(&self) -> Option<String> {
        if self.status != SessionStatus::Unverified {
            return None;
        }
        self.token()
    }

    /// Fold the outcome of a protected call that returns the user
    /// (`PUT /auth/profile`, `GET /auth/me`) into the session.
    ///
    /// Success refreshes the user and marks the token verified. A 401 logs
    /// out and asks the caller to navigate home. Any other failure leaves the
    /// session as it was.
    pub fn record_profile_result(&mut self, result: &Result<User, ApiError>) -> Option<Navigation> {
        match result {
            Ok(user) => {
                self.refresh_user(user.clone());
                self.status = SessionStatus::Verified;
                None
            }
            Err(err) if err.is_unauthorized() => {
                tracing::info!("Token rejected, ending session");
                Some(self.logout())
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, TOKEN_KEY, USER_KEY};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            ..User::default()
        }
    }

    fn context_over(storage: MemoryStore) -> SessionContext<MemoryStore> {
        SessionContext::initialize(SessionStore::new(storage))
    }

    #[test]
    fn test_initialize_with_token_and_user() {
        let storage = MemoryStore::new();
        SessionStore::new(storage.clone()).set("t1", &user("1", "Ada"));

        let session = context_over(storage);
        assert_eq!(session.user(), Some(&user("1", "Ada")));
        assert_eq!(session.status(), SessionStatus::Unverified);
        assert_eq!(session.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_initialize_with_only_token_is_absent() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "t1");

        let session = context_over(storage);
        assert!(session.user().is_none());
        assert_eq!(session.status(), SessionStatus::Absent);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_initialize_with_only_user_is_absent() {
        let storage = MemoryStore::new();
        SessionStore::new(storage.clone()).set_user(&user("1", "Ada"));

        let session = context_over(storage);
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_then_login_overwrites() {
        let storage = MemoryStore::new();
        SessionStore::new(storage.clone()).set("old", &user("0", "Old"));
        let mut session = context_over(storage.clone());

        assert_eq!(session.logout(), Navigation::Home);
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());

        assert_eq!(session.login("t", user("1", "Ada")), Navigation::Dashboard);
        let stored = session.store().get();
        assert_eq!(stored.token.as_deref(), Some("t"));
        assert_eq!(stored.user, Some(user("1", "Ada")));
        assert_eq!(session.user(), Some(&user("1", "Ada")));
    }

    #[test]
    fn test_login_from_any_state_is_idempotent() {
        let mut fresh = context_over(MemoryStore::new());
        fresh.logout();
        fresh.login("t", user("1", "Ada"));

        let storage = MemoryStore::new();
        SessionStore::new(storage.clone()).set("other", &user("9", "Zed"));
        let mut used = context_over(storage);
        used.logout();
        used.login("t", user("1", "Ada"));

        assert_eq!(fresh.store().get(), used.store().get());
        assert_eq!(fresh.user(), used.user());
    }

    #[test]
    fn test_refresh_user_keeps_token() {
        let mut session = context_over(MemoryStore::new());
        session.login("t1", user("1", "Ada"));

        session.refresh_user(user("1", "Ada Lovelace"));

        let stored = session.store().get();
        assert_eq!(stored.token.as_deref(), Some("t1"));
        assert_eq!(stored.user, Some(user("1", "Ada Lovelace")));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada Lovelace"));
    }

    #[test]
    fn test_successful_profile_call_verifies() {
        let mut session = context_over(MemoryStore::new());
        session.login("t1", user("1", "Ada"));

        let nav = session.record_profile_result(&Ok(user("1", "Grace")));
        assert!(nav.is_none());
        assert_eq!(session.status(), SessionStatus::Verified);
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Grace"));
    }

    #[test]
    fn test_unauthorized_profile_call_logs_out() {
        let mut session = context_over(MemoryStore::new());
        session.login("t1", user("1", "Ada"));

        let nav = session.record_profile_result(&Err(ApiError::Rejected {
            status: 401,
            message: "Invalid or expired token".to_string(),
        }));
        assert_eq!(nav, Some(Navigation::Home));
        assert_eq!(session.status(), SessionStatus::Absent);
        assert!(session.store().get().token.is_none());
    }

    #[test]
    fn test_other_failures_keep_session() {
        let mut session = context_over(MemoryStore::new());
        session.login("t1", user("1", "Ada"));

        let nav = session.record_profile_result(&Err(ApiError::Rejected {
            status: 404,
            message: "User not found".to_string(),
        }));
        assert!(nav.is_none());
        assert_eq!(session.status(), SessionStatus::Unverified);
        assert_eq!(session.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_pending_verification_only_while_unverified() {
        let mut session = context_over(MemoryStore::new());
        assert!(session.pending_verification().is_none());

        session.login("t1", user("1", "Ada"));
        assert_eq!(session.pending_verification().as_deref(), Some("t1"));

        session.record_profile_result(&Ok(user("1", "Ada")));
        assert_eq!(session.status(), SessionStatus::Verified);
        assert!(session.pending_verification().is_none());
        assert_eq!(session.token().as_deref(), Some("t1"));
    }
}
