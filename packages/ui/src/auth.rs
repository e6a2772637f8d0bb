//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;

use crate::session::{Navigation, SessionContext};
use crate::storage::{make_session_store, PlatformStorage};

/// The session held in context by [`SessionProvider`].
pub type AppSession = SessionContext<PlatformStorage>;

/// Get the current session.
/// Returns a signal that updates on login, logout and profile refresh.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Get the API client provided by [`SessionProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that restores the session from storage once and
/// shares it, together with an [`ApiClient`], with its children.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionContext::initialize(make_session_store()));
    use_context_provider(|| session);
    use_context_provider(ApiClient::from_env);

    rsx! {
        {children}
    }
}

/// Confirm an `Unverified` session with `GET /auth/me`, once per mount.
///
/// Restoring the session at startup stays offline; authenticated views call
/// this so a stale token is noticed before the first save.
pub fn use_session_verification() {
    let mut session = use_session();
    let api = use_api();

    use_hook(move || {
        let Some(token) = session.peek().pending_verification() else {
            return;
        };
        spawn(async move {
            let result = api.me(&token).await;
            if let Some(target) = session.write().record_profile_result(&result) {
                navigate_to(target);
            }
        });
    });
}

/// Full-page navigation for places that cannot reach the router.
pub fn navigate_to(target: Navigation) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target.path());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Navigation to {} requested", target.path());
    }
}

/// Button to log out the current user. The token is revoked on the server
/// first; the local session is cleared even if that call fails.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let api = use_api();

    let onclick = move |_| {
        let api = api.clone();
        spawn(async move {
            let token = session.peek().token();
            if let Some(token) = token {
                if let Err(e) = api.logout(&token).await {
                    tracing::warn!("Failed to revoke token: {}", e);
                }
            }
            let target = session.write().logout();
            navigate_to(target);
        });
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
