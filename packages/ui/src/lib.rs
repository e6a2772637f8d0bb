//! This crate contains the shared session state and UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod session;
pub use session::{Navigation, SessionContext, SessionStatus};

mod storage;
pub use storage::{make_session_store, PlatformStorage};

pub mod profile_form;
pub use profile_form::{
    DraftField, FormMessage, FormPhase, ProfileDraft, ProfileForm, SubmitOutcome, CLOSE_DELAY,
};

mod timer;

pub mod views;

mod auth;
pub use auth::{
    navigate_to, use_api, use_session, use_session_verification, AppSession, LogoutButton,
    SessionProvider,
};

mod session_indicator;
pub use session_indicator::SessionIndicator;

mod edit_profile_form;
pub use edit_profile_form::EditProfileForm;
