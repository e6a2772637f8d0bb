//! Session status indicator for the dashboard header.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::icons::{FaUserCheck, FaUserClock, FaUserSlash};
use crate::session::SessionStatus;
use crate::Icon;

/// A small icon that shows whether the stored token has been confirmed.
///
/// - **Verified**: a protected call has succeeded with this token
/// - **Unverified**: restored from storage, not yet confirmed by the server
/// - **Absent**: signed out
#[component]
pub fn SessionIndicator() -> Element {
    let session = use_session();
    let status = session.read().status();

    match status {
        SessionStatus::Verified => rsx! {
            span {
                class: "session-indicator text-green-500",
                title: "Signed in",
                Icon { icon: FaUserCheck, width: 14, height: 14 }
            }
        },
        SessionStatus::Unverified => rsx! {
            span {
                class: "session-indicator text-amber-500",
                title: "Signed in (not yet confirmed)",
                Icon { icon: FaUserClock, width: 14, height: 14 }
            }
        },
        SessionStatus::Absent => rsx! {
            span {
                class: "session-indicator text-neutral-400",
                title: "Signed out",
                Icon { icon: FaUserSlash, width: 14, height: 14 }
            }
        },
    }
}
