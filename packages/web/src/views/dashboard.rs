//! Dashboard view: the signed-in user's profile and the edit dialog.

use dioxus::prelude::*;
use ui::{use_session, use_session_verification, EditProfileForm, LogoutButton, SessionIndicator};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = navigator();
    let mut editing = use_signal(|| false);
    use_session_verification();

    use_effect(move || {
        if !session.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    let user = session.read().user().cloned();
    let Some(current) = user.clone() else {
        return rsx! {};
    };

    let display_name = current.display_name().to_string();
    let skills = if current.skills.is_empty() {
        "None listed".to_string()
    } else {
        current.skills.join(", ")
    };
    let availability = match &current.availability {
        Some(a) => format!(
            "{} to {} ({})",
            a.working_hours.start, a.working_hours.end, a.timezone
        ),
        None => "Not set".to_string(),
    };

    rsx! {
        div {
            class: "min-h-screen bg-neutral-50",

            header {
                class: "flex items-center justify-between px-6 py-4 bg-white border-b border-neutral-200",
                div {
                    class: "flex items-center gap-2",
                    span { class: "font-semibold text-neutral-800", "{display_name}" }
                    SessionIndicator {}
                }
                LogoutButton {
                    class: "px-3 py-1.5 rounded-md border border-neutral-300 text-sm hover:bg-neutral-100",
                }
            }

            main {
                class: "max-w-xl mx-auto p-6 space-y-4",

                div {
                    class: "p-4 bg-white rounded-lg border border-neutral-200 space-y-2",
                    h2 { class: "m-0 text-lg font-semibold text-neutral-800", "Your profile" }
                    p { class: "m-0 text-sm text-neutral-600", "Email: {current.email}" }
                    p { class: "m-0 text-sm text-neutral-600", "Skills: {skills}" }
                    p { class: "m-0 text-sm text-neutral-600", "Availability: {availability}" }
                }

                button {
                    class: "px-4 py-2 rounded-md bg-primary-500 text-white",
                    onclick: move |_| editing.set(true),
                    "Edit Profile"
                }
            }

            if editing() {
                EditProfileForm {
                    user: user.clone(),
                    on_close: move |_| editing.set(false),
                }
            }
        }
    }
}
