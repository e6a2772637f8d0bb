//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in
    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api.login(&e, &p).await {
                Ok(auth) => {
                    let target = session.write().login(&auth.token, auth.user);
                    loading.set(false);
                    nav.push(Route::from(target));
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Welcome back"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in to CrewDesk"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full px-3 py-2 rounded-md border border-neutral-300 text-sm",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full px-3 py-2 rounded-md border border-neutral-300 text-sm",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full px-4 py-2 rounded-md bg-primary-500 text-white font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Register {},
                    "Create one"
                }
            }
        }
    }
}
