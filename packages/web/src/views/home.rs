use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let signed_in = session.read().is_authenticated();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white text-center",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[2rem]",
                "CrewDesk"
            }

            p {
                class: "mb-8 max-w-md text-neutral-600",
                "Share your skills and working hours so your team knows when and how to reach you."
            }

            div {
                class: "flex gap-3",
                if signed_in {
                    Link {
                        class: "px-4 py-2 rounded-md bg-primary-500 text-white no-underline",
                        to: Route::Dashboard {},
                        "Go to Dashboard"
                    }
                } else {
                    Link {
                        class: "px-4 py-2 rounded-md bg-primary-500 text-white no-underline",
                        to: Route::Login {},
                        "Sign in"
                    }
                    Link {
                        class: "px-4 py-2 rounded-md border border-neutral-300 text-neutral-800 no-underline",
                        to: Route::Register {},
                        "Create account"
                    }
                }
            }
        }
    }
}
