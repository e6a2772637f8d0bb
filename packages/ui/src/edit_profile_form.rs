use dioxus::prelude::*;
use store::User;

use crate::auth::{navigate_to, use_api, use_session};
use crate::profile_form::{DraftField, ProfileForm, SubmitOutcome, CLOSE_DELAY, TIMEZONES};
use crate::timer::sleep;
use crate::views::ModalOverlay;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md bg-neutral-100 border border-neutral-300 text-sm text-neutral-800 outline-none focus:border-primary-500";

/// Modal form for editing the current user's name, skills and availability.
///
/// The user is passed in explicitly; with `None` every field starts empty.
/// The overlay cannot be dismissed while a save is in flight.
#[component]
pub fn EditProfileForm(user: Option<User>, on_close: EventHandler<()>) -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut form = use_signal(move || ProfileForm::new(user.as_ref()));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let prepared = form.write().prepare(&*session.peek());
            let Some((token, patch)) = prepared else {
                return;
            };

            let result = api.update_profile(&token, &patch).await;
            let outcome = form.write().complete(&mut *session.write(), &result);

            match outcome {
                SubmitOutcome::Saved => {
                    sleep(CLOSE_DELAY).await;
                    form.write().close();
                    on_close.call(());
                }
                SubmitOutcome::SignedOut(target) => navigate_to(target),
                SubmitOutcome::Failed => {}
            }
        });
    };

    let state = form();
    let draft = state.draft().clone();
    let submitting = state.is_submitting();
    let message = state.message().map(|m| {
        let class = if m.is_error() {
            "text-sm px-3 py-2 rounded bg-red-50 border border-red-200 text-red-600"
        } else {
            "text-sm px-3 py-2 rounded bg-green-50 border border-green-200 text-green-700"
        };
        (class, m.text().to_string())
    });

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            locked: submitting,

            form {
                class: "p-6 space-y-4",
                onsubmit: handle_submit,

                h2 { class: "m-0 text-lg font-semibold text-neutral-800", "Edit Profile" }

                if let Some((message_class, message_text)) = message {
                    div { class: message_class, "{message_text}" }
                }

                input {
                    class: INPUT_CLASS,
                    name: "name",
                    r#type: "text",
                    required: true,
                    placeholder: "Full name",
                    value: "{draft.name}",
                    oninput: move |evt: FormEvent| form.write().set_field(DraftField::Name, evt.value()),
                }

                input {
                    class: INPUT_CLASS,
                    name: "skills",
                    r#type: "text",
                    required: true,
                    placeholder: "Skills (comma separated)",
                    value: "{draft.skills}",
                    oninput: move |evt: FormEvent| form.write().set_field(DraftField::Skills, evt.value()),
                }

                select {
                    class: INPUT_CLASS,
                    name: "timezone",
                    required: true,
                    value: "{draft.timezone}",
                    onchange: move |evt: FormEvent| form.write().set_field(DraftField::Timezone, evt.value()),
                    option { value: "", "Select timezone" }
                    if !draft.timezone.is_empty() && !TIMEZONES.contains(&draft.timezone.as_str()) {
                        option { value: "{draft.timezone}", "{draft.timezone}" }
                    }
                    for tz in TIMEZONES.iter() {
                        option { key: "{tz}", value: "{tz}", "{tz}" }
                    }
                }

                div {
                    class: "flex gap-2",
                    input {
                        class: INPUT_CLASS,
                        name: "start",
                        r#type: "time",
                        required: true,
                        value: "{draft.start}",
                        oninput: move |evt: FormEvent| form.write().set_field(DraftField::Start, evt.value()),
                    }
                    input {
                        class: INPUT_CLASS,
                        name: "end",
                        r#type: "time",
                        required: true,
                        value: "{draft.end}",
                        oninput: move |evt: FormEvent| form.write().set_field(DraftField::End, evt.value()),
                    }
                }

                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 rounded-md border border-neutral-300 hover:bg-neutral-100",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-md bg-primary-500 text-white disabled:opacity-50",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Saving…" } else { "Save" }
                    }
                }
            }
        }
    }
}
