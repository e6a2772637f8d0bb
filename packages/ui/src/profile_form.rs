//! # Profile edit form: headless state
//!
//! [`ProfileForm`] is everything the edit-profile modal knows, without any
//! rendering: the [`ProfileDraft`] being typed into, the [`FormPhase`], and
//! the inline [`FormMessage`].
//!
//! A submission is two synchronous steps around one network call:
//! [`ProfileForm::prepare`] takes the token and payload, and
//! [`ProfileForm::complete`] folds the response into the form and the
//! session. [`crate::EditProfileForm`] runs them from Dioxus signals;
//! [`ProfileForm::submit`] runs them against plain values.
//!
//! ```text
//! Editing ──begin_submit──▶ Submitting ──finish(Err)──▶ Editing (error shown)
//!                                      └─finish(Ok)───▶ Editing (success shown) ──CLOSE_DELAY──▶ Closed
//! ```
//!
//! Only one submission can be in flight: [`ProfileForm::begin_submit`] returns
//! `None` unless the form is `Editing`.

use std::time::Duration;

use api::{ApiClient, ApiError, Patch, ProfilePatch};
use store::{Availability, KeyValueStore, User, WorkingHours};

use crate::session::{Navigation, SessionContext};

/// How long the success message stays up before the form closes.
pub const CLOSE_DELAY: Duration = Duration::from_millis(1200);

pub const SUCCESS_MESSAGE: &str = "Profile updated!";

/// Timezones offered by the form's selector.
pub const TIMEZONES: &[&str] = &[
    "UTC",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Sao_Paulo",
    "America/Toronto",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Kolkata",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Oslo",
    "Europe/Paris",
    "Pacific/Auckland",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Skills,
    Timezone,
    Start,
    End,
}

/// Form-local copy of the editable profile fields, all as strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    /// Comma-separated.
    pub skills: String,
    pub timezone: String,
    pub start: String,
    pub end: String,
}

impl ProfileDraft {
    /// Pre-fill from the current user; empty when there is none.
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        let availability = user.availability.as_ref();
        Self {
            name: user.name.clone(),
            skills: user.skills.join(", "),
            timezone: availability.map(|a| a.timezone.clone()).unwrap_or_default(),
            start: availability
                .map(|a| a.working_hours.start.clone())
                .unwrap_or_default(),
            end: availability
                .map(|a| a.working_hours.end.clone())
                .unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Skills => &self.skills,
            DraftField::Timezone => &self.timezone,
            DraftField::Start => &self.start,
            DraftField::End => &self.end,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Skills => self.skills = value,
            DraftField::Timezone => self.timezone = value,
            DraftField::Start => self.start = value,
            DraftField::End => self.end = value,
        }
    }

    /// Decode into a patch that sets every editable field.
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            name: Patch::Set(self.name.clone()),
            skills: Patch::Set(split_skills(&self.skills)),
            availability: Patch::Set(Availability {
                timezone: self.timezone.clone(),
                working_hours: WorkingHours {
                    start: self.start.clone(),
                    end: self.end.clone(),
                },
            }),
        }
    }
}

/// Split on commas and trim each entry. Empty entries are kept.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormMessage::Error(_))
    }
}

/// What a finished submission asks of its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; close the form after [`CLOSE_DELAY`].
    Saved,
    /// Not saved; the error is shown and the form stays open for a retry.
    Failed,
    /// The token was rejected and the session has ended.
    SignedOut(Navigation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    draft: ProfileDraft,
    phase: FormPhase,
    message: Option<FormMessage>,
}

impl ProfileForm {
    pub fn new(user: Option<&User>) -> Self {
        Self {
            draft: ProfileDraft::from_user(user),
            phase: FormPhase::Editing,
            message: None,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        if self.phase != FormPhase::Closed {
            self.draft.set(field, value);
        }
    }

    /// Enter `Submitting` and return the payload, unless a submission is
    /// already running or the form is closed.
    pub fn begin_submit(&mut self) -> Option<ProfilePatch> {
        if self.phase != FormPhase::Editing {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.message = None;
        Some(self.draft.to_patch())
    }

    /// Record the response. Returns `true` on success, after which the
    /// caller should close the form once [`CLOSE_DELAY`] has passed.
    pub fn finish(&mut self, result: &Result<User, ApiError>) -> bool {
        self.phase = FormPhase::Editing;
        match result {
            Ok(_) => {
                self.message = Some(FormMessage::Success(SUCCESS_MESSAGE.to_string()));
                true
            }
            Err(err) => {
                self.message = Some(FormMessage::Error(err.to_string()));
                false
            }
        }
    }

    /// Show an error without submitting.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Editing;
        self.message = Some(FormMessage::Error(message.into()));
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
    }

    /// Take the session's token and enter `Submitting`.
    ///
    /// `None` when there is nothing to send: no session (an error is shown),
    /// or a submission already in flight.
    pub fn prepare<S: KeyValueStore>(
        &mut self,
        session: &SessionContext<S>,
    ) -> Option<(String, ProfilePatch)> {
        let Some(token) = session.token() else {
            self.fail("You are not signed in");
            return None;
        };
        let patch = self.begin_submit()?;
        Some((token, patch))
    }

    /// Fold the response into the session and the form.
    pub fn complete<S: KeyValueStore>(
        &mut self,
        session: &mut SessionContext<S>,
        result: &Result<User, ApiError>,
    ) -> SubmitOutcome {
        let navigation = session.record_profile_result(result);
        let saved = self.finish(result);
        match navigation {
            Some(target) => SubmitOutcome::SignedOut(target),
            None if saved => SubmitOutcome::Saved,
            None => SubmitOutcome::Failed,
        }
    }

    /// Submit the draft and close after [`CLOSE_DELAY`] when it was saved.
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        session: &mut SessionContext<S>,
        api: &ApiClient,
    ) -> SubmitOutcome {
        let Some((token, patch)) = self.prepare(session) else {
            return SubmitOutcome::Failed;
        };

        let result = api.update_profile(&token, &patch).await;
        let outcome = self.complete(session, &result);
        if outcome == SubmitOutcome::Saved {
            crate::timer::sleep(CLOSE_DELAY).await;
            self.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, SessionStore};

    fn ada() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            skills: vec!["c".to_string(), "go".to_string()],
            availability: Some(Availability {
                timezone: "UTC".to_string(),
                working_hours: WorkingHours {
                    start: "09:00".to_string(),
                    end: "17:00".to_string(),
                },
            }),
        }
    }

    #[test]
    fn test_split_skills_trims_each_entry() {
        assert_eq!(split_skills("go, rust , ts"), vec!["go", "rust", "ts"]);
    }

    #[test]
    fn test_split_skills_keeps_empty_entries() {
        assert_eq!(split_skills("go,, rust,"), vec!["go", "", "rust", ""]);
    }

    #[test]
    fn test_draft_prefills_from_user() {
        let draft = ProfileDraft::from_user(Some(&ada()));
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.skills, "c, go");
        assert_eq!(draft.timezone, "UTC");
        assert_eq!(draft.start, "09:00");
        assert_eq!(draft.end, "17:00");
    }

    #[test]
    fn test_draft_without_user_or_availability() {
        assert_eq!(ProfileDraft::from_user(None), ProfileDraft::default());

        let user = User {
            availability: None,
            ..ada()
        };
        let draft = ProfileDraft::from_user(Some(&user));
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.timezone, "");
        assert_eq!(draft.start, "");
    }

    #[test]
    fn test_to_patch_nests_availability() {
        let mut draft = ProfileDraft::default();
        draft.set(DraftField::Name, "Ada".to_string());
        draft.set(DraftField::Skills, "c,go".to_string());
        draft.set(DraftField::Timezone, "UTC".to_string());
        draft.set(DraftField::Start, "09:00".to_string());
        draft.set(DraftField::End, "17:00".to_string());

        let patch = draft.to_patch();
        assert_eq!(patch.name, Patch::Set("Ada".to_string()));
        assert_eq!(patch.skills, Patch::Set(vec!["c".to_string(), "go".to_string()]));
        assert_eq!(patch.availability, Patch::Set(ada().availability.unwrap()));
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = ProfileForm::new(Some(&ada()));
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        form.finish(&Err(ApiError::Decode {
            fallback: "Update failed",
            detail: "bad".to_string(),
        }));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_finish_sets_message() {
        let mut form = ProfileForm::new(None);
        form.begin_submit();
        assert!(!form.finish(&Err(ApiError::Rejected {
            status: 404,
            message: "User not found".to_string(),
        })));
        let message = form.message().unwrap();
        assert!(message.is_error());
        assert_eq!(message.text(), "User not found");

        form.begin_submit();
        assert!(form.message().is_none());
        assert!(form.finish(&Ok(ada())));
        assert_eq!(
            form.message(),
            Some(&FormMessage::Success(SUCCESS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_closed_form_ignores_input() {
        let mut form = ProfileForm::new(Some(&ada()));
        form.close();
        form.set_field(DraftField::Name, "Grace".to_string());

        assert_eq!(form.draft().get(DraftField::Name), "Ada");
        assert!(form.begin_submit().is_none());
    }

    fn signed_in() -> SessionContext<MemoryStore> {
        let mut session = SessionContext::initialize(SessionStore::new(MemoryStore::new()));
        session.login("t1", ada());
        session
    }

    fn rejected(status: u16, message: &str) -> Result<User, ApiError> {
        Err(ApiError::Rejected {
            status,
            message: message.to_string(),
        })
    }

    #[test]
    fn test_prepare_without_session_fails_locally() {
        let session = SessionContext::initialize(SessionStore::new(MemoryStore::new()));
        let mut form = ProfileForm::new(None);

        assert!(form.prepare(&session).is_none());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.message().unwrap().text(), "You are not signed in");
    }

    #[test]
    fn test_prepare_takes_token_and_payload() {
        let session = signed_in();
        let mut form = ProfileForm::new(session.user());

        let (token, patch) = form.prepare(&session).unwrap();
        assert_eq!(token, "t1");
        assert_eq!(patch.name, Patch::Set("Ada".to_string()));
        assert!(form.is_submitting());
        assert!(form.prepare(&session).is_none());
    }

    #[test]
    fn test_complete_saved_refreshes_session() {
        let mut session = signed_in();
        let mut form = ProfileForm::new(session.user());
        form.prepare(&session).unwrap();

        let updated = User {
            name: "Ada Lovelace".to_string(),
            ..ada()
        };
        let outcome = form.complete(&mut session, &Ok(updated));

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(session.user().unwrap().name, "Ada Lovelace");
        assert_eq!(session.status(), crate::SessionStatus::Verified);
    }

    #[test]
    fn test_complete_unauthorized_signs_out() {
        let mut session = signed_in();
        let mut form = ProfileForm::new(session.user());
        form.prepare(&session).unwrap();

        let outcome = form.complete(&mut session, &rejected(401, "Invalid or expired token"));

        assert_eq!(outcome, SubmitOutcome::SignedOut(Navigation::Home));
        assert!(!session.is_authenticated());
        assert_eq!(form.message().unwrap().text(), "Invalid or expired token");
    }

    #[test]
    fn test_complete_other_failure_keeps_session() {
        let mut session = signed_in();
        let mut form = ProfileForm::new(session.user());
        form.prepare(&session).unwrap();

        let outcome = form.complete(&mut session, &rejected(404, "User not found"));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(session.is_authenticated());
        assert!(form.prepare(&session).is_some());
    }
}
