//! Form interaction controller
//!
//! One controller per mounted form. It owns the field values, the touched
//! set, the error map and the submission status, and it knows nothing about
//! which fields a concrete form has.
//!
//! Validation runs in two passes. The local pass may block a create
//! submission before anything is sent. The backend pass is authoritative:
//! its field errors overwrite local ones.

use super::field::{FieldValue, FormField};
use super::validation;
use crate::backend::{BackendError, Route, SubmissionChannel};
use crate::state::Flash;
use futures::future::BoxFuture;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Banner shown when a failure carries no usable detail
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Backend answer still on its way; hand it to [`FormController::finish_submit`]
pub type PendingSubmission = BoxFuture<'static, Result<Option<Flash>, BackendError>>;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether the form creates a new record or edits a stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submission was not sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form has invalid fields")]
    Invalid,
}

/// Result of a dispatched submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; carries the flash to show
    Succeeded(Flash),
    /// The backend rejected fields; errors are merged into the form
    Rejected,
    /// Transport or server failure; carries the banner text
    Failed(String),
}

/// Submit button state as a function of the form's situation.
///
/// Disabled while a submission is in flight. Otherwise creating requires the
/// whole form to be valid, while editing only requires the primary (name)
/// field to be filled.
pub fn submit_disabled(
    status: SubmissionStatus,
    aggregate_valid: bool,
    mode: FormMode,
    primary_filled: bool,
) -> bool {
    if status == SubmissionStatus::Submitting {
        return true;
    }
    match mode {
        FormMode::Create => !aggregate_valid,
        FormMode::Edit => !primary_filled,
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    fields: Vec<FormField>,
    mode: FormMode,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    status: SubmissionStatus,
    banner: Option<String>,
    active_field_index: usize,
}

impl FormController {
    /// Mount a form. The first field is the primary one.
    pub fn new(mode: FormMode, fields: Vec<FormField>) -> Self {
        Self {
            fields,
            mode,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            status: SubmissionStatus::Idle,
            banner: None,
            active_field_index: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Form-level error (transport/server failure)
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).map(|f| &f.value)
    }

    /// Text value of `name`, empty if missing or not text
    pub fn text(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or("")
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Raw error for `name`, shown or not
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Error to render for `name`. Untouched fields never show one.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    /// Update a field, mark it touched and re-validate it
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        let Some(index) = self.index_of(name) else {
            tracing::debug!(field = name, "ignoring update for unknown field");
            return;
        };
        let value = self.fields[index].normalize(value);
        self.fields[index].value = value.clone();
        self.touched.insert(name.to_string());
        self.validate_field(name, &value);
    }

    fn verdict(&self, field: &FormField, value: &FieldValue) -> Result<(), String> {
        // Stored values were valid when saved
        if self.mode == FormMode::Edit && field.is_unchanged(value) {
            return Ok(());
        }
        validation::check(field, value)
    }

    /// Check `value` against the rules of `name` and record the result
    pub fn validate_field(&mut self, name: &str, value: &FieldValue) -> bool {
        let Some(field) = self.field(name) else {
            return true;
        };
        match self.verdict(field, value) {
            Ok(()) => {
                self.errors.remove(name);
                true
            }
            Err(message) => {
                self.errors.insert(name.to_string(), message);
                false
            }
        }
    }

    /// Validate every field and mark them all touched
    pub fn validate_all(&mut self) -> bool {
        let snapshot: Vec<(String, FieldValue)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();

        let mut valid = true;
        for (name, value) in snapshot {
            self.touched.insert(name.clone());
            valid &= self.validate_field(&name, &value);
        }
        valid
    }

    /// Whether every field passes its local rules. Records nothing.
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| self.verdict(f, &f.value).is_ok())
    }

    fn primary_filled(&self) -> bool {
        self.fields
            .first()
            .is_some_and(|f| !f.as_text().trim().is_empty())
    }

    pub fn submit_disabled(&self) -> bool {
        submit_disabled(
            self.status,
            self.is_valid(),
            self.mode,
            self.primary_filled(),
        )
    }

    /// JSON body for the backend. Blank password fields are left out.
    pub fn values_json(&self) -> Value {
        let mut body = Map::new();
        for field in &self.fields {
            if field.is_sensitive() && field.as_text().is_empty() {
                continue;
            }
            body.insert(field.name.clone(), field.value.to_json());
        }
        Value::Object(body)
    }

    /// Lock the form for sending and return the payload
    pub fn begin_submit(&mut self) -> Result<Value, SubmitRefused> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRefused::InFlight);
        }

        let ready = match self.mode {
            FormMode::Create => self.validate_all(),
            FormMode::Edit => {
                if let Some((name, value)) =
                    self.fields.first().map(|f| (f.name.clone(), f.value.clone()))
                {
                    self.touched.insert(name.clone());
                    self.validate_field(&name, &value);
                }
                self.primary_filled()
            }
        };
        if !ready {
            return Err(SubmitRefused::Invalid);
        }

        self.status = SubmissionStatus::Submitting;
        self.banner = None;
        Ok(self.values_json())
    }

    /// Apply the backend's answer
    pub fn finish_submit(
        &mut self,
        result: Result<Option<Flash>, BackendError>,
        success_message: &str,
    ) -> SubmitOutcome {
        match result {
            Ok(flash) => {
                self.clear_sensitive();
                self.status = SubmissionStatus::Succeeded;
                self.banner = None;
                SubmitOutcome::Succeeded(flash.unwrap_or_else(|| Flash::success(success_message)))
            }
            Err(BackendError::Validation { errors, message }) => {
                self.merge_remote_errors(errors, message);
                self.status = SubmissionStatus::Failed;
                SubmitOutcome::Rejected
            }
            Err(err) => {
                tracing::warn!("submission failed: {err}");
                let message = err.server_message().unwrap_or(GENERIC_FAILURE).to_string();
                self.banner = Some(message.clone());
                self.status = SubmissionStatus::Failed;
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Lock the form and start sending it through `channel`.
    ///
    /// The form stays `Submitting` until the returned future's output is
    /// passed to [`finish_submit`](Self::finish_submit). The future owns its
    /// payload, so it can run on another task while the form is drawn.
    pub fn submit<C>(
        &mut self,
        channel: Arc<C>,
        route: Route,
    ) -> Result<PendingSubmission, SubmitRefused>
    where
        C: SubmissionChannel + ?Sized + 'static,
    {
        let payload = self.begin_submit()?;
        tracing::debug!(route = route.name(), "submitting form");
        Ok(Box::pin(async move { channel.dispatch(route, payload).await }))
    }

    /// Backend errors replace local ones and are always shown
    fn merge_remote_errors(
        &mut self,
        errors: BTreeMap<String, Vec<String>>,
        summary: Option<String>,
    ) {
        let mut shown = false;
        for (name, messages) in errors {
            let Some(message) = messages.into_iter().find(|m| !m.trim().is_empty()) else {
                continue;
            };
            shown = true;
            if self.index_of(&name).is_some() {
                self.touched.insert(name.clone());
                self.errors.insert(name, message);
            } else {
                // Not a field of this form
                self.banner = Some(message);
            }
        }
        if !shown {
            let message = summary
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            self.banner = Some(message);
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.fields.get(self.active_field_index) else {
            return;
        };
        let (name, value) = (field.name.clone(), field.with_char(c));
        self.set_field(&name, value);
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        let Some(field) = self.fields.get(self.active_field_index) else {
            return;
        };
        let (name, value) = (field.name.clone(), field.without_last_char());
        self.set_field(&name, value);
    }

    pub fn active_field_ref(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_ref().is_some_and(|f| f.is_multiline)
    }

    /// The row after the last field holds the submit button
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Wipe password values from memory
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut().filter(|f| f.is_sensitive()) {
            field.clear();
        }
    }

    /// Called when the form leaves the screen
    pub fn unmount(&mut self) {
        self.clear_sensitive();
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.clear_sensitive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSubmissionChannel;
    use crate::state::forms::validation::{INVALID_EMAIL, SHORT_PASSWORD};
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    fn create_form() -> FormController {
        FormController::new(
            FormMode::Create,
            vec![
                FormField::text("name", "Name", false).required(),
                FormField::email("email", "Email").required(),
                FormField::phone("phone", "Phone"),
                FormField::password("password", "Password").required(),
            ],
        )
    }

    fn edit_form() -> FormController {
        FormController::new(
            FormMode::Edit,
            vec![
                FormField::text("name", "Name", false)
                    .required()
                    .with_original(text("Ada Lovelace")),
                FormField::email("email", "Email")
                    .required()
                    .with_original(text("ada@example.com")),
                FormField::phone("phone", "Phone"),
                FormField::password("password", "Password"),
            ],
        )
    }

    fn fill_valid(form: &mut FormController) {
        form.set_field("name", text("Ada Lovelace"));
        form.set_field("email", text("ada@example.com"));
        form.set_field("phone", text("5551234567"));
        form.set_field("password", text("correct-horse"));
    }

    mod touched_gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_invalid_field_shows_no_error() {
            let form = create_form();
            // Aggregate check records nothing
            assert!(!form.is_valid());
            assert!(form.visible_error("email").is_none());
            assert!(form.visible_error("name").is_none());
        }

        #[test]
        fn test_error_hidden_until_touched() {
            let mut form = create_form();
            let value = text("bad-email");
            form.validate_field("email", &value);
            assert_eq!(form.error("email"), Some(INVALID_EMAIL));
            assert!(form.visible_error("email").is_none());
            form.set_field("email", value);
            assert_eq!(form.visible_error("email"), Some(INVALID_EMAIL));
        }

        #[test]
        fn test_error_cleared_when_field_becomes_valid() {
            let mut form = create_form();
            form.set_field("email", text("bad-email"));
            form.set_field("email", text("ada@example.com"));
            assert!(form.visible_error("email").is_none());
            assert!(form.error("email").is_none());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_bad_email_scenario() {
            let mut form = create_form();
            form.set_field("name", text("Ada"));
            form.set_field("email", text("bad-email"));
            assert_eq!(form.visible_error("email"), Some(INVALID_EMAIL));
            assert!(form.submit_disabled());
        }

        #[test]
        fn test_short_password_scenario() {
            let mut form = create_form();
            fill_valid(&mut form);
            form.set_field("password", text("short"));
            assert!(form.submit_disabled());
            assert_eq!(form.begin_submit(), Err(SubmitRefused::Invalid));
            assert_eq!(form.visible_error("password"), Some(SHORT_PASSWORD));
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_validate_all_touches_everything() {
            let mut form = create_form();
            assert!(!form.validate_all());
            for name in ["name", "email", "phone", "password"] {
                assert!(form.is_touched(name), "{name} not touched");
            }
            assert_eq!(form.visible_error("name"), Some("Name is required"));
            // Optional blank phone is fine
            assert!(form.visible_error("phone").is_none());
        }

        #[test]
        fn test_unchanged_value_is_exempt_in_edit_mode() {
            let mut form = FormController::new(
                FormMode::Edit,
                vec![FormField::email("email", "Email")
                    .required()
                    .with_original(text("legacy-address"))],
            );
            // The stored value would fail the regex, so passing proves no check ran
            assert!(form.validate_field("email", &text("legacy-address")));
            assert!(!form.validate_field("email", &text("legacy-address2")));
        }

        #[test]
        fn test_no_exemption_in_create_mode() {
            let mut form = FormController::new(
                FormMode::Create,
                vec![FormField::email("email", "Email").with_original(text("legacy-address"))],
            );
            assert!(!form.validate_field("email", &text("legacy-address")));
        }

        #[test]
        fn test_phone_reformatted_on_set() {
            let mut form = create_form();
            form.set_field("phone", text("5551234567"));
            assert_eq!(form.text("phone"), "555-123-4567");
        }

        #[test]
        fn test_typing_into_active_field() {
            let mut form = create_form();
            form.set_active_field(2);
            for c in "555123".chars() {
                form.input_char(c);
            }
            assert_eq!(form.text("phone"), "555-123");
            assert!(form.is_touched("phone"));
            form.backspace();
            assert_eq!(form.text("phone"), "555-12");
        }

        #[test]
        fn test_set_unknown_field_is_ignored() {
            let mut form = create_form();
            form.set_field("nope", text("x"));
            assert!(!form.is_touched("nope"));
        }
    }

    mod submit_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_disabled_truth_table() {
            use FormMode::*;
            use SubmissionStatus::*;
            for mode in [Create, Edit] {
                for valid in [true, false] {
                    for filled in [true, false] {
                        assert!(submit_disabled(Submitting, valid, mode, filled));
                    }
                }
            }
            assert!(!submit_disabled(Idle, true, Create, false));
            assert!(submit_disabled(Idle, false, Create, true));
            assert!(!submit_disabled(Failed, false, Edit, true));
            assert!(submit_disabled(Succeeded, true, Edit, false));
        }

        #[test]
        fn test_edit_with_unchanged_email_is_allowed() {
            let mut form = edit_form();
            assert!(!form.submit_disabled());
            let payload = form.begin_submit().unwrap();
            assert_eq!(payload["email"], "ada@example.com");
            // Blank password means "keep current"
            assert!(payload.get("password").is_none());
        }

        #[test]
        fn test_edit_with_blank_name_is_blocked() {
            let mut form = edit_form();
            form.set_field("name", text(""));
            assert!(form.submit_disabled());
            assert_eq!(form.begin_submit(), Err(SubmitRefused::Invalid));
            assert_eq!(form.visible_error("name"), Some("Name is required"));
        }

        #[test]
        fn test_second_begin_is_refused_while_in_flight() {
            let mut form = create_form();
            fill_valid(&mut form);
            assert!(form.begin_submit().is_ok());
            assert_eq!(form.status(), SubmissionStatus::Submitting);
            assert!(form.submit_disabled());
            assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));
        }

        #[test]
        fn test_buttons_row_is_last() {
            let mut form = create_form();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_clears_password_and_returns_flash() {
            let mut channel = MockSubmissionChannel::new();
            channel
                .expect_dispatch()
                .withf(|route, body| {
                    route.name() == "admin.users.store"
                        && body["email"] == "ada@example.com"
                        && body["password"] == "correct-horse"
                })
                .times(1)
                .returning(|_, _| Ok(Some(Flash::success("User created"))));

            let mut form = create_form();
            fill_valid(&mut form);
            let pending = form
                .submit(Arc::new(channel), Route::named("admin.users.store"))
                .unwrap();
            // Locked until the answer is applied
            assert_eq!(form.status(), SubmissionStatus::Submitting);
            assert!(form.submit_disabled());
            let outcome = form.finish_submit(pending.await, "Saved");

            assert_eq!(outcome, SubmitOutcome::Succeeded(Flash::success("User created")));
            assert_eq!(form.status(), SubmissionStatus::Succeeded);
            assert_eq!(form.text("password"), "");
            assert_eq!(form.text("name"), "Ada Lovelace");
        }

        #[tokio::test]
        async fn test_success_without_flash_uses_default_message() {
            let mut channel = MockSubmissionChannel::new();
            channel.expect_dispatch().returning(|_, _| Ok(None));

            let mut form = edit_form();
            let pending = form
                .submit(Arc::new(channel), Route::named("admin.users.update").with("id", 1))
                .unwrap();
            let outcome = form.finish_submit(pending.await, "User saved");
            assert_eq!(outcome, SubmitOutcome::Succeeded(Flash::success("User saved")));
        }

        #[tokio::test]
        async fn test_invalid_form_never_dispatches() {
            let mut channel = MockSubmissionChannel::new();
            channel.expect_dispatch().never();

            let mut form = create_form();
            let result = form.submit(Arc::new(channel), Route::named("admin.users.store"));
            assert!(matches!(result, Err(SubmitRefused::Invalid)));
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_refused() {
            let mut channel = MockSubmissionChannel::new();
            channel.expect_dispatch().times(1).returning(|_, _| Ok(None));
            let channel = Arc::new(channel);

            let mut form = edit_form();
            let pending = form
                .submit(channel.clone(), Route::named("admin.users.update").with("id", 1))
                .unwrap();
            let again = form.submit(channel, Route::named("admin.users.update").with("id", 1));
            assert!(matches!(again, Err(SubmitRefused::InFlight)));
            form.finish_submit(pending.await, "Saved");
            assert_eq!(form.status(), SubmissionStatus::Succeeded);
        }

        #[test]
        fn test_remote_errors_override_local_and_keep_values() {
            let mut form = create_form();
            fill_valid(&mut form);
            form.begin_submit().unwrap();

            let mut errors = BTreeMap::new();
            errors.insert(
                "email".to_string(),
                vec!["The email has already been taken.".to_string()],
            );
            errors.insert("phone".to_string(), vec![]);
            let outcome = form.finish_submit(
                Err(BackendError::Validation {
                    errors,
                    message: None,
                }),
                "Saved",
            );

            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(form.status(), SubmissionStatus::Failed);
            assert_eq!(
                form.visible_error("email"),
                Some("The email has already been taken.")
            );
            assert!(form.visible_error("phone").is_none());
            assert_eq!(form.text("email"), "ada@example.com");
            assert_eq!(form.text("password"), "correct-horse");
            // Can resubmit after correcting
            assert!(form.begin_submit().is_ok());
        }

        #[test]
        fn test_remote_error_for_unknown_field_goes_to_banner() {
            let mut form = create_form();
            fill_valid(&mut form);
            form.begin_submit().unwrap();
            let mut errors = BTreeMap::new();
            errors.insert("team_id".to_string(), vec!["Team is closed".to_string()]);
            form.finish_submit(
                Err(BackendError::Validation {
                    errors,
                    message: None,
                }),
                "Saved",
            );
            assert_eq!(form.banner(), Some("Team is closed"));
        }

        #[test]
        fn test_empty_remote_errors_fall_back_to_generic_banner() {
            let mut form = edit_form();
            form.begin_submit().unwrap();
            let mut errors = BTreeMap::new();
            errors.insert("email".to_string(), vec![]);
            let outcome = form.finish_submit(
                Err(BackendError::Validation {
                    errors,
                    message: None,
                }),
                "Saved",
            );
            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(form.status(), SubmissionStatus::Failed);
            assert_eq!(form.banner(), Some(GENERIC_FAILURE));
            assert!(form.visible_error("email").is_none());
        }

        #[test]
        fn test_empty_remote_errors_use_server_summary() {
            let mut form = edit_form();
            form.begin_submit().unwrap();
            form.finish_submit(
                Err(BackendError::Validation {
                    errors: BTreeMap::new(),
                    message: Some("The given data was invalid.".to_string()),
                }),
                "Saved",
            );
            assert_eq!(form.banner(), Some("The given data was invalid."));
        }

        #[test]
        fn test_server_error_without_detail_uses_generic_banner() {
            let mut form = create_form();
            fill_valid(&mut form);
            form.begin_submit().unwrap();
            let outcome = form.finish_submit(
                Err(BackendError::Server {
                    status: 500,
                    message: None,
                }),
                "Saved",
            );
            assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_FAILURE.to_string()));
            assert_eq!(form.banner(), Some(GENERIC_FAILURE));
            assert_eq!(form.status(), SubmissionStatus::Failed);
        }

        #[test]
        fn test_server_error_with_detail() {
            let mut form = edit_form();
            form.begin_submit().unwrap();
            form.finish_submit(
                Err(BackendError::Server {
                    status: 403,
                    message: Some("You cannot edit this user".to_string()),
                }),
                "Saved",
            );
            assert_eq!(form.banner(), Some("You cannot edit this user"));
        }

        #[test]
        fn test_unmount_clears_password() {
            let mut form = create_form();
            form.set_field("password", text("correct-horse"));
            form.unmount();
            assert_eq!(form.text("password"), "");
        }
    }
}
