//! Form domain layer
//!
//! Type-safe field values, local validation rules and the controller that
//! drives a form from first keystroke to the backend's answer.

mod controller;
mod field;
mod form_state;
pub mod validation;

pub use controller::{
    submit_disabled, Form, FormController, FormMode, SubmissionStatus, SubmitOutcome,
    SubmitRefused, GENERIC_FAILURE,
};
pub use field::{FieldKind, FieldValue, FormField};
pub use form_state::{FormState, LegalDocumentForm, UploadForm, UserForm};
