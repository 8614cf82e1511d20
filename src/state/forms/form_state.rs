//! Form state management and form structs

use super::controller::{Form, FormController, FormMode};
use super::field::{FieldValue, FormField};
use crate::backend::Route;
use crate::state::{LegalDocument, User};
use std::path::PathBuf;

/// Enum representing all possible form states
#[derive(Debug, Default)]
pub enum FormState {
    #[default]
    None,
    UserCreate(UserForm),
    UserEdit(UserForm),
    LegalEdit(LegalDocumentForm),
    Upload(UploadForm),
}

impl FormState {
    pub fn controller(&self) -> Option<&FormController> {
        match self {
            FormState::None => None,
            FormState::UserCreate(f) | FormState::UserEdit(f) => Some(&f.controller),
            FormState::LegalEdit(f) => Some(&f.controller),
            FormState::Upload(f) => Some(&f.controller),
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut FormController> {
        match self {
            FormState::None => None,
            FormState::UserCreate(f) | FormState::UserEdit(f) => Some(&mut f.controller),
            FormState::LegalEdit(f) => Some(&mut f.controller),
            FormState::Upload(f) => Some(&mut f.controller),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(c) = self.controller_mut() {
            c.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(c) = self.controller_mut() {
            c.prev_field();
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.controller()
            .is_some_and(FormController::is_active_field_multiline)
    }

    /// Wipe sensitive values of the mounted form before it is taken down
    pub fn unmount(&mut self) {
        if let Some(c) = self.controller_mut() {
            c.unmount();
        }
    }
}

/// User create/edit form
#[derive(Debug)]
pub struct UserForm {
    /// Set when editing an existing account
    pub user_id: Option<u64>,
    pub controller: FormController,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            user_id: None,
            controller: FormController::new(
                FormMode::Create,
                vec![
                    FormField::text("name", "Name", false).required(),
                    FormField::email("email", "Email").required(),
                    FormField::phone("phone", "Phone"),
                    FormField::password("password", "Password").required(),
                    FormField::role("role", "Role"),
                    FormField::flag("is_active", "Active").with_value(FieldValue::Flag(true)),
                ],
            ),
        }
    }

    pub fn edit(user: &User) -> Self {
        let text = |s: &str| FieldValue::Text(s.to_string());
        Self {
            user_id: Some(user.id),
            controller: FormController::new(
                FormMode::Edit,
                vec![
                    FormField::text("name", "Name", false)
                        .required()
                        .with_original(text(&user.name)),
                    FormField::email("email", "Email")
                        .required()
                        .with_original(text(&user.email)),
                    FormField::phone("phone", "Phone")
                        .with_original(text(user.phone.as_deref().unwrap_or(""))),
                    // Blank keeps the current password
                    FormField::password("password", "New password (optional)"),
                    FormField::role("role", "Role").with_original(FieldValue::Role(user.role)),
                    FormField::flag("is_active", "Active")
                        .with_original(FieldValue::Flag(user.is_active)),
                ],
            ),
        }
    }

    pub fn route(&self) -> Route {
        match self.user_id {
            Some(id) => Route::named("admin.users.update").with("id", id),
            None => Route::named("admin.users.store"),
        }
    }
}

/// Legal document content editor
#[derive(Debug)]
pub struct LegalDocumentForm {
    pub slug: String,
    pub controller: FormController,
}

impl LegalDocumentForm {
    pub fn edit(document: &LegalDocument) -> Self {
        Self {
            slug: document.slug.clone(),
            controller: FormController::new(
                FormMode::Edit,
                vec![
                    FormField::text("title", "Title", false)
                        .required()
                        .with_original(FieldValue::Text(document.title.clone())),
                    FormField::text("content", "Content", true)
                        .required()
                        .with_original(FieldValue::Text(document.content.clone())),
                ],
            ),
        }
    }

    pub fn route(&self) -> Route {
        Route::named("admin.legal.update").with("slug", &self.slug)
    }
}

/// Catalog image upload form
#[derive(Debug)]
pub struct UploadForm {
    pub controller: FormController,
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            controller: FormController::new(
                FormMode::Create,
                vec![FormField::text("path", "Image file path", false).required()],
            ),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(self.controller.text("path").trim())
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}
