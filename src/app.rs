//! Application state and core logic

use crate::backend::{AdminBackend, BackendClient, BackendError, Route};
use crate::config::AdminConfig;
use crate::state::{
    AppState, Flash, FormState, LegalDocumentForm, Notification, PendingAction, PendingKind,
    SubmitOutcome, UploadError, UploadFile, UploadForm, UploadHelper, UploadTransport, UserForm,
    View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Sections reachable from the sidebar, in display order
pub const SECTIONS: [View; 4] = [View::Users, View::Orders, View::Legal, View::Catalog];

type UploadResult = Result<Option<String>, UploadError>;
type DispatchResult = Result<Option<Flash>, BackendError>;

/// Upload running on its own task
struct UploadTask {
    handle: JoinHandle<()>,
    result: oneshot::Receiver<UploadResult>,
}

/// Form submission awaiting the backend on its own task
struct SubmitTask {
    handle: JoinHandle<()>,
    result: oneshot::Receiver<DispatchResult>,
    success_message: &'static str,
}

/// Plain or shifted characters; chords with Ctrl, Alt or Super are commands
fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend used for reads and submissions
    backend: Arc<dyn AdminBackend>,
    /// Upload helper; its progress feeds the gauge
    pub uploads: UploadHelper,
    upload_task: Option<UploadTask>,
    submit_task: Option<SubmitTask>,
    /// Flash toast
    pub notification: Notification,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let client = Arc::new(BackendClient::new(config)?);
        Ok(Self::with_backend(
            client.clone(),
            client,
            config.toast_duration(),
        ))
    }

    pub fn with_backend(
        backend: Arc<dyn AdminBackend>,
        transport: Arc<dyn UploadTransport>,
        toast_duration: Duration,
    ) -> Self {
        Self {
            state: AppState::default(),
            backend,
            uploads: UploadHelper::new(transport),
            upload_task: None,
            submit_task: None,
            notification: Notification::with_duration(None, Instant::now(), toast_duration),
            quit: false,
        }
    }

    /// Check the backend and load the first section
    pub async fn connect(&mut self) {
        self.state.backend_reachable = self.backend.check_connection().await;
        if self.state.backend_reachable {
            self.load_view(self.state.current_view).await;
        } else {
            tracing::warn!("backend unreachable at startup");
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_task.is_some()
    }

    /// A form submission is waiting for the backend
    pub fn is_submitting(&self) -> bool {
        self.submit_task.is_some()
    }

    /// Per-frame housekeeping: expire the toast and collect finished
    /// submissions and uploads
    pub async fn tick(&mut self, now: Instant) {
        self.notification.tick(now);
        self.poll_submit(now).await;
        self.poll_upload(now).await;
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel_upload();
            if let Some(task) = self.submit_task.take() {
                task.handle.abort();
            }
            self.state.clear_form();
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle confirmation dialog (modal)
        if self.state.pending_action.is_some() {
            self.handle_confirm_dialog_key(key).await;
            return Ok(());
        }

        if self.state.current_view.is_form() {
            self.handle_form_key(key).await;
            return Ok(());
        }

        if self.state.editing_search {
            self.handle_search_key(key).await;
            return Ok(());
        }

        // Keys shared by every list view
        match key.code {
            KeyCode::Char('q') => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('x') if self.notification.is_visible() => {
                self.notification.dismiss();
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_section(index).await;
                return Ok(());
            }
            KeyCode::Tab => {
                self.switch_section((self.state.sidebar_index + 1) % SECTIONS.len())
                    .await;
                return Ok(());
            }
            KeyCode::BackTab => {
                let index = (self.state.sidebar_index + SECTIONS.len() - 1) % SECTIONS.len();
                self.switch_section(index).await;
                return Ok(());
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.current_list_len());
                return Ok(());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
                return Ok(());
            }
            KeyCode::Char('r') => {
                self.load_view(self.state.current_view).await;
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Users => self.handle_users_key(key),
            View::Orders => self.handle_orders_key(key).await,
            View::Legal => self.handle_legal_key(key),
            View::Catalog => self.handle_catalog_key(key).await,
            _ => {}
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        if !view.is_form() {
            self.state.reset_selection();
        }
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form() {
                continue;
            }
            self.state.current_view = view;
            self.state.clamp_selection();
            return;
        }
    }

    async fn switch_section(&mut self, index: usize) {
        let Some(&view) = SECTIONS.get(index) else {
            return;
        };
        self.state.sidebar_index = index;
        self.state.view_history.clear();
        self.state.current_view = view;
        self.state.reset_selection();
        self.load_view(view).await;
    }

    /// Fetch the data a list view shows
    pub async fn load_view(&mut self, view: View) {
        let result = match view {
            View::Users => self.backend.list_users().await.map(|users| {
                self.state.users = users;
            }),
            View::Orders => self.backend.list_orders().await.map(|orders| {
                self.state.orders = orders;
            }),
            View::Legal => self.backend.list_legal_documents().await.map(|docs| {
                self.state.legal_documents = docs;
            }),
            View::Catalog => {
                let filter = self.state.catalog_filter.clone();
                self.backend
                    .list_catalog(&filter)
                    .await
                    .map(|items| self.state.set_catalog(items))
            }
            _ => return,
        };

        match result {
            Ok(()) => {
                self.state.backend_reachable = true;
                self.state.clamp_selection();
            }
            Err(e) => {
                if matches!(e, BackendError::Transport { .. }) {
                    self.state.backend_reachable = false;
                }
                self.push_error(format!("Failed to load data: {e}"));
            }
        }
    }

    /// Handle keys in Users view
    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => {
                self.state.form = FormState::UserCreate(UserForm::create());
                self.navigate(View::UserCreate);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let Some(user) = self.state.selected_user() else {
                    return;
                };
                self.state.form = FormState::UserEdit(UserForm::edit(user));
                self.navigate(View::UserEdit);
            }
            KeyCode::Char('d') => {
                if let Some(user) = self.state.selected_user() {
                    self.state.pending_action = Some(PendingAction::new(
                        PendingKind::DeleteUser { id: user.id },
                        format!("{} <{}>", user.name, user.email),
                    ));
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Orders view
    async fn handle_orders_key(&mut self, key: KeyEvent) {
        let Some(order) = self.state.selected_order().cloned() else {
            return;
        };
        match key.code {
            KeyCode::Char('s') => {
                let Some(next) = order.status.next() else {
                    self.push_error(format!(
                        "Order {} is cancelled and cannot change status",
                        order.reference
                    ));
                    return;
                };
                let route = Route::named("admin.orders.status").with("id", order.id);
                let fallback = format!("Order {} marked {}", order.reference, next.label());
                self.dispatch_action(route, json!({ "status": next }), fallback)
                    .await;
            }
            KeyCode::Char('c') => {
                if order.can_cancel() {
                    self.state.pending_action = Some(PendingAction::new(
                        PendingKind::CancelOrder { id: order.id },
                        format!("{} ({})", order.reference, order.customer_name),
                    ));
                } else {
                    self.push_error(format!(
                        "Order {} is {} and cannot be cancelled",
                        order.reference,
                        order.status.label()
                    ));
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Legal view
    fn handle_legal_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('e') | KeyCode::Enter) {
            let Some(document) = self.state.selected_legal_document() else {
                return;
            };
            self.state.form = FormState::LegalEdit(LegalDocumentForm::edit(document));
            self.navigate(View::LegalEdit);
        }
    }

    /// Handle keys in Catalog view
    async fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => {
                self.state.editing_search = true;
            }
            KeyCode::Char('c') => {
                let categories = self.state.catalog_categories();
                self.state.catalog_filter.cycle_category(&categories);
                self.state.reset_selection();
                self.load_view(View::Catalog).await;
            }
            KeyCode::Char('p') => {
                self.state.catalog_filter.cycle_max_price();
                self.state.reset_selection();
                self.load_view(View::Catalog).await;
            }
            KeyCode::Char('u') => {
                self.state.form = FormState::Upload(UploadForm::new());
                self.navigate(View::Upload);
            }
            _ => {}
        }
    }

    /// Typing into the catalog search box
    async fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.editing_search = false;
                self.state.reset_selection();
                self.load_view(View::Catalog).await;
            }
            KeyCode::Backspace => {
                self.state.catalog_filter.search.pop();
                self.state.reset_selection();
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                self.state.catalog_filter.search.push(c);
                self.state.reset_selection();
            }
            _ => {}
        }
    }

    /// Handle keys while a form is mounted
    async fn handle_form_key(&mut self, key: KeyEvent) {
        // Fields are locked until the backend answers
        if self.is_submitting() && !matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return;
        }
        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Save (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SAVE_MODIFIER) =>
            {
                self.submit_form().await;
            }
            KeyCode::Esc => {
                if self.is_uploading() {
                    self.cancel_upload();
                } else {
                    self.leave_form();
                }
            }
            KeyCode::Enter => {
                let on_buttons = self
                    .state
                    .form
                    .controller()
                    .is_some_and(|c| c.is_buttons_row_active());
                if on_buttons {
                    self.submit_form().await;
                } else if self.state.form.is_active_field_multiline() {
                    if let Some(c) = self.state.form.controller_mut() {
                        c.input_char('\n');
                    }
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(ch) if is_text_input(&key) => {
                if self.is_uploading() {
                    return;
                }
                if let Some(c) = self.state.form.controller_mut() {
                    c.input_char(ch);
                }
            }
            KeyCode::Backspace => {
                if self.is_uploading() {
                    return;
                }
                if let Some(c) = self.state.form.controller_mut() {
                    c.backspace();
                }
            }
            _ => {}
        }
    }

    /// Unmount the form and return to the list it came from
    fn leave_form(&mut self) {
        self.state.clear_form();
        self.go_back();
    }

    /// Submit whichever form is mounted
    pub async fn submit_form(&mut self) {
        if matches!(self.state.form, FormState::Upload(_)) {
            self.start_upload();
            return;
        }
        let (route, success_message) = match &self.state.form {
            FormState::None | FormState::Upload(_) => return,
            FormState::UserCreate(form) => (form.route(), "User created"),
            FormState::UserEdit(form) => (form.route(), "User updated"),
            FormState::LegalEdit(form) => (form.route(), "Document saved"),
        };
        let Some(controller) = self.state.form.controller_mut() else {
            return;
        };

        let pending = match controller.submit(self.backend.clone(), route) {
            Ok(pending) => pending,
            Err(refused) => {
                tracing::debug!("submission not sent: {refused}");
                return;
            }
        };
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            // Receiver is gone when the app quit mid-request
            let _ = tx.send(pending.await);
        });
        self.submit_task = Some(SubmitTask {
            handle,
            result: rx,
            success_message,
        });
    }

    /// Apply the backend's answer to the form that sent it
    async fn poll_submit(&mut self, now: Instant) {
        let Some(task) = self.submit_task.as_mut() else {
            return;
        };
        let result = match task.result.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(BackendError::Interrupted),
        };
        let success_message = task.success_message;
        self.submit_task = None;

        let Some(controller) = self.state.form.controller_mut() else {
            return;
        };
        match controller.finish_submit(result, success_message) {
            SubmitOutcome::Succeeded(flash) => {
                self.notification.rearm(flash, now);
                self.leave_form();
                self.load_view(self.state.current_view).await;
            }
            // Field errors and the banner render on the form itself
            SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => {}
        }
    }

    /// Handle keys for the confirmation dialog
    async fn handle_confirm_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => {
                self.state.pending_action = None;
            }
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                if let Some(ref mut action) = self.state.pending_action {
                    action.selected_option = !action.selected_option;
                }
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_action.take() {
                    if action.selected_option {
                        self.execute_pending(action).await;
                    }
                }
            }
            _ => {}
        }
    }

    /// Run a confirmed destructive action
    async fn execute_pending(&mut self, action: PendingAction) {
        let (route, fallback) = match action.kind {
            PendingKind::DeleteUser { id } => (
                Route::named("admin.users.destroy").with("id", id),
                format!("Deleted {}", action.entity_display),
            ),
            PendingKind::CancelOrder { id } => (
                Route::named("admin.orders.cancel").with("id", id),
                format!("Cancelled order {}", action.entity_display),
            ),
        };
        self.dispatch_action(route, json!({}), fallback).await;
    }

    /// Send a one-off write from a list view, then refresh the list
    async fn dispatch_action(&mut self, route: Route, body: serde_json::Value, fallback: String) {
        let name = route.name();
        match self.backend.dispatch(route, body).await {
            Ok(flash) => {
                let flash = flash.unwrap_or_else(|| Flash::success(fallback));
                self.notification.rearm(flash, Instant::now());
                self.load_view(self.state.current_view).await;
            }
            Err(e) => {
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{name} failed: {e}"));
                self.push_error(message);
            }
        }
    }

    /// Spawn the upload for the mounted upload form
    fn start_upload(&mut self) {
        if self.is_uploading() {
            return;
        }
        let FormState::Upload(form) = &mut self.state.form else {
            return;
        };
        if !form.controller.validate_all() {
            return;
        }
        let path = form.file_path();
        let endpoint = match Route::named("admin.uploads.image").resolve() {
            Ok((_, endpoint)) => endpoint,
            Err(e) => {
                self.push_error(e.to_string());
                return;
            }
        };

        let helper = self.uploads.clone();
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = match UploadFile::from_path(&path).await {
                Ok(file) => helper.upload(Some(file), &endpoint).await,
                Err(e) => Err(e),
            };
            // Receiver is gone when the upload was cancelled
            let _ = tx.send(result);
        });
        self.upload_task = Some(UploadTask { handle, result: rx });
    }

    /// Abort the running upload, if any
    pub fn cancel_upload(&mut self) {
        if let Some(task) = self.upload_task.take() {
            self.uploads.cancel();
            task.handle.abort();
            tracing::info!("upload cancelled by user");
        }
    }

    async fn poll_upload(&mut self, now: Instant) {
        let Some(task) = self.upload_task.as_mut() else {
            return;
        };
        let result = match task.result.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.upload_task = None;
                return;
            }
        };
        self.upload_task = None;

        match result {
            Ok(Some(path)) => {
                self.notification
                    .rearm(Flash::success(format!("Uploaded {path}")), now);
                if matches!(self.state.form, FormState::Upload(_)) {
                    self.leave_form();
                }
                self.load_view(View::Catalog).await;
            }
            Ok(None) | Err(UploadError::Cancelled) => {}
            Err(e) => {
                self.notification
                    .rearm(Flash::error(format!("Upload failed: {e}")), now);
            }
        }
    }
}
