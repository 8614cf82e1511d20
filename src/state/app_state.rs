//! Application state definitions

use super::forms::FormState;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Users,
    UserCreate,
    UserEdit,
    Orders,
    Legal,
    LegalEdit,
    Catalog,
    Upload,
}

impl View {
    /// Form views are skipped when navigating back
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            View::UserCreate | View::UserEdit | View::LegalEdit | View::Upload
        )
    }
}

/// Account role on the website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Planner,
    #[default]
    Customer,
}

impl Role {
    pub fn next(&self) -> Self {
        match self {
            Self::Admin => Self::Planner,
            Self::Planner => Self::Customer,
            Self::Customer => Self::Admin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Planner => "Planner",
            Self::Customer => "Customer",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Planner => "planner",
            Self::Customer => "customer",
        }
    }
}

/// User account as listed in the back-office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Next status in the admin status cycle. Cancelled orders are terminal.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Completed),
            Self::Completed => Some(Self::Pending),
            Self::Cancelled => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Payment state reported by the payment processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

/// Service booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub reference: String,
    pub customer_name: String,
    pub package_name: String,
    pub event_date: NaiveDate,
    pub total_cents: u64,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

impl Order {
    pub fn can_cancel(&self) -> bool {
        self.status != OrderStatus::Cancelled && self.status != OrderStatus::Completed
    }
}

/// Legal page content (terms, privacy, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Service package offered on the website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price_cents: u64,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Preset price ceilings cycled by the catalog filter
pub const PRICE_CEILINGS: [Option<u64>; 4] = [None, Some(100_000), Some(250_000), Some(500_000)];

/// Catalog filter, sent as query params and mirrored locally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Option<String>,
    pub max_price_cents: Option<u64>,
}

impl CatalogFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(max) = self.max_price_cents {
            query.push(("max_price", max.to_string()));
        }
        query
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() && !item.name.to_lowercase().contains(&search) {
            return false;
        }
        if let Some(category) = &self.category {
            if !item.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if item.price_cents > max {
                return false;
            }
        }
        true
    }

    /// Advance to the next category among `categories`, then back to "all"
    pub fn cycle_category(&mut self, categories: &[String]) {
        self.category = match &self.category {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|i| categories.get(i + 1))
                .cloned(),
        };
    }

    pub fn cycle_max_price(&mut self) {
        let index = PRICE_CEILINGS
            .iter()
            .position(|p| *p == self.max_price_cents)
            .unwrap_or(0);
        self.max_price_cents = PRICE_CEILINGS[(index + 1) % PRICE_CEILINGS.len()];
    }
}

/// Format an amount in cents for display
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Destructive action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingKind {
    DeleteUser { id: u64 },
    CancelOrder { id: u64 },
}

/// Pending destructive action shown in the confirmation dialog
#[derive(Debug, Clone)]
pub struct PendingAction {
    pub kind: PendingKind,
    /// Display text (user name, order reference)
    pub entity_display: String,
    /// Selected option (false = Cancel, true = Confirm)
    pub selected_option: bool,
}

impl PendingAction {
    pub fn new(kind: PendingKind, entity_display: impl Into<String>) -> Self {
        Self {
            kind,
            entity_display: entity_display.into(),
            selected_option: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PendingKind::DeleteUser { .. } => "Confirm Delete",
            PendingKind::CancelOrder { .. } => "Confirm Cancellation",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self.kind {
            PendingKind::DeleteUser { .. } => "delete",
            PendingKind::CancelOrder { .. } => "cancel",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,
    pub sidebar_index: usize,

    // Data
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub legal_documents: Vec<LegalDocument>,
    pub catalog: Vec<CatalogItem>,
    /// Categories seen across catalog loads, so filtered loads can still cycle
    pub known_categories: Vec<String>,

    // Selection
    pub selected_index: usize,

    // Catalog filter
    pub catalog_filter: CatalogFilter,
    pub editing_search: bool,

    // UI state
    pub backend_reachable: bool,
    pub pending_action: Option<PendingAction>,
    pub error_queue: VecDeque<String>,

    // Form state
    pub form: FormState,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Catalog items passing the current filter
    pub fn filtered_catalog(&self) -> Vec<&CatalogItem> {
        self.catalog
            .iter()
            .filter(|item| self.catalog_filter.matches(item))
            .collect()
    }

    /// Replace the catalog and remember its categories
    pub fn set_catalog(&mut self, items: Vec<CatalogItem>) {
        for item in &items {
            if !self.known_categories.contains(&item.category) {
                self.known_categories.push(item.category.clone());
            }
        }
        self.catalog = items;
        self.clamp_selection();
    }

    /// Distinct catalog categories in first-seen order
    pub fn catalog_categories(&self) -> Vec<String> {
        let mut categories = self.known_categories.clone();
        for item in &self.catalog {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Keep the selection inside the current list after a reload
    pub fn clamp_selection(&mut self) {
        let len = self.current_list_len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.orders.get(self.selected_index)
    }

    pub fn selected_legal_document(&self) -> Option<&LegalDocument> {
        self.legal_documents.get(self.selected_index)
    }

    /// Number of rows in the list shown by the current view
    pub fn current_list_len(&self) -> usize {
        match self.current_view {
            View::Users => self.users.len(),
            View::Orders => self.orders.len(),
            View::Legal => self.legal_documents.len(),
            View::Catalog => self.filtered_catalog().len(),
            _ => 0,
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    /// Currently displayed error, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the currently displayed error
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Unmount the active form, wiping its password fields, and drop it
    pub fn clear_form(&mut self) {
        self.form.unmount();
        self.form = FormState::None;
    }
}
