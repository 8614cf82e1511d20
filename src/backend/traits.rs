//! Trait abstraction for the backend to enable mocking in tests

use super::error::BackendError;
use super::routes::Route;
use crate::state::{CatalogFilter, CatalogItem, Flash, LegalDocument, Order, User};
use async_trait::async_trait;
use serde_json::Value;

/// Sends a create/update/delete to a named route.
///
/// `Ok` carries the flash message the backend attached to its answer, if any.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    async fn dispatch(&self, route: Route, body: Value) -> Result<Option<Flash>, BackendError>;
}

/// Read side of the admin back-office
#[async_trait]
pub trait AdminBackend: SubmissionChannel {
    /// Check if the backend is reachable
    async fn check_connection(&self) -> bool;

    /// List user accounts
    async fn list_users(&self) -> Result<Vec<User>, BackendError>;

    /// List bookings
    async fn list_orders(&self) -> Result<Vec<Order>, BackendError>;

    /// List legal documents
    async fn list_legal_documents(&self) -> Result<Vec<LegalDocument>, BackendError>;

    /// List catalog items matching `filter`
    async fn list_catalog(&self, filter: &CatalogFilter) -> Result<Vec<CatalogItem>, BackendError>;
}
