//! HTTP backend of the admin back-office

mod client;
mod error;
mod routes;
mod traits;

pub use client::BackendClient;
pub use error::BackendError;
pub use routes::{Route, RouteError, Verb};
pub use traits::{AdminBackend, SubmissionChannel};

#[cfg(test)]
pub use traits::MockSubmissionChannel;
