//! Application state module

mod app_state;
pub mod forms;
mod notification;
mod upload;

pub use app_state::*;
pub use forms::*;
pub use notification::*;
pub use upload::*;
