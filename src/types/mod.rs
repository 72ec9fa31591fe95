//! Shared types.

mod response;

pub use response::{ApiResponse, Created};
