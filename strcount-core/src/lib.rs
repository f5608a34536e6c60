//! Shared models and helpers for counting de novo tandem-repeat unit changes
//! across a parent-child trio.
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::StrcountError;
pub use models::*;
