pub mod candidates;
pub mod consts;
pub mod report;
pub mod trgt;

// re-exports
pub use candidates::*;
pub use report::*;
pub use trgt::*;
