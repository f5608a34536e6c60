//! De novo tandem-repeat unit counting for a parent-child trio.
//!
//! Candidates are joined against the three genotype tables, passed through
//! five independent filters, then each candidate allele is attributed to its
//! parental source allele and the per unit-length changes are tallied.
pub mod aggregate;
pub mod consts;
pub mod filter;
pub mod join;
pub mod pipeline;
pub mod universe;

// re-exports
pub use aggregate::*;
pub use filter::*;
pub use join::*;
pub use pipeline::*;
pub use universe::*;
