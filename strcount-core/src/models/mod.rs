pub mod candidate;
pub mod counts;
pub mod locus;
pub mod origin;
pub mod pair;
pub mod status;
pub mod trio;

// re-export for cleaner imports
pub use self::candidate::{DenovoCandidate, FilterFlags};
pub use self::counts::UnitCounts;
pub use self::locus::{LocusTable, RepeatLocus};
pub use self::origin::{AlleleOrigin, Parent};
pub use self::pair::AllelePair;
pub use self::status::DenovoStatus;
pub use self::trio::{SampleRole, Trio};
