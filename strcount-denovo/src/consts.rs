pub const MIN_SAMPLE_COVERAGE: u64 = 10;
pub const MIN_DENOVO_COVERAGE: u32 = 2;
pub const MIN_CHILD_RATIO: f64 = 0.2;
pub const MAX_PARENT_OVERLAP_RATIO: f64 = 0.05;

pub const MOTIF_COUNT_DELIM: char = '_';
