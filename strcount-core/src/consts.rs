/// Marker written for any missing or unparseable value.
pub const MISSING_VALUE: &str = ".";

/// Identifier of the synthetic genome-wide totals row.
pub const STATISTICS_ID: &str = "Statistics";
