use std::fmt::{self, Display};

use crate::consts::MISSING_VALUE;

///
/// De novo status label of a candidate. `Y:+` and `Y:-` mark a plausible de
/// novo expansion or contraction; anything else is kept verbatim.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenovoStatus {
    Plus,
    Minus,
    Other(String),
}

impl Default for DenovoStatus {
    fn default() -> Self {
        DenovoStatus::Other(MISSING_VALUE.to_string())
    }
}

impl DenovoStatus {
    pub fn parse(label: &str) -> Self {
        match label {
            "Y:+" => DenovoStatus::Plus,
            "Y:-" => DenovoStatus::Minus,
            other => DenovoStatus::Other(other.to_string()),
        }
    }

    pub fn is_denovo(&self) -> bool {
        matches!(self, DenovoStatus::Plus | DenovoStatus::Minus)
    }
}

impl Display for DenovoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenovoStatus::Plus => write!(f, "Y:+"),
            DenovoStatus::Minus => write!(f, "Y:-"),
            DenovoStatus::Other(label) => write!(f, "{}", label),
        }
    }
}
