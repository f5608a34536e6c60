use thiserror::Error;

use crate::models::SampleRole;

#[derive(Error, Debug)]
pub enum StrcountError {
    #[error("Malformed record in {path} at line {line}: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Locus {id} is missing from the {role} genotype table")]
    MissingLocus { id: String, role: SampleRole },
}
