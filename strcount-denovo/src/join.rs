use log::info;

use strcount_core::{DenovoCandidate, LocusTable, RepeatLocus, SampleRole, StrcountError, Trio};

fn lookup<'a>(
    tables: &'a Trio<LocusTable>,
    role: SampleRole,
    id: &str,
) -> Result<&'a RepeatLocus, StrcountError> {
    tables
        .get(role)
        .get(id)
        .ok_or_else(|| StrcountError::MissingLocus {
            id: id.to_string(),
            role,
        })
}

///
/// Copy per-sample coverage and the locus motif lengths into every candidate.
///
/// Every candidate identifier must be present in all three tables; the first
/// one that isn't aborts the join.
///
/// # Arguments
/// - candidates: candidates as read from the candidate file
/// - tables: the father, mother and child genotype tables
///
pub fn join_trio(
    candidates: &mut [DenovoCandidate],
    tables: &Trio<LocusTable>,
) -> Result<(), StrcountError> {
    for candidate in candidates.iter_mut() {
        let father = lookup(tables, SampleRole::Father, &candidate.id)?;
        let mother = lookup(tables, SampleRole::Mother, &candidate.id)?;
        let child = lookup(tables, SampleRole::Child, &candidate.id)?;

        candidate.coverage = Trio::new(
            father.coverage.clone(),
            mother.coverage.clone(),
            child.coverage.clone(),
        );
        // the three samples share one motif definition per locus
        candidate.motif_lengths = child.motif_lengths();
    }

    info!("Joined {} candidates against the trio", candidates.len());

    Ok(())
}
