use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use strcount_core::{DenovoCandidate, LocusTable, Trio};
use strcount_io::{read_candidates, read_locus_table, write_reports};

use crate::aggregate::{UnitCountTotals, count_unit_sizes};
use crate::filter::{FilterParams, apply_filters};
use crate::join::join_trio;
use crate::universe::UnitLengthUniverse;

///
/// Input files for one trio.
///
#[derive(Debug, Clone)]
pub struct TrioPaths {
    pub candidates: PathBuf,
    pub child: PathBuf,
    pub father: PathBuf,
    pub mother: PathBuf,
}

///
/// The augmented candidate table, Statistics row last, together with the
/// unit-length universe that defines its count columns.
///
#[derive(Debug, Clone)]
pub struct CountReport {
    pub candidates: Vec<DenovoCandidate>,
    pub universe: UnitLengthUniverse,
    pub totals: UnitCountTotals,
}

impl CountReport {
    pub fn statistics(&self) -> Option<&DenovoCandidate> {
        self.candidates.last().filter(|c| c.is_statistics())
    }

    ///
    /// Write the full and count-only reports into `out_dir`.
    ///
    pub fn write(&self, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
        write_reports(&self.candidates, self.universe.lengths(), out_dir)
    }
}

///
/// Filter, attribute and count already joined candidates.
///
/// The Statistics row is appended after filtering, so it is never filtered
/// itself, and carries the genome-wide totals of the aggregation.
///
pub fn count_candidates(
    mut candidates: Vec<DenovoCandidate>,
    universe: UnitLengthUniverse,
    params: &FilterParams,
) -> CountReport {
    apply_filters(&mut candidates, params);

    let totals = count_unit_sizes(&mut candidates, &universe);
    candidates.push(DenovoCandidate::statistics(
        totals.attributed_alleles,
        totals.counts.clone(),
    ));

    CountReport {
        candidates,
        universe,
        totals,
    }
}

///
/// Run the whole trio pipeline: load, join, filter, attribute and count.
///
/// # Arguments
/// - paths: the candidate file and the three genotype files
/// - params: filter thresholds
///
pub fn run_trio_pipeline(paths: &TrioPaths, params: &FilterParams) -> Result<CountReport> {
    info!("Starting de novo candidate processing");

    let tables: Trio<LocusTable> = Trio::new(
        read_locus_table(&paths.father)?,
        read_locus_table(&paths.mother)?,
        read_locus_table(&paths.child)?,
    );

    let mut candidates = read_candidates(&paths.candidates)?;
    join_trio(&mut candidates, &tables)?;

    let universe =
        UnitLengthUniverse::from_tables([&tables.father, &tables.mother, &tables.child]);
    info!("Unit-length universe: {:?}", universe.lengths());

    Ok(count_candidates(candidates, universe, params))
}
