//! Attribution of candidate alleles to their parental source allele and the
//! per unit-length tallies of transmitted, duplicated and contracted units.

use log::{error, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use strcount_core::consts::MISSING_VALUE;
use strcount_core::utils::split_counts;
use strcount_core::{AlleleOrigin, DenovoCandidate, Parent, UnitCounts};

use crate::consts::MOTIF_COUNT_DELIM;
use crate::universe::UnitLengthUniverse;

///
/// Why a candidate that qualified for attribution could not be counted.
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("unreadable allele origin {origin:?} for trid {id}")]
    MalformedOrigin { id: String, origin: String },

    #[error("origin allele {origin} is not among the parental motif counts for trid {id}")]
    MissingOriginAllele { id: String, origin: String },

    #[error("origin vec is empty for trid {id}, origin: {origin}")]
    EmptyOrigin { id: String, origin: String },

    #[error(
        "mismatched origin vec and motifs size for trid {id}, origin: {origin}, motifs: {motifs:?}"
    )]
    OriginMotifMismatch {
        id: String,
        origin: String,
        motifs: Vec<usize>,
    },

    #[error("no child motif counts at genotype index {index:?} for trid {id}")]
    MissingDenovoAllele { id: String, index: Option<usize> },

    #[error("denovo vec is empty for trid {id}, origin: {origin}, denovo: {denovo}")]
    EmptyDenovo {
        id: String,
        origin: String,
        denovo: String,
    },

    #[error("mismatched motif count lengths for trid {id}, origin: {origin}, denovo: {denovo}")]
    DenovoLengthMismatch {
        id: String,
        origin: String,
        denovo: String,
    },
}

impl SkipReason {
    fn log(&self) {
        match self {
            SkipReason::OriginMotifMismatch { .. } | SkipReason::DenovoLengthMismatch { .. } => {
                error!("(count_unit_size): {}", self)
            }
            _ => warn!("(count_unit_size): {}", self),
        }
    }
}

///
/// What attribution made of a single candidate.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Attribution {
    /// Unresolved origin, failed coverage floor, or the Statistics row.
    Ineligible,
    Skipped(SkipReason),
    Counted(UnitCounts),
}

///
/// Genome-wide totals: how many alleles were attributed, and the summed
/// per unit-length counters of all candidates.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitCountTotals {
    pub attributed_alleles: usize,
    pub counts: UnitCounts,
}

impl UnitCountTotals {
    pub fn new(columns: usize) -> Self {
        UnitCountTotals {
            attributed_alleles: 0,
            counts: UnitCounts::zeroed(columns),
        }
    }

    pub fn merge(mut self, other: UnitCountTotals) -> Self {
        self.attributed_alleles += other.attributed_alleles;
        self.counts.merge(&other.counts);
        self
    }
}

/// Leading entry present, i.e. not empty and not unreadable.
fn has_valid_lead(values: &[Option<u32>]) -> bool {
    matches!(values.first(), Some(Some(_)))
}

fn render_vec(values: &[Option<u32>]) -> String {
    values
        .iter()
        .map(|v| v.map_or(MISSING_VALUE.to_string(), |v| v.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

///
/// Attribute one candidate's allele to its parental source and count units.
///
/// Transmitted units come from the parental source allele and are counted for
/// every attributable candidate. Duplications and contractions compare the
/// child allele to the source allele position by position and are only
/// counted when the candidate passed every filter.
///
pub fn attribute_candidate(
    candidate: &DenovoCandidate,
    universe: &UnitLengthUniverse,
) -> Attribution {
    if candidate.is_statistics() || !candidate.filters.coverage_floor {
        return Attribution::Ineligible;
    }

    let id = &candidate.id;
    let label = &candidate.allele_origin;

    let (parent, allele) = match candidate.origin() {
        AlleleOrigin::Unresolved => return Attribution::Ineligible,
        AlleleOrigin::Malformed(origin) => {
            return Attribution::Skipped(SkipReason::MalformedOrigin {
                id: id.clone(),
                origin,
            });
        }
        AlleleOrigin::Parental { parent, allele } => (parent, allele),
    };

    let parental = match parent {
        Parent::Father => &candidate.motif_counts.father,
        Parent::Mother => &candidate.motif_counts.mother,
    };
    let Some(origin_str) = parental.get(allele) else {
        return Attribution::Skipped(SkipReason::MissingOriginAllele {
            id: id.clone(),
            origin: label.clone(),
        });
    };

    let origin_vec = split_counts(origin_str, MOTIF_COUNT_DELIM);
    if !has_valid_lead(&origin_vec) {
        return Attribution::Skipped(SkipReason::EmptyOrigin {
            id: id.clone(),
            origin: origin_str.clone(),
        });
    }
    if origin_vec.len() != candidate.motif_lengths.len() {
        return Attribution::Skipped(SkipReason::OriginMotifMismatch {
            id: id.clone(),
            origin: origin_str.clone(),
            motifs: candidate.motif_lengths.clone(),
        });
    }

    let Some(denovo_str) = candidate
        .genotype_index
        .and_then(|index| candidate.motif_counts.child.get(index))
    else {
        return Attribution::Skipped(SkipReason::MissingDenovoAllele {
            id: id.clone(),
            index: candidate.genotype_index,
        });
    };

    let denovo_vec = split_counts(denovo_str, MOTIF_COUNT_DELIM);
    if !has_valid_lead(&denovo_vec) {
        return Attribution::Skipped(SkipReason::EmptyDenovo {
            id: id.clone(),
            origin: origin_str.clone(),
            denovo: denovo_str.clone(),
        });
    }
    if denovo_vec.len() != origin_vec.len() {
        return Attribution::Skipped(SkipReason::DenovoLengthMismatch {
            id: id.clone(),
            origin: origin_str.clone(),
            denovo: denovo_str.clone(),
        });
    }

    let mut counts = UnitCounts::zeroed(universe.len());

    for (j, &unit_len) in candidate.motif_lengths.iter().enumerate() {
        let Some(col) = universe.column(unit_len) else {
            error!(
                "(count_unit_size): no column for unit length {} in trid {}",
                unit_len, id
            );
            continue;
        };
        match origin_vec[j] {
            Some(units) => counts.transmitted[col] += units as u64,
            None => error!(
                "(count_unit_size): unreadable value at unit idx {} of origin_vec for trid {}, origin_str: {:?}",
                j, id, origin_str
            ),
        }
    }

    if !candidate.is_denovo {
        return Attribution::Counted(counts);
    }

    for (j, &unit_len) in candidate.motif_lengths.iter().enumerate() {
        let Some(denovo) = denovo_vec[j] else {
            error!(
                "(count_unit_size): unreadable values found in denovo_vec for trid {}, denovo_str: {:?}, denovo_vec: {}",
                id,
                denovo_str,
                render_vec(&denovo_vec)
            );
            continue;
        };
        let Some(origin) = origin_vec[j] else {
            error!(
                "(count_unit_size): unreadable values found in origin_vec for trid {}, origin_str: {:?}, origin_vec: {}",
                id,
                origin_str,
                render_vec(&origin_vec)
            );
            continue;
        };
        let Some(col) = universe.column(unit_len) else {
            error!(
                "(count_unit_size): no column for unit length {} in trid {}",
                unit_len, id
            );
            continue;
        };

        let diff = denovo as i64 - origin as i64;
        if diff > 0 {
            counts.duplicated[col] += diff as u64;
            info!(
                "(duplication): trid {}, unit idx: {}, unit length {}, count increased by {}",
                id, j, unit_len, diff
            );
        } else if diff < 0 {
            counts.contracted[col] += (-diff) as u64;
            info!(
                "(contraction): trid {}, unit idx: {}, unit length {}, count decreased by {}",
                id, j, unit_len, -diff
            );
        }
    }

    Attribution::Counted(counts)
}

///
/// Size every candidate's counters to the universe, attribute each candidate,
/// and return the genome-wide totals.
///
/// Candidates are independent of one another, so they are processed in
/// parallel and the per-candidate totals are reduced at the end. Skipped
/// candidates are logged and keep all-zero counters.
///
pub fn count_unit_sizes(
    candidates: &mut [DenovoCandidate],
    universe: &UnitLengthUniverse,
) -> UnitCountTotals {
    let columns = universe.len();

    let totals = candidates
        .par_iter_mut()
        .map(|candidate| {
            let mut partial = UnitCountTotals::new(columns);
            candidate.unit_counts = match attribute_candidate(candidate, universe) {
                Attribution::Counted(counts) => {
                    partial.attributed_alleles = 1;
                    partial.counts.merge(&counts);
                    counts
                }
                Attribution::Skipped(reason) => {
                    reason.log();
                    UnitCounts::zeroed(columns)
                }
                Attribution::Ineligible => UnitCounts::zeroed(columns),
            };
            partial
        })
        .reduce(|| UnitCountTotals::new(columns), UnitCountTotals::merge);

    info!(
        "Counted all unit sizes: {} alleles attributed over {} unit lengths",
        totals.attributed_alleles, columns
    );

    totals
}
