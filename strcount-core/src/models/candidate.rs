use crate::consts::{MISSING_VALUE, STATISTICS_ID};
use crate::models::{AlleleOrigin, AllelePair, DenovoStatus, Trio, UnitCounts};

///
/// Outcome of the five independent candidate filters.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterFlags {
    /// Every trio member has enough total coverage.
    pub coverage_floor: bool,
    /// The candidate allele can't be explained by ordinary inheritance.
    pub mendelian_inconsistent: bool,
    /// The de novo status label is `Y:+` or `Y:-`.
    pub status_match: bool,
    /// Enough de novo reads and a balanced enough child allele.
    pub support: bool,
    /// The candidate allele is not faintly present in either parent.
    pub parental_absence: bool,
}

impl FilterFlags {
    pub fn as_array(&self) -> [bool; 5] {
        [
            self.coverage_floor,
            self.mendelian_inconsistent,
            self.status_match,
            self.support,
            self.parental_absence,
        ]
    }

    pub fn all(&self) -> bool {
        self.as_array().iter().all(|&f| f)
    }
}

///
/// A candidate de novo repeat allele and everything learned about it along
/// the pipeline.
///
#[derive(Debug, Clone, Default)]
pub struct DenovoCandidate {
    pub id: String,
    /// Which child allele (0 or 1) is the candidate.
    pub genotype_index: Option<usize>,
    pub denovo_coverage: Option<u32>,
    pub child_ratio: Option<f64>,
    pub father_overlap_coverage: Option<u32>,
    pub mother_overlap_coverage: Option<u32>,
    pub allele_origin: String,
    pub denovo_status: DenovoStatus,

    pub allele_lengths: Trio<AllelePair<u32>>,
    pub motif_counts: Trio<AllelePair<String>>,

    // filled by the trio join
    pub coverage: Trio<Vec<Option<u32>>>,
    pub motif_lengths: Vec<usize>,

    // filled by the filters
    pub filters: FilterFlags,
    pub is_denovo: bool,

    // filled by the unit-length aggregation
    pub unit_counts: UnitCounts,
}

impl DenovoCandidate {
    pub fn origin(&self) -> AlleleOrigin {
        AlleleOrigin::parse(&self.allele_origin)
    }

    pub fn is_statistics(&self) -> bool {
        self.id == STATISTICS_ID
    }

    ///
    /// Build the synthetic genome-wide row.
    ///
    /// The genotype-index column carries the number of alleles that were
    /// attributed to a parent; every other scalar is missing.
    ///
    pub fn statistics(attributed_alleles: usize, unit_counts: UnitCounts) -> Self {
        DenovoCandidate {
            id: STATISTICS_ID.to_string(),
            genotype_index: Some(attributed_alleles),
            allele_origin: MISSING_VALUE.to_string(),
            unit_counts,
            ..Default::default()
        }
    }
}
