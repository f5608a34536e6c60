use log::info;

use strcount_core::{DenovoCandidate, FilterFlags};

use crate::consts::*;

///
/// Thresholds for the candidate filters.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Minimum summed coverage for each trio member.
    pub min_sample_coverage: u64,
    pub min_denovo_coverage: u32,
    pub min_child_ratio: f64,
    /// Parental overlap coverage over total parental coverage must stay below this.
    pub max_parent_overlap_ratio: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            min_sample_coverage: MIN_SAMPLE_COVERAGE,
            min_denovo_coverage: MIN_DENOVO_COVERAGE,
            min_child_ratio: MIN_CHILD_RATIO,
            max_parent_overlap_ratio: MAX_PARENT_OVERLAP_RATIO,
        }
    }
}

/// Sum of per-allele coverage; unreadable entries add nothing.
pub fn total_coverage(coverage: &[Option<u32>]) -> u64 {
    coverage.iter().flatten().map(|&c| c as u64).sum()
}

fn coverage_floor(candidate: &DenovoCandidate, params: &FilterParams) -> bool {
    let cov = &candidate.coverage;
    total_coverage(&cov.father) >= params.min_sample_coverage
        && total_coverage(&cov.mother) >= params.min_sample_coverage
        && total_coverage(&cov.child) >= params.min_sample_coverage
}

///
/// True when the candidate allele can't be explained by inheriting one child
/// allele from each parent, in either assignment. Without a usable genotype
/// index or both child allele lengths nothing can be shown, so this is false.
///
fn mendelian_inconsistent(candidate: &DenovoCandidate) -> bool {
    let Some(index) = candidate.genotype_index.filter(|&i| i <= 1) else {
        return false;
    };
    let lengths = &candidate.allele_lengths;
    let (Some(denovo), Some(other)) = (lengths.child.get(index), lengths.child.get(1 - index))
    else {
        return false;
    };

    let explained = (lengths.father.contains(denovo) && lengths.mother.contains(other))
        || (lengths.mother.contains(denovo) && lengths.father.contains(other));

    !explained
}

fn status_match(candidate: &DenovoCandidate) -> bool {
    candidate.denovo_status.is_denovo()
}

fn support(candidate: &DenovoCandidate, params: &FilterParams) -> bool {
    match (candidate.denovo_coverage, candidate.child_ratio) {
        (Some(cov), Some(ratio)) => {
            cov >= params.min_denovo_coverage && ratio >= params.min_child_ratio
        }
        _ => false,
    }
}

fn overlap_ratio(overlap: u32, coverage: &[Option<u32>]) -> f64 {
    overlap as f64 / total_coverage(coverage).max(1) as f64
}

fn parental_absence(candidate: &DenovoCandidate, params: &FilterParams) -> bool {
    match (
        candidate.father_overlap_coverage,
        candidate.mother_overlap_coverage,
    ) {
        (Some(father), Some(mother)) => {
            overlap_ratio(father, &candidate.coverage.father) < params.max_parent_overlap_ratio
                && overlap_ratio(mother, &candidate.coverage.mother)
                    < params.max_parent_overlap_ratio
        }
        _ => false,
    }
}

///
/// Evaluate the five filters for one candidate. Each flag reads only its own
/// inputs.
///
pub fn evaluate_filters(candidate: &DenovoCandidate, params: &FilterParams) -> FilterFlags {
    FilterFlags {
        coverage_floor: coverage_floor(candidate, params),
        mendelian_inconsistent: mendelian_inconsistent(candidate),
        status_match: status_match(candidate),
        support: support(candidate, params),
        parental_absence: parental_absence(candidate, params),
    }
}

///
/// Set the filter flags and `is_denovo` on every candidate. The Statistics
/// row is left untouched.
///
pub fn apply_filters(candidates: &mut [DenovoCandidate], params: &FilterParams) {
    let mut accepted = 0;
    for candidate in candidates.iter_mut().filter(|c| !c.is_statistics()) {
        candidate.filters = evaluate_filters(candidate, params);
        candidate.is_denovo = candidate.filters.all();
        if candidate.is_denovo {
            accepted += 1;
        }
    }

    info!(
        "Filtering completed: {} of {} candidates pass all filters",
        accepted,
        candidates.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use strcount_core::{AllelePair, DenovoStatus, Trio};

    #[fixture]
    fn candidate() -> DenovoCandidate {
        DenovoCandidate {
            id: "loc1".to_string(),
            genotype_index: Some(0),
            denovo_coverage: Some(5),
            child_ratio: Some(0.4),
            father_overlap_coverage: Some(0),
            mother_overlap_coverage: Some(0),
            allele_origin: "F:1".to_string(),
            denovo_status: DenovoStatus::Plus,
            allele_lengths: Trio::new(
                AllelePair::new(Some(10), Some(12)),
                AllelePair::new(Some(20), Some(22)),
                AllelePair::new(Some(14), Some(20)),
            ),
            coverage: Trio::new(
                vec![Some(10), Some(10)],
                vec![Some(12), Some(8)],
                vec![Some(9), Some(8)],
            ),
            ..Default::default()
        }
    }

    #[rstest]
    fn test_all_filters_pass(candidate: DenovoCandidate) {
        let flags = evaluate_filters(&candidate, &FilterParams::default());
        assert!(flags.all());
    }

    #[rstest]
    fn test_low_father_coverage_fails_floor_only(mut candidate: DenovoCandidate) {
        candidate.coverage = Trio::new(
            vec![Some(4), Some(3)],
            vec![Some(6), Some(2)],
            vec![Some(9), Some(8)],
        );
        let mut candidates = vec![candidate];
        apply_filters(&mut candidates, &FilterParams::default());

        let flags = candidates[0].filters;
        assert!(!flags.coverage_floor);
        assert!(flags.mendelian_inconsistent);
        assert!(flags.status_match);
        assert!(flags.support);
        assert!(!candidates[0].is_denovo);
    }

    #[rstest]
    fn test_unreadable_coverage_adds_nothing() {
        assert_eq!(total_coverage(&[Some(7), None, Some(3)]), 10);
        assert_eq!(total_coverage(&[]), 0);
    }

    #[rstest]
    fn test_mendelian_explained_by_father_then_mother(mut candidate: DenovoCandidate) {
        // candidate allele 14 from father, other allele 20 from mother
        candidate.allele_lengths.father = AllelePair::new(Some(14), Some(12));
        let flags = evaluate_filters(&candidate, &FilterParams::default());
        assert!(!flags.mendelian_inconsistent);
    }

    #[rstest]
    fn test_mendelian_explained_by_mother_then_father(mut candidate: DenovoCandidate) {
        // candidate allele 14 from mother, other allele 20 from father
        candidate.allele_lengths.father = AllelePair::new(Some(20), None);
        candidate.allele_lengths.mother = AllelePair::new(Some(14), Some(22));
        let flags = evaluate_filters(&candidate, &FilterParams::default());
        assert!(!flags.mendelian_inconsistent);
    }

    #[rstest]
    fn test_mendelian_uses_genotype_index(mut candidate: DenovoCandidate) {
        // child [14, 20]: with index 1 the candidate is 20, which the mother carries,
        // and 14 is absent from the father, so it is still unexplained
        candidate.genotype_index = Some(1);
        assert!(evaluate_filters(&candidate, &FilterParams::default()).mendelian_inconsistent);

        candidate.allele_lengths.father = AllelePair::new(Some(14), None);
        assert!(!evaluate_filters(&candidate, &FilterParams::default()).mendelian_inconsistent);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(2))]
    fn test_mendelian_without_usable_index(
        mut candidate: DenovoCandidate,
        #[case] index: Option<usize>,
    ) {
        candidate.genotype_index = index;
        assert!(!evaluate_filters(&candidate, &FilterParams::default()).mendelian_inconsistent);
    }

    #[rstest]
    fn test_mendelian_haploid_child(mut candidate: DenovoCandidate) {
        candidate.allele_lengths.child = AllelePair::new(Some(14), None);
        assert!(!evaluate_filters(&candidate, &FilterParams::default()).mendelian_inconsistent);
    }

    #[rstest]
    #[case("Y:+", true)]
    #[case("Y:-", true)]
    #[case("Y:=", false)]
    #[case("X", false)]
    #[case("", false)]
    fn test_status_match(
        mut candidate: DenovoCandidate,
        #[case] status: &str,
        #[case] expected: bool,
    ) {
        candidate.denovo_status = DenovoStatus::parse(status);
        assert_eq!(
            evaluate_filters(&candidate, &FilterParams::default()).status_match,
            expected
        );
    }

    #[rstest]
    #[case(Some(2), Some(0.2), true)]
    #[case(Some(1), Some(0.9), false)]
    #[case(Some(9), Some(0.19), false)]
    #[case(None, Some(0.5), false)]
    #[case(Some(5), None, false)]
    fn test_support(
        mut candidate: DenovoCandidate,
        #[case] coverage: Option<u32>,
        #[case] ratio: Option<f64>,
        #[case] expected: bool,
    ) {
        candidate.denovo_coverage = coverage;
        candidate.child_ratio = ratio;
        assert_eq!(
            evaluate_filters(&candidate, &FilterParams::default()).support,
            expected
        );
    }

    #[rstest]
    fn test_parental_absence(mut candidate: DenovoCandidate) {
        // father total 20: 1/20 = 0.05 is not below the threshold
        candidate.father_overlap_coverage = Some(1);
        assert!(!evaluate_filters(&candidate, &FilterParams::default()).parental_absence);

        candidate.father_overlap_coverage = Some(0);
        candidate.mother_overlap_coverage = None;
        assert!(!evaluate_filters(&candidate, &FilterParams::default()).parental_absence);
    }

    #[rstest]
    fn test_parental_absence_zero_coverage_parent(mut candidate: DenovoCandidate) {
        candidate.coverage.mother = vec![];
        candidate.mother_overlap_coverage = Some(0);
        assert!(evaluate_filters(&candidate, &FilterParams::default()).parental_absence);
    }

    #[rstest]
    fn test_flags_are_independent(candidate: DenovoCandidate) {
        let params = FilterParams::default();
        let base = evaluate_filters(&candidate, &params);

        let mut toggled = candidate.clone();
        toggled.coverage.child = vec![Some(1)];
        let mut expected = base;
        expected.coverage_floor = false;
        assert_eq!(evaluate_filters(&toggled, &params), expected);

        let mut toggled = candidate.clone();
        // candidate 20 from the mother, 10 from the father
        toggled.allele_lengths.child = AllelePair::new(Some(20), Some(10));
        let mut expected = base;
        expected.mendelian_inconsistent = false;
        assert_eq!(evaluate_filters(&toggled, &params), expected);

        let mut toggled = candidate.clone();
        toggled.denovo_status = DenovoStatus::parse("N");
        let mut expected = base;
        expected.status_match = false;
        assert_eq!(evaluate_filters(&toggled, &params), expected);

        let mut toggled = candidate.clone();
        toggled.child_ratio = Some(0.1);
        let mut expected = base;
        expected.support = false;
        assert_eq!(evaluate_filters(&toggled, &params), expected);

        let mut toggled = candidate.clone();
        toggled.mother_overlap_coverage = Some(5);
        let mut expected = base;
        expected.parental_absence = false;
        assert_eq!(evaluate_filters(&toggled, &params), expected);
    }

    #[rstest]
    fn test_statistics_row_is_not_filtered(candidate: DenovoCandidate) {
        let mut candidates = vec![
            candidate,
            DenovoCandidate::statistics(0, Default::default()),
        ];
        apply_filters(&mut candidates, &FilterParams::default());

        assert!(candidates[0].is_denovo);
        assert_eq!(candidates[1].filters, FilterFlags::default());
        assert!(!candidates[1].is_denovo);
    }
}
