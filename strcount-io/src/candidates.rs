use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use strcount_core::utils::{get_dynamic_reader, parse_count, split_counts, split_fields};
use strcount_core::{AllelePair, DenovoCandidate, DenovoStatus, StrcountError, Trio};

use crate::consts::*;

fn parse_ratio(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

fn parse_length_pair(field: &str) -> AllelePair<u32> {
    AllelePair::from_values(split_counts(field, ','))
}

fn parse_motif_count_pair(field: &str) -> AllelePair<String> {
    AllelePair::from_values(split_fields(field, ',').into_iter().map(Some))
}

///
/// Parse one data line of the de novo candidate file.
///
/// Only the candidate's own columns are read; coverage and motifs are joined
/// in later from the genotype tables. Numeric columns that don't parse are
/// left empty.
///
pub fn parse_candidate_line(line: &str) -> std::result::Result<DenovoCandidate, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= CAND_AL_CHILD_COL {
        return Err(format!(
            "expected at least {} tab-separated columns, found {}",
            CAND_AL_CHILD_COL + 1,
            fields.len()
        ));
    }

    let id = fields[CAND_ID_COL].to_string();

    let genotype_index = parse_count(fields[CAND_GENOTYPE_INDEX_COL]).map(|i| i as usize);
    if genotype_index.is_none() {
        debug!(
            "Unreadable genotype index {:?} for candidate {}",
            fields[CAND_GENOTYPE_INDEX_COL], id
        );
    }

    Ok(DenovoCandidate {
        genotype_index,
        denovo_coverage: parse_count(fields[CAND_DENOVO_COVERAGE_COL]),
        child_ratio: parse_ratio(fields[CAND_CHILD_RATIO_COL]),
        father_overlap_coverage: parse_count(fields[CAND_FATHER_OVERLAP_COL]),
        mother_overlap_coverage: parse_count(fields[CAND_MOTHER_OVERLAP_COL]),
        allele_origin: fields[CAND_ALLELE_ORIGIN_COL].to_string(),
        denovo_status: DenovoStatus::parse(fields[CAND_DENOVO_STATUS_COL]),
        allele_lengths: Trio::new(
            parse_length_pair(fields[CAND_AL_FATHER_COL]),
            parse_length_pair(fields[CAND_AL_MOTHER_COL]),
            parse_length_pair(fields[CAND_AL_CHILD_COL]),
        ),
        motif_counts: Trio::new(
            parse_motif_count_pair(fields[CAND_MC_FATHER_COL]),
            parse_motif_count_pair(fields[CAND_MC_MOTHER_COL]),
            parse_motif_count_pair(fields[CAND_MC_CHILD_COL]),
        ),
        id,
        ..Default::default()
    })
}

///
/// Read the de novo candidate file. The first line is a header and is skipped.
///
/// # Arguments
/// - path: path to the candidate file
///
pub fn read_candidates(path: &Path) -> Result<Vec<DenovoCandidate>> {
    let reader = get_dynamic_reader(path)?;
    let mut candidates = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line.with_context(|| format!("There was an error reading line {}", index + 1))?;

        if line.is_empty() {
            continue;
        }

        let candidate =
            parse_candidate_line(&line).map_err(|reason| StrcountError::MalformedRecord {
                path: path.display().to_string(),
                line: index + 1,
                reason,
            })?;

        candidates.push(candidate);
    }

    info!(
        "Loaded {} de novo candidates from {}",
        candidates.len(),
        path.display()
    );

    Ok(candidates)
}
