use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use strcount_core::consts::MISSING_VALUE;
use strcount_core::utils::render_opt;
use strcount_core::{AllelePair, DenovoCandidate, FilterFlags, UnitCounts};

use crate::consts::{COUNT_REPORT_NAME, FULL_REPORT_NAME};

const FULL_SCALAR_HEADER: [&str; 9] = [
    "trid",
    "gt_index",
    "denovo_coverage",
    "child_ratio",
    "father_overlap_coverage",
    "mother_overlap_coverage",
    "allele_origin",
    "denovo_status",
    "motifs",
];

const PAIR_HEADER: [&str; 9] = [
    "coverage_father",
    "coverage_mother",
    "coverage_child",
    "AL_father",
    "AL_mother",
    "AL_child",
    "MC_father",
    "MC_mother",
    "MC_child",
];

fn flag(value: bool) -> &'static str {
    match value {
        true => "1",
        false => "0",
    }
}

fn flag_header() -> Vec<String> {
    let mut header: Vec<String> = (1..=5).map(|i| format!("basic_filtering.{}", i)).collect();
    header.push("is_denovo".to_string());
    header
}

fn flag_columns(filters: &FilterFlags, is_denovo: bool) -> Vec<String> {
    let mut cols: Vec<String> = filters
        .as_array()
        .iter()
        .map(|&f| flag(f).to_string())
        .collect();
    cols.push(flag(is_denovo).to_string());
    cols
}

fn unit_length_header(unit_lengths: &[usize]) -> Vec<String> {
    let mut header = Vec::with_capacity(unit_lengths.len() * 3);
    header.extend(unit_lengths.iter().map(|len| len.to_string()));
    header.extend(unit_lengths.iter().map(|len| format!("cont.{}", len)));
    header.extend(unit_lengths.iter().map(|len| format!("dup.{}", len)));
    header
}

///
/// Transmitted, contraction and duplication blocks in that order, one column
/// per unit length. Rows whose counts were never sized render zeros.
///
fn unit_count_columns(counts: &UnitCounts, columns: usize) -> Vec<String> {
    [&counts.transmitted, &counts.contracted, &counts.duplicated]
        .iter()
        .flat_map(|block| {
            (0..columns).map(move |i| block.get(i).copied().unwrap_or(0).to_string())
        })
        .collect()
}

fn coverage_pair(coverage: &[Option<u32>]) -> String {
    AllelePair::from_values(coverage.iter().copied()).render()
}

fn motif_column(motif_lengths: &[usize]) -> String {
    if motif_lengths.is_empty() {
        return MISSING_VALUE.to_string();
    }
    motif_lengths
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

///
/// Render one row of the full report.
///
pub fn full_report_row(candidate: &DenovoCandidate, unit_lengths: &[usize]) -> String {
    let mut cols = vec![
        candidate.id.clone(),
        render_opt(candidate.genotype_index),
        render_opt(candidate.denovo_coverage),
        render_opt(candidate.child_ratio),
        render_opt(candidate.father_overlap_coverage),
        render_opt(candidate.mother_overlap_coverage),
        candidate.allele_origin.clone(),
        candidate.denovo_status.to_string(),
        motif_column(&candidate.motif_lengths),
        coverage_pair(&candidate.coverage.father),
        coverage_pair(&candidate.coverage.mother),
        coverage_pair(&candidate.coverage.child),
        candidate.allele_lengths.father.render(),
        candidate.allele_lengths.mother.render(),
        candidate.allele_lengths.child.render(),
        candidate.motif_counts.father.render(),
        candidate.motif_counts.mother.render(),
        candidate.motif_counts.child.render(),
    ];
    cols.extend(flag_columns(&candidate.filters, candidate.is_denovo));
    cols.extend(unit_count_columns(&candidate.unit_counts, unit_lengths.len()));
    cols.join("\t")
}

///
/// Render one row of the count-only report.
///
pub fn count_report_row(candidate: &DenovoCandidate, unit_lengths: &[usize]) -> String {
    let mut cols = vec![candidate.id.clone()];
    cols.extend(unit_count_columns(&candidate.unit_counts, unit_lengths.len()));
    cols.extend(flag_columns(&candidate.filters, candidate.is_denovo));
    cols.join("\t")
}

fn full_report_header(unit_lengths: &[usize]) -> String {
    let mut header: Vec<String> = FULL_SCALAR_HEADER.iter().map(|h| h.to_string()).collect();
    for name in PAIR_HEADER {
        header.push(format!("{}.1", name));
        header.push(format!("{}.2", name));
    }
    header.extend(flag_header());
    header.extend(unit_length_header(unit_lengths));
    header.join("\t")
}

fn count_report_header(unit_lengths: &[usize]) -> String {
    let mut header = vec!["trid".to_string()];
    header.extend(unit_length_header(unit_lengths));
    header.extend(flag_header());
    header.join("\t")
}

fn write_rows<F>(
    candidates: &[DenovoCandidate],
    header: String,
    render: F,
    path: &Path,
) -> Result<()>
where
    F: Fn(&DenovoCandidate) -> String,
{
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header)?;
    for candidate in candidates {
        writeln!(writer, "{}", render(candidate))?;
    }
    writer.flush()?;

    Ok(())
}

///
/// Write every field of every candidate, followed by the unit-length counts.
///
/// # Arguments
/// - candidates: the candidate rows, Statistics row included
/// - unit_lengths: the sorted unit-length universe, one column per length
/// - path: output file
///
pub fn write_full_report(
    candidates: &[DenovoCandidate],
    unit_lengths: &[usize],
    path: &Path,
) -> Result<()> {
    write_rows(
        candidates,
        full_report_header(unit_lengths),
        |c| full_report_row(c, unit_lengths),
        path,
    )
}

///
/// Write identifiers, unit-length counts and filter flags only.
///
pub fn write_count_report(
    candidates: &[DenovoCandidate],
    unit_lengths: &[usize],
    path: &Path,
) -> Result<()> {
    write_rows(
        candidates,
        count_report_header(unit_lengths),
        |c| count_report_row(c, unit_lengths),
        path,
    )
}

///
/// Write both reports under their fixed names into `out_dir`.
///
/// Returns the paths of the full and count-only reports.
///
pub fn write_reports(
    candidates: &[DenovoCandidate],
    unit_lengths: &[usize],
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let full = out_dir.join(FULL_REPORT_NAME);
    let counts = out_dir.join(COUNT_REPORT_NAME);

    write_full_report(candidates, unit_lengths, &full)?;
    info!("Wrote {} rows to {}", candidates.len(), full.display());

    write_count_report(candidates, unit_lengths, &counts)?;
    info!("Wrote {} rows to {}", candidates.len(), counts.display());

    Ok((full, counts))
}
