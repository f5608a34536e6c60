//! Reader for per-sample repeat-genotype files.
//!
//! Only the record shape written by the repeat genotyper is understood:
//! the locus identifier and motif list come from the INFO column, per-allele
//! coverage and motif-count strings from the sample column.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use strcount_core::utils::{get_dynamic_reader, split_counts, split_fields};
use strcount_core::{LocusTable, RepeatLocus, StrcountError};

use crate::consts::*;

/// Value of the `key=value` entry at `entry` in a split INFO column.
fn info_value<'a>(info: &[&'a str], entry: usize) -> Option<&'a str> {
    info.get(entry).and_then(|kv| kv.split('=').nth(1))
}

///
/// Parse one data line of a genotype file into a [RepeatLocus].
///
/// Returns a description of the problem when the line lacks the columns or
/// INFO entries every record must carry. Unparseable coverage tokens are kept
/// as `None`.
///
pub fn parse_locus_line(line: &str) -> std::result::Result<RepeatLocus, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= VCF_SAMPLE_COL {
        return Err(format!(
            "expected at least {} tab-separated columns, found {}",
            VCF_SAMPLE_COL + 1,
            fields.len()
        ));
    }

    let info: Vec<&str> = fields[VCF_INFO_COL].split(';').collect();
    let id = info_value(&info, INFO_ID_ENTRY)
        .ok_or_else(|| format!("INFO column has no identifier: {:?}", fields[VCF_INFO_COL]))?
        .to_string();
    let motifs = info_value(&info, INFO_MOTIFS_ENTRY)
        .map(|m| split_fields(m, ','))
        .ok_or_else(|| format!("INFO column has no motif list: {:?}", fields[VCF_INFO_COL]))?;

    let sample: Vec<&str> = fields[VCF_SAMPLE_COL].split(':').collect();
    let coverage = match sample.get(SAMPLE_COVERAGE_FIELD) {
        Some(s) => split_counts(s, ','),
        None => {
            debug!("No coverage sub-field for locus {}", id);
            Vec::new()
        }
    };
    let motif_counts = match sample.get(SAMPLE_MOTIF_COUNT_FIELD) {
        Some(s) => split_fields(s, ','),
        None => {
            debug!("No motif-count sub-field for locus {}", id);
            Vec::new()
        }
    };

    Ok(RepeatLocus {
        id,
        motifs,
        coverage,
        motif_counts,
    })
}

///
/// Read a whole genotype file into a [LocusTable].
///
/// Header lines (starting with `#`) and blank lines are skipped. Files ending
/// in `.gz` are decompressed on the fly.
///
/// # Arguments
/// - path: path to the genotype file
///
pub fn read_locus_table(path: &Path) -> Result<LocusTable> {
    let reader = get_dynamic_reader(path)?;
    let mut table = LocusTable::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("There was an error reading line {}", index + 1))?;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let locus = parse_locus_line(&line).map_err(|reason| StrcountError::MalformedRecord {
            path: path.display().to_string(),
            line: index + 1,
            reason,
        })?;

        table.push(locus);
    }

    info!(
        "Loaded {} loci ({} distinct motif lengths) from {}",
        table.len(),
        table.motif_lengths.len(),
        path.display()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/trio")
            .join(file_name)
    }

    #[fixture]
    fn example_line() -> &'static str {
        "chr1\t1000\t.\tATATAGGAGGAGGAGGAGG\tATATAT\t.\tPASS\tTRID=loc1;END=1019;MOTIFS=AT,AGG;STRUC=(AT)n(AGG)n\tGT:AL:ALLR:SD:MC:MS:AP:AM\t0/1:19,6:19-19,6-6:12,15:3_4,5:0(0-19),0(0-6):1,1:.,."
    }

    #[rstest]
    fn test_parse_locus_line(example_line: &str) {
        let locus = parse_locus_line(example_line).unwrap();

        assert_eq!(locus.id, "loc1");
        assert_eq!(locus.motifs, vec!["AT", "AGG"]);
        assert_eq!(locus.motif_lengths(), vec![2, 3]);
        assert_eq!(locus.coverage, vec![Some(12), Some(15)]);
        assert_eq!(locus.motif_counts, vec!["3_4", "5"]);
    }

    #[rstest]
    fn test_parse_locus_line_bad_coverage_token() {
        let line = "chr1\t1\t.\tA\tA\t.\tPASS\tTRID=x;END=2;MOTIFS=CAG\tGT:AL:ALLR:SD:MC\t0/0:1:1-1:.,9:.";
        let locus = parse_locus_line(line).unwrap();
        assert_eq!(locus.coverage, vec![None, Some(9)]);
        assert_eq!(locus.motif_counts, vec!["."]);
    }

    #[rstest]
    fn test_parse_locus_line_truncated_sample() {
        let line = "chr1\t1\t.\tA\tA\t.\tPASS\tTRID=x;END=2;MOTIFS=CAG\tGT\t./.";
        let locus = parse_locus_line(line).unwrap();
        assert!(locus.coverage.is_empty());
        assert!(locus.motif_counts.is_empty());
    }

    #[rstest]
    #[case("chr1\t1\t.\tA")]
    #[case("chr1\t1\t.\tA\tA\t.\tPASS\tTRID=x\tGT\t0/0:1:1-1:5:3")]
    fn test_parse_locus_line_malformed(#[case] line: &str) {
        assert!(parse_locus_line(line).is_err());
    }

    #[rstest]
    fn test_read_locus_table() {
        let table = read_locus_table(&get_test_path("child.vcf")).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.row_of("loc3"), Some(2));
        assert_eq!(
            table.motif_lengths.iter().copied().collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[rstest]
    fn test_read_locus_table_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.vcf");
        std::fs::write(&path, "##fileformat=VCFv4.2\nchr1\t1\t.\tA\n").unwrap();

        let err = read_locus_table(&path).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
