pub const FULL_REPORT_NAME: &str = "validate_count.tsv";
pub const COUNT_REPORT_NAME: &str = "result_only.tsv";

// genotype (VCF-like) file columns
pub const VCF_INFO_COL: usize = 7;
pub const VCF_SAMPLE_COL: usize = 9;

// entries of the `;`-delimited INFO column
pub const INFO_ID_ENTRY: usize = 0;
pub const INFO_MOTIFS_ENTRY: usize = 2;

// sub-fields of the `:`-delimited sample column
pub const SAMPLE_COVERAGE_FIELD: usize = 3;
pub const SAMPLE_MOTIF_COUNT_FIELD: usize = 4;

// de novo candidate file columns
pub const CAND_ID_COL: usize = 4;
pub const CAND_DENOVO_COVERAGE_COL: usize = 6;
pub const CAND_CHILD_RATIO_COL: usize = 10;
pub const CAND_FATHER_OVERLAP_COL: usize = 13;
pub const CAND_MOTHER_OVERLAP_COL: usize = 14;
pub const CAND_ALLELE_ORIGIN_COL: usize = 15;
pub const CAND_DENOVO_STATUS_COL: usize = 16;
pub const CAND_GENOTYPE_INDEX_COL: usize = 23;
pub const CAND_MC_FATHER_COL: usize = 24;
pub const CAND_MC_MOTHER_COL: usize = 25;
pub const CAND_MC_CHILD_COL: usize = 26;
pub const CAND_AL_FATHER_COL: usize = 27;
pub const CAND_AL_MOTHER_COL: usize = 28;
pub const CAND_AL_CHILD_COL: usize = 29;
