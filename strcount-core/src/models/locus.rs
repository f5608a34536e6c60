use std::collections::BTreeSet;

use fxhash::FxHashMap;

///
/// One tandem-repeat call from a sample's genotype file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatLocus {
    pub id: String,
    pub motifs: Vec<String>,
    /// Per-allele read coverage, in allele order.
    pub coverage: Vec<Option<u32>>,
    /// Per-allele motif-count strings, e.g. `"3_4"`.
    pub motif_counts: Vec<String>,
}

impl RepeatLocus {
    pub fn motif_lengths(&self) -> Vec<usize> {
        self.motifs.iter().map(|m| m.len()).collect()
    }
}

///
/// All loci of one sample, in file order, with an identifier index and the
/// set of motif lengths seen anywhere in the file.
///
#[derive(Debug, Clone, Default)]
pub struct LocusTable {
    pub loci: Vec<RepeatLocus>,
    pub motif_lengths: BTreeSet<usize>,
    index: FxHashMap<String, usize>,
}

impl LocusTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Append a locus, indexing its identifier and recording its motif lengths.
    /// A repeated identifier points at its latest row.
    ///
    pub fn push(&mut self, locus: RepeatLocus) {
        for motif in locus.motifs.iter() {
            self.motif_lengths.insert(motif.len());
        }
        self.index.insert(locus.id.clone(), self.loci.len());
        self.loci.push(locus);
    }

    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&RepeatLocus> {
        self.row_of(id).map(|row| &self.loci[row])
    }

    pub fn len(&self) -> usize {
        self.loci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.is_empty()
    }
}
