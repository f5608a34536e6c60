use std::collections::BTreeSet;

use fxhash::FxHashMap;

use strcount_core::LocusTable;

///
/// The sorted set of motif lengths seen across the trio. Each length owns one
/// column, in ascending order, in every unit-length count block.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitLengthUniverse {
    lengths: Vec<usize>,
    columns: FxHashMap<usize, usize>,
}

impl UnitLengthUniverse {
    pub fn from_lengths<I>(lengths: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let lengths: Vec<usize> = lengths
            .into_iter()
            .collect::<BTreeSet<usize>>()
            .into_iter()
            .collect();
        let columns = lengths
            .iter()
            .enumerate()
            .map(|(col, &len)| (len, col))
            .collect();

        UnitLengthUniverse { lengths, columns }
    }

    ///
    /// Union of the motif lengths of the given genotype tables.
    ///
    pub fn from_tables<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a LocusTable>,
    {
        Self::from_lengths(
            tables
                .into_iter()
                .flat_map(|t| t.motif_lengths.iter().copied()),
        )
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn column(&self, unit_length: usize) -> Option<usize> {
        self.columns.get(&unit_length).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}
