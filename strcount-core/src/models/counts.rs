///
/// Per unit-length counters, one slot per column of the unit-length universe.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitCounts {
    pub transmitted: Vec<u64>,
    pub contracted: Vec<u64>,
    pub duplicated: Vec<u64>,
}

impl UnitCounts {
    pub fn zeroed(columns: usize) -> Self {
        UnitCounts {
            transmitted: vec![0; columns],
            contracted: vec![0; columns],
            duplicated: vec![0; columns],
        }
    }

    pub fn columns(&self) -> usize {
        self.transmitted.len()
    }

    ///
    /// Add another set of counters into this one, column by column.
    ///
    pub fn merge(&mut self, other: &UnitCounts) {
        for (dst, src) in [
            (&mut self.transmitted, &other.transmitted),
            (&mut self.contracted, &other.contracted),
            (&mut self.duplicated, &other.duplicated),
        ] {
            if dst.len() < src.len() {
                dst.resize(src.len(), 0);
            }
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d += s;
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.transmitted
            .iter()
            .chain(self.contracted.iter())
            .chain(self.duplicated.iter())
            .all(|&c| c == 0)
    }
}
