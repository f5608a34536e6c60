use std::fmt::Display;

use crate::utils::render_opt;

///
/// A fixed-size pair of per-allele values for a diploid call.
///
/// Either slot may be missing: haploid calls only fill `first`, and a value
/// that failed to parse leaves its slot empty.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllelePair<T> {
    first: Option<T>,
    second: Option<T>,
}

impl<T> Default for AllelePair<T> {
    fn default() -> Self {
        AllelePair {
            first: None,
            second: None,
        }
    }
}

impl<T> AllelePair<T> {
    pub fn new(first: Option<T>, second: Option<T>) -> Self {
        AllelePair { first, second }
    }

    ///
    /// Build a pair from the leading values of a per-allele list. Values past
    /// the second are dropped.
    ///
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut values = values.into_iter();
        let first = values.next().flatten();
        let second = values.next().flatten();
        AllelePair { first, second }
    }

    /// Value at allele index 0 or 1.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => self.first.as_ref(),
            1 => self.second.as_ref(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.first.iter().chain(self.second.iter())
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }
}

impl<T: Display> AllelePair<T> {
    ///
    /// Render as two tab-separated columns, `.` for an empty slot.
    ///
    pub fn render(&self) -> String {
        format!(
            "{}\t{}",
            render_opt(self.first.as_ref()),
            render_opt(self.second.as_ref())
        )
    }
}
