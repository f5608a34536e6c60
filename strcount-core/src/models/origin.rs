use crate::consts::MISSING_VALUE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Father,
    Mother,
}

///
/// Parsed form of an allele-origin label such as `F:1` or `M:2`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlleleOrigin {
    /// Empty, `.` or containing `?`: the source allele is not known.
    Unresolved,
    /// Parental allele, `allele` is 0-based.
    Parental { parent: Parent, allele: usize },
    /// Resolved label whose allele number can't be read.
    Malformed(String),
}

impl AlleleOrigin {
    ///
    /// Parse an origin label.
    ///
    /// Anything not starting with `F` is attributed to the mother. The allele
    /// number follows the two-character `<P>:` prefix and is 1-based.
    ///
    pub fn parse(label: &str) -> Self {
        if label.is_empty() || label == MISSING_VALUE || label.contains('?') {
            return AlleleOrigin::Unresolved;
        }

        let parent = match label.starts_with('F') {
            true => Parent::Father,
            false => Parent::Mother,
        };

        let allele = label
            .get(2..)
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1));

        match allele {
            Some(allele) => AlleleOrigin::Parental { parent, allele },
            None => AlleleOrigin::Malformed(label.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("F:1", AlleleOrigin::Parental { parent: Parent::Father, allele: 0 })]
    #[case("M:2", AlleleOrigin::Parental { parent: Parent::Mother, allele: 1 })]
    #[case("", AlleleOrigin::Unresolved)]
    #[case(".", AlleleOrigin::Unresolved)]
    #[case("?", AlleleOrigin::Unresolved)]
    #[case("F:?", AlleleOrigin::Unresolved)]
    #[case("M:0", AlleleOrigin::Malformed("M:0".to_string()))]
    #[case("F", AlleleOrigin::Malformed("F".to_string()))]
    fn test_parse_origin(#[case] label: &str, #[case] expected: AlleleOrigin) {
        assert_eq!(AlleleOrigin::parse(label), expected);
    }

    #[rstest]
    fn test_non_father_prefix_is_mother() {
        assert_eq!(
            AlleleOrigin::parse("X:1"),
            AlleleOrigin::Parental {
                parent: Parent::Mother,
                allele: 0
            }
        );
    }
}
