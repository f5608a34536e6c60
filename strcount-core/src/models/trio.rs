use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRole {
    Child,
    Father,
    Mother,
}

impl Display for SampleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleRole::Child => "child",
            SampleRole::Father => "father",
            SampleRole::Mother => "mother",
        };
        write!(f, "{}", name)
    }
}

///
/// One value per trio member.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trio<T> {
    pub father: T,
    pub mother: T,
    pub child: T,
}

impl<T> Trio<T> {
    pub fn new(father: T, mother: T, child: T) -> Self {
        Trio {
            father,
            mother,
            child,
        }
    }

    pub fn get(&self, role: SampleRole) -> &T {
        match role {
            SampleRole::Child => &self.child,
            SampleRole::Father => &self.father,
            SampleRole::Mother => &self.mother,
        }
    }
}
