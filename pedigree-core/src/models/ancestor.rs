use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// AncestorRef struct, an optional reference to one animal as recorded at a
/// single slot of a pedigree tree
///
/// A node with an empty name is treated as unknown/unrecorded and contributes
/// nothing to any computation over the tree.
///
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Hash, Debug, Clone, Default)]
pub struct AncestorRef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub registration: Option<String>,
}

impl AncestorRef {
    pub fn new<S: Into<String>>(name: S) -> Self {
        AncestorRef {
            name: name.into(),
            registration: None,
        }
    }

    pub fn with_registration<S: Into<String>, R: Into<String>>(name: S, registration: R) -> Self {
        AncestorRef {
            name: name.into(),
            registration: Some(registration.into()),
        }
    }

    ///
    /// Whether this slot actually records an animal
    ///
    pub fn is_recorded(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Display for AncestorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.registration.as_deref() {
            Some(reg) => write!(f, "{} ({})", self.name, reg),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("Mons", true)]
    #[case("", false)]
    #[case("   ", false)]
    fn test_is_recorded(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(AncestorRef::new(name).is_recorded(), expected);
    }

    #[rstest]
    fn test_display() {
        let plain = AncestorRef::new("Mons");
        assert_eq!(plain.to_string(), "Mons");

        let registered = AncestorRef::with_registration("Mons", "(N) LO 212345");
        assert_eq!(registered.to_string(), "Mons ((N) LO 212345)");
    }
}
