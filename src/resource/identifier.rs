//! Resource identifiers
//!
//! A single resource is addressed either by its numeric id or by its name
//! (lowercase, hyphen separated). Validation happens here so malformed input
//! never reaches the network.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Integer id or string name addressing one instance of a resource type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Id(u32),
    Name(String),
}

impl Identifier {
    /// Build an id identifier. Ids start at 1.
    pub fn id(id: u32) -> Result<Self> {
        if id == 0 {
            return Err(Error::InvalidIdentifier {
                input: "0".to_string(),
                reason: "ids start at 1",
            });
        }
        Ok(Identifier::Id(id))
    }

    /// Build a name identifier, rejecting anything the API would not accept
    pub fn name(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Identifier::Name(name))
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Identifier::Name(_))
    }

    /// Value used as the last path segment of the request URL
    pub fn path_segment(&self) -> String {
        match self {
            Identifier::Id(id) => id.to_string(),
            Identifier::Name(name) => urlencoding::encode(name).into_owned(),
        }
    }

    /// Re-check the invariants. Values built through the constructors always
    /// pass; enum literals built by hand may not.
    pub fn validate(&self) -> Result<()> {
        match self {
            Identifier::Id(0) => Err(Error::InvalidIdentifier {
                input: "0".to_string(),
                reason: "ids start at 1",
            }),
            Identifier::Id(_) => Ok(()),
            Identifier::Name(name) => validate_name(name),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidIdentifier {
            input: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("names cannot be empty");
    }
    if name.starts_with('-') || name.ends_with('-') {
        return invalid("names cannot start or end with a hyphen");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return invalid("names may only contain lowercase letters, digits and hyphens");
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return invalid("all-digit names are ids");
    }

    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{}", id),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(id) => Identifier::id(id),
                Err(_) => Err(Error::InvalidIdentifier {
                    input: s.to_string(),
                    reason: "id is out of range",
                }),
            };
        }
        Identifier::name(trimmed)
    }
}

impl From<u32> for Identifier {
    /// Converts without validation; a zero id is rejected when the request is built.
    fn from(id: u32) -> Self {
        Identifier::Id(id)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&String> for Identifier {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        value.parse()
    }
}

/// Anything a caller may pass where an identifier is expected
///
/// Conversion is where validation happens, so a bad identifier surfaces as
/// [`Error::InvalidIdentifier`] before a request is built.
pub trait IntoIdentifier {
    fn into_identifier(self) -> Result<Identifier>;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        self.validate()?;
        Ok(self)
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        self.clone().into_identifier()
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self) -> Result<Identifier> {
        self.parse()
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self) -> Result<Identifier> {
        self.parse()
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self) -> Result<Identifier> {
        self.parse()
    }
}

macro_rules! integer_identifier {
    ($($ty:ty),+) => {
        $(
            impl IntoIdentifier for $ty {
                fn into_identifier(self) -> Result<Identifier> {
                    match u32::try_from(self) {
                        Ok(id) => Identifier::id(id),
                        Err(_) => Err(Error::InvalidIdentifier {
                            input: self.to_string(),
                            reason: "ids must be positive 32-bit integers",
                        }),
                    }
                }
            }
        )+
    };
}

integer_identifier!(u32, i32, i64, u64, usize, u16, u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_parse_as_ids() {
        assert_eq!("25".parse::<Identifier>().unwrap(), Identifier::Id(25));
        assert_eq!(" 132 ".parse::<Identifier>().unwrap(), Identifier::Id(132));
    }

    #[test]
    fn test_names_are_kept_verbatim() {
        let id: Identifier = "mr-mime".parse().unwrap();
        assert_eq!(id, Identifier::Name("mr-mime".to_string()));
        assert_eq!(id.path_segment(), "mr-mime");
        assert_eq!(id.to_string(), "mr-mime");
    }

    #[test]
    fn test_zero_and_overflow_rejected() {
        assert!(Identifier::id(0).is_err());
        assert!("0".parse::<Identifier>().is_err());
        assert!("99999999999".parse::<Identifier>().is_err());
    }

    #[test]
    fn test_bad_names_rejected() {
        for input in ["", "Pikachu", "-pikachu", "pikachu-", "mr mime", "farfetch'd", "../etc"] {
            assert!(
                matches!(Identifier::name(input), Err(Error::InvalidIdentifier { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_all_digit_name_is_not_a_name() {
        assert!(Identifier::name("151").is_err());
        assert_eq!(Identifier::try_from("151").unwrap(), Identifier::Id(151));
    }

    #[test]
    fn test_into_identifier_conversions() {
        assert_eq!(25u32.into_identifier().unwrap(), Identifier::Id(25));
        assert_eq!(25u64.into_identifier().unwrap(), Identifier::Id(25));
        assert_eq!("eevee".into_identifier().unwrap(), Identifier::Name("eevee".to_string()));
        assert_eq!(String::from("7").into_identifier().unwrap(), Identifier::Id(7));
        assert!((-1i32).into_identifier().is_err());
        assert!(0usize.into_identifier().is_err());
        assert!(u64::MAX.into_identifier().is_err());
    }

    #[test]
    fn test_validate_catches_hand_built_values() {
        assert!(Identifier::Id(0).validate().is_err());
        assert!(Identifier::Name("Bad Name".to_string()).validate().is_err());
        assert!(Identifier::Id(1).validate().is_ok());
        assert!(Identifier::Name("porygon-z".to_string()).validate().is_ok());
    }
}
