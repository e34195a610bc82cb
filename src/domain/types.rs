//! Strongly-typed value objects used by domain entities.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::RngExt;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided reference id did not match the issued format.
    #[error("invalid reference id")]
    InvalidReference,
}

const REFERENCE_PREFIX: &str = "PL";
const REFERENCE_TOKEN_LEN: usize = 9;
const REFERENCE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reference issued for each accepted submission: `PL-` followed by nine
/// random base-36 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Samples a fresh reference token.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token: String = (0..REFERENCE_TOKEN_LEN)
            .map(|_| REFERENCE_CHARSET[rng.random_range(0..REFERENCE_CHARSET.len())] as char)
            .collect();
        Self(format!("{REFERENCE_PREFIX}-{token}"))
    }

    /// Borrow the reference as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ReferenceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReferenceId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s
            .strip_prefix(REFERENCE_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or(TypeConstraintError::InvalidReference)?;
        if token.len() != REFERENCE_TOKEN_LEN
            || !token.bytes().all(|b| REFERENCE_CHARSET.contains(&b))
        {
            return Err(TypeConstraintError::InvalidReference);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for ReferenceId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReferenceId> for String {
    fn from(value: ReferenceId) -> Self {
        value.0
    }
}

impl Serialize for ReferenceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReferenceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_references_match_the_issued_format() {
        let reference = ReferenceId::generate();
        assert!(reference.as_str().starts_with("PL-"));
        assert_eq!(reference.as_str().len(), 12);
        assert_eq!(
            reference.as_str().parse::<ReferenceId>().as_ref(),
            Ok(&reference)
        );
    }

    #[test]
    fn generated_references_are_distinct() {
        let a = ReferenceId::generate();
        let b = ReferenceId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_references_are_rejected() {
        for raw in ["", "PL-", "PL-abc", "XX-ABCDEF123", "PL-ABCDEF12", "PL-ABCDEF123X"] {
            assert_eq!(
                raw.parse::<ReferenceId>(),
                Err(TypeConstraintError::InvalidReference),
                "{raw:?} should not parse"
            );
        }
    }
}
