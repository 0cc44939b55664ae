//! Domain identifier types with validation
//!
//! Newtype wrappers for the two halves of an export request: the taxonomy
//! name and the term identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Taxonomy name newtype wrapper
///
/// A named classification scheme such as `category` or `post_tag`.
///
/// # Examples
///
/// ```
/// use url_exporter::domain::ids::Taxonomy;
/// use std::str::FromStr;
///
/// let taxonomy = Taxonomy::from_str("category").unwrap();
/// assert_eq!(taxonomy.as_str(), "category");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Taxonomy(String);

impl Taxonomy {
    /// Creates a new Taxonomy from a string
    ///
    /// Surrounding whitespace is trimmed; an empty result is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Taxonomy cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the taxonomy name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Taxonomy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Taxonomy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Taxonomy> for String {
    fn from(value: Taxonomy) -> Self {
        value.0
    }
}

impl AsRef<str> for Taxonomy {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Term identifier newtype wrapper
///
/// A positive integer identifying a single term inside a taxonomy.
///
/// # Examples
///
/// ```
/// use url_exporter::domain::ids::TermId;
///
/// let term_id = TermId::new(42).unwrap();
/// assert_eq!(term_id.get(), 42);
/// assert!(TermId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TermId(u64);

impl TermId {
    /// Creates a new TermId, rejecting zero
    pub fn new(id: u64) -> Result<Self, String> {
        if id == 0 {
            return Err("Term ID must be a positive integer".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the numeric identifier
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("Term ID must be a positive integer, got '{s}'"))?;
        Self::new(id)
    }
}

impl TryFrom<u64> for TermId {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TermId> for u64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}
