//! Secure credential handling using the secrecy crate
//!
//! The anti-forgery token and API keys are held as [`SecretString`] so they
//! are zeroed on drop and never show up in `Debug` output or logs.
//!
//! # Example
//!
//! ```rust
//! use url_exporter::config::{SecretString, SecretValue};
//! use secrecy::{Secret, ExposeSecret};
//!
//! let nonce: SecretString = Secret::new(SecretValue::from("a1b2c3".to_string()));
//! assert_eq!(nonce.expose_secret().as_str(), "a1b2c3");
//!
//! // Debug output is redacted
//! assert!(!format!("{:?}", nonce).contains("a1b2c3"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, ExposeSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Borrow the secret as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
///
/// ```rust
/// use url_exporter::config::secret_string;
///
/// let nonce = secret_string("a1b2c3".to_string());
/// ```
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Helper function to create an optional SecretString from an optional String
#[inline]
pub fn secret_string_opt(value: Option<String>) -> Option<SecretString> {
    value.map(secret_string)
}

/// Compare a secret against a candidate without exposing it to the caller
///
/// Runs over the full length of both inputs so the comparison time does not
/// depend on where the first mismatch occurs.
pub fn secret_matches(secret: &SecretString, candidate: &str) -> bool {
    let expected = secret.expose_secret().as_str().as_bytes();
    let candidate = candidate.as_bytes();
    let mut diff = expected.len() ^ candidate.len();
    for i in 0..expected.len().max(candidate.len()) {
        let a = expected.get(i).copied().unwrap_or(0);
        let b = candidate.get(i).copied().unwrap_or(0);
        diff |= usize::from(a ^ b);
    }
    diff == 0
}
