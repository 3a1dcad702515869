//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// A contact name is the unique key under which a record is stored in the
/// address book, so it must be non-empty. The stored value is kept exactly
/// as provided; only whitespace-only input is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the input is empty after
    /// trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("   "), Err(ValidationError::EmptyName));
        assert_eq!(Name::new("\t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_preserves_value() {
        // Surrounding whitespace is rejected only when nothing else remains.
        let name = Name::new(" Bob ").unwrap();
        assert_eq!(name.as_str(), " Bob ");
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Charlie").unwrap();
        assert_eq!(format!("{}", name), "Charlie");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Dana").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Dana\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
