//! Language domain model
//!
//! The closed set of languages the execution backend is configured for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language understood by the execution backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    C,
}

/// Returned when a language name or backend id is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language, in display order
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::C];

    /// Identifier of this language in the backend's registry
    pub fn backend_id(self) -> u32 {
        match self {
            Language::Python => 71,
            Language::Java => 62,
            Language::C => 50,
        }
    }

    /// Looks up a language by its backend registry id
    pub fn from_backend_id(id: u32) -> Result<Self, UnknownLanguage> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.backend_id() == id)
            .ok_or_else(|| UnknownLanguage(id.to_string()))
    }

    /// Lowercase name used in URLs, files and persisted records
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "python3" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "c" => Ok(Language::C),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_ids() {
        assert_eq!(Language::Python.backend_id(), 71);
        assert_eq!(Language::Java.backend_id(), 62);
        assert_eq!(Language::C.backend_id(), 50);
    }

    #[test]
    fn test_from_backend_id() {
        assert_eq!(Language::from_backend_id(62), Ok(Language::Java));
        assert!(Language::from_backend_id(999).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Python".parse::<Language>(), Ok(Language::Python));
        assert_eq!("py".parse::<Language>(), Ok(Language::Python));
        assert_eq!(" c ".parse::<Language>(), Ok(Language::C));
        assert_eq!(
            "cobol".parse::<Language>(),
            Err(UnknownLanguage("cobol".to_string()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Java).unwrap();
        assert_eq!(json, "\"java\"");
        let lang: Language = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(lang, Language::C);
    }
}
