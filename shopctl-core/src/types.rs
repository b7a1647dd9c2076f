//! Core type definitions with strong typing and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Deployment target
///
/// Selects the compose file and the suffix used in backup names and
/// prompts. Development is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development stack
    #[default]
    Development,
    /// Production stack
    Production,
}

impl Mode {
    /// Every mode, development first
    pub const ALL: [Self; 2] = [Self::Development, Self::Production];

    /// Short label used in generated filenames
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prod",
        }
    }

    /// Full lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(Error::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Name of a service known to the orchestrator
///
/// Only the shape is checked here. Whether the service exists is left to
/// the orchestrator, which reports it in its own words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    /// Create a new `ServiceName` with validation
    ///
    /// # Errors
    /// Returns error if the name is empty or contains whitespace
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::InvalidService {
                message: "Service name cannot be empty".to_string(),
            });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidService {
                message: format!("'{name}' contains whitespace"),
            });
        }

        Ok(Self(name))
    }

    /// Get the service name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
