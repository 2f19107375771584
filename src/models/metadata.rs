//! The application metadata record and its validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Metadata describing a single application.
///
/// Every field defaults to empty when absent or `null` in a payload, so a
/// body without `version` decodes and is then rejected by
/// [`validate`](Self::validate).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApplicationMetadata {
    /// Server-assigned identifier, equal to the record's storage key.
    #[serde(rename = "applicationID", deserialize_with = "null_as_default")]
    pub application_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Release version. Must be non-empty.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    /// People responsible for the application, in the order supplied.
    #[serde(deserialize_with = "null_as_default")]
    pub maintainers: Vec<Maintainer>,

    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,

    /// Free text, typically markdown.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A person maintaining an application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Maintainer {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Human-readable reason a record was rejected.
///
/// Also the shape of every error body the API returns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationMessage {
    pub description: String,
}

impl ValidationMessage {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl ApplicationMetadata {
    /// Check the record against the domain rules.
    ///
    /// Rules run in order and stop at the first failure:
    /// 1. `version` must be non-empty.
    /// 2. each maintainer's email must be non-empty, then well-formed.
    pub fn validate(&self) -> Result<(), ValidationMessage> {
        self.validate_version()?;
        self.validate_maintainers()
    }

    fn validate_version(&self) -> Result<(), ValidationMessage> {
        if self.version.is_empty() {
            return Err(ValidationMessage::new("version is empty"));
        }
        Ok(())
    }

    fn validate_maintainers(&self) -> Result<(), ValidationMessage> {
        for maintainer in &self.maintainers {
            if maintainer.email.is_empty() {
                return Err(ValidationMessage::new("maintainer's email is empty"));
            }
            if !is_valid_email(&maintainer.email) {
                return Err(ValidationMessage::new(format!(
                    "{} is not a valid email address",
                    maintainer.email
                )));
            }
        }
        Ok(())
    }
}

/// Explicit `null` decodes like an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validate email format.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
