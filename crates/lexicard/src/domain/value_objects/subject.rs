//! Subject - Tag grouping vocabulary entries, and the filter over it

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Longest accepted subject tag, in characters
pub const MAX_SUBJECT_LEN: usize = 32;

/// Filter keyword meaning "every subject"
pub const ALL_SUBJECTS: &str = "all";

/// Normalized subject tag (lowercase, `[a-z0-9_-]`, never `all`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Trim, lowercase and validate a raw tag
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let tag = raw.trim().to_lowercase();

        if tag.is_empty() {
            return Err(DomainError::validation("Subject cannot be empty"));
        }
        if tag == ALL_SUBJECTS {
            return Err(DomainError::validation(
                "Subject 'all' is reserved for the unfiltered view",
            ));
        }
        if tag.chars().count() > MAX_SUBJECT_LEN {
            return Err(DomainError::Validation(format!(
                "Subject must be at most {} characters",
                MAX_SUBJECT_LEN
            )));
        }
        if let Some(bad) = tag
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::Validation(format!(
                "Subject contains invalid character '{}'",
                bad
            )));
        }

        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Subject {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Equality filter over the subject of vocabulary entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SubjectFilter {
    /// No filtering
    #[default]
    All,
    /// Only entries tagged with this subject
    Only(Subject),
}

impl SubjectFilter {
    pub fn matches(&self, subject: &Subject) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(only) => only == subject,
        }
    }

    /// The subject to filter on, if any
    pub fn subject(&self) -> Option<&Subject> {
        match self {
            SubjectFilter::All => None,
            SubjectFilter::Only(subject) => Some(subject),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubjectFilter::All => ALL_SUBJECTS,
            SubjectFilter::Only(subject) => subject.as_str(),
        }
    }
}

impl std::str::FromStr for SubjectFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SUBJECTS) {
            return Ok(SubjectFilter::All);
        }
        Subject::parse(trimmed).map(SubjectFilter::Only)
    }
}

impl TryFrom<String> for SubjectFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubjectFilter> for String {
    fn from(filter: SubjectFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl std::fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
