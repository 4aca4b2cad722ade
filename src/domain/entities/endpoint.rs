//! Management endpoint model: identifiers, web operations, and exposable endpoints.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Allowed characters for an endpoint id.
static ENDPOINT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+$").unwrap());

/// Errors that can occur while parsing an [`EndpointId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointIdError {
    #[error("Endpoint id must not be empty")]
    Empty,

    #[error("Endpoint id '{0}' must only contain letters, digits, '.' and '-'")]
    InvalidCharacters(String),

    #[error("Endpoint id '{0}' must not start with a number")]
    LeadingDigit(String),
}

/// Validated identifier of a management endpoint (e.g. `health`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointId(String);

impl EndpointId {
    /// Parses an endpoint id.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointIdError`] if the value is empty, contains characters
    /// outside `[a-zA-Z0-9.-]`, or starts with a digit.
    pub fn parse(value: impl Into<String>) -> Result<Self, EndpointIdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(EndpointIdError::Empty);
        }
        if !ENDPOINT_ID_REGEX.is_match(&value) {
            return Err(EndpointIdError::InvalidCharacters(value));
        }
        if value.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(EndpointIdError::LeadingDigit(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form with `.` and `-` removed, used for relation names
    /// and exposure matching.
    pub fn to_lower_case_string(&self) -> String {
        self.0
            .chars()
            .filter(|c| *c != '.' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One HTTP operation of a web endpoint.
///
/// The operation id doubles as the relation name in the discovery document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebOperation {
    pub id: String,
    pub path: String,
}

impl WebOperation {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// An endpoint that can be exposed under the actuator base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExposableEndpoint {
    /// Endpoint served by the actuator router, one link per operation.
    Web {
        id: EndpointId,
        operations: Vec<WebOperation>,
    },
    /// Endpoint mounted at a root path, linked once by its id.
    PathMapped { id: EndpointId, root_path: String },
}

impl ExposableEndpoint {
    pub fn id(&self) -> &EndpointId {
        match self {
            Self::Web { id, .. } | Self::PathMapped { id, .. } => id,
        }
    }
}
