//! Include/exclude filter deciding which endpoints are exposed over HTTP.

use crate::domain::entities::{EndpointId, ExposableEndpoint};

/// Endpoint exposure rules.
///
/// Ids are compared in their lower-case form (see
/// [`EndpointId::to_lower_case_string`]). `*` matches every endpoint.
/// An excluded endpoint is never exposed, even when it is also included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointExposure {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl EndpointExposure {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            include: include.into_iter().filter_map(clean).collect(),
            exclude: exclude.into_iter().filter_map(clean).collect(),
        }
    }

    /// Parses comma-separated include and exclude lists, e.g. `health,info`.
    pub fn from_lists(include: &str, exclude: &str) -> Self {
        Self::new(include.split(','), exclude.split(','))
    }

    pub fn is_exposed(&self, id: &EndpointId) -> bool {
        let id = id.to_lower_case_string();
        if matches(&self.exclude, &id) {
            return false;
        }
        matches(&self.include, &id)
    }

    /// Keeps only the exposed endpoints, preserving order.
    pub fn filter(&self, endpoints: Vec<ExposableEndpoint>) -> Vec<ExposableEndpoint> {
        endpoints
            .into_iter()
            .filter(|endpoint| self.is_exposed(endpoint.id()))
            .collect()
    }
}

impl Default for EndpointExposure {
    fn default() -> Self {
        Self::from_lists("health,info", "")
    }
}

fn clean(value: impl AsRef<str>) -> Option<String> {
    let value = value.as_ref().trim();
    if value.is_empty() {
        return None;
    }
    if value == "*" {
        return Some(value.to_string());
    }
    Some(
        value
            .chars()
            .filter(|c| *c != '.' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect(),
    )
}

fn matches(patterns: &[String], id: &str) -> bool {
    patterns.iter().any(|p| p == "*" || p == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> EndpointId {
        EndpointId::parse(value).unwrap()
    }

    #[test]
    fn test_default_exposes_health_and_info() {
        let exposure = EndpointExposure::default();

        assert!(exposure.is_exposed(&id("health")));
        assert!(exposure.is_exposed(&id("info")));
        assert!(!exposure.is_exposed(&id("env")));
    }

    #[test]
    fn test_wildcard_include() {
        let exposure = EndpointExposure::from_lists("*", "");

        assert!(exposure.is_exposed(&id("anything")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let exposure = EndpointExposure::from_lists("*", "info");

        assert!(exposure.is_exposed(&id("health")));
        assert!(!exposure.is_exposed(&id("info")));
    }

    #[test]
    fn test_matching_ignores_case_and_separators() {
        let exposure = EndpointExposure::from_lists(" Api-Docs , HEALTH ", "");

        assert!(exposure.is_exposed(&id("apidocs")));
        assert!(exposure.is_exposed(&id("api.docs")));
        assert!(exposure.is_exposed(&id("health")));
    }

    #[test]
    fn test_empty_include_exposes_nothing() {
        let exposure = EndpointExposure::from_lists("", "");

        assert!(!exposure.is_exposed(&id("health")));
    }

    #[test]
    fn test_filter_preserves_order() {
        let endpoints = vec![
            ExposableEndpoint::PathMapped {
                id: id("info"),
                root_path: "info".to_string(),
            },
            ExposableEndpoint::PathMapped {
                id: id("env"),
                root_path: "env".to_string(),
            },
            ExposableEndpoint::PathMapped {
                id: id("health"),
                root_path: "health".to_string(),
            },
        ];

        let exposed = EndpointExposure::default().filter(endpoints);

        let ids: Vec<&str> = exposed.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["info", "health"]);
    }
}
