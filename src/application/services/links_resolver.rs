//! Builds the `_links` section of the discovery document.

use crate::domain::entities::{ExposableEndpoint, Link, Links, WebOperation};

/// Resolves links to the exposed endpoints relative to a request URL.
pub struct EndpointLinksResolver {
    endpoints: Vec<ExposableEndpoint>,
}

impl EndpointLinksResolver {
    /// Creates a resolver for the given (already filtered) endpoints.
    pub fn new(endpoints: Vec<ExposableEndpoint>) -> Self {
        tracing::debug!("Exposing {} endpoint(s)", endpoints.len());
        Self { endpoints }
    }

    /// Returns the endpoints this resolver links to.
    pub fn endpoints(&self) -> &[ExposableEndpoint] {
        &self.endpoints
    }

    /// Resolves links to the known endpoints based on a request with the
    /// given URL.
    ///
    /// # Link Order
    ///
    /// 1. `self` - the request URL without a trailing slash
    /// 2. One link per operation of each web endpoint, keyed by operation id
    /// 3. One link per path-mapped endpoint, keyed by its lower-case id
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let links = resolver.resolve_links("http://localhost:3000/actuator/");
    /// assert_eq!(links.get("self").unwrap().href(), "http://localhost:3000/actuator");
    /// ```
    pub fn resolve_links(&self, request_url: &str) -> Links {
        let normalized_url = normalize_request_url(request_url);
        let mut links = Links::new();
        links.insert("self", Link::new(normalized_url));

        for endpoint in &self.endpoints {
            match endpoint {
                ExposableEndpoint::Web { operations, .. } => {
                    for WebOperation { id, path } in operations {
                        links.insert(id.clone(), create_link(normalized_url, path));
                    }
                }
                ExposableEndpoint::PathMapped { id, root_path } => {
                    links.insert(
                        id.to_lower_case_string(),
                        create_link(normalized_url, root_path),
                    );
                }
            }
        }

        links
    }
}

fn normalize_request_url(request_url: &str) -> &str {
    request_url.strip_suffix('/').unwrap_or(request_url)
}

fn create_link(request_url: &str, path: &str) -> Link {
    if path.starts_with('/') {
        Link::new(format!("{request_url}{path}"))
    } else {
        Link::new(format!("{request_url}/{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EndpointId;

    fn web(id: &str, operations: &[(&str, &str)]) -> ExposableEndpoint {
        ExposableEndpoint::Web {
            id: EndpointId::parse(id).unwrap(),
            operations: operations
                .iter()
                .map(|(op, path)| WebOperation::new(*op, *path))
                .collect(),
        }
    }

    #[test]
    fn test_self_link_without_endpoints() {
        let resolver = EndpointLinksResolver::new(vec![]);

        let links = resolver.resolve_links("http://api.example.com/actuator");

        assert_eq!(links.len(), 1);
        let link = links.get("self").unwrap();
        assert_eq!(link.href(), "http://api.example.com/actuator");
        assert!(!link.is_templated());
    }

    #[test]
    fn test_trailing_slash_is_removed() {
        let resolver = EndpointLinksResolver::new(vec![web("info", &[("info", "info")])]);

        let links = resolver.resolve_links("http://api.example.com/actuator/");

        assert_eq!(
            links.get("self").unwrap().href(),
            "http://api.example.com/actuator"
        );
        assert_eq!(
            links.get("info").unwrap().href(),
            "http://api.example.com/actuator/info"
        );
    }

    #[test]
    fn test_web_endpoint_operations() {
        let resolver = EndpointLinksResolver::new(vec![web(
            "health",
            &[("health", "health"), ("health-path", "health/{*path}")],
        )]);

        let links = resolver.resolve_links("http://localhost/actuator");

        let names: Vec<&str> = links.iter().map(|(rel, _)| rel).collect();
        assert_eq!(names, vec!["self", "health", "health-path"]);

        let health = links.get("health").unwrap();
        assert_eq!(health.href(), "http://localhost/actuator/health");
        assert!(!health.is_templated());

        let health_path = links.get("health-path").unwrap();
        assert_eq!(
            health_path.href(),
            "http://localhost/actuator/health/{*path}"
        );
        assert!(health_path.is_templated());
    }

    #[test]
    fn test_path_with_leading_slash() {
        let resolver = EndpointLinksResolver::new(vec![web("info", &[("info", "/info")])]);

        let links = resolver.resolve_links("http://localhost/actuator");

        assert_eq!(
            links.get("info").unwrap().href(),
            "http://localhost/actuator/info"
        );
    }

    #[test]
    fn test_path_mapped_endpoint_uses_lower_case_id() {
        let resolver = EndpointLinksResolver::new(vec![ExposableEndpoint::PathMapped {
            id: EndpointId::parse("API-Docs").unwrap(),
            root_path: "docs".to_string(),
        }]);

        let links = resolver.resolve_links("https://example.com/manage");

        assert_eq!(
            links.get("apidocs").unwrap().href(),
            "https://example.com/manage/docs"
        );
    }

    #[test]
    fn test_relative_request_url() {
        let resolver = EndpointLinksResolver::new(vec![web("info", &[("info", "info")])]);

        let links = resolver.resolve_links("/actuator");

        assert_eq!(links.get("info").unwrap().href(), "/actuator/info");
    }
}
