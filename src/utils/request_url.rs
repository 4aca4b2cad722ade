//! Request origin extraction from HTTP request headers and URI.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Builds the `scheme://host[:port]` origin the client used to reach the service.
///
/// The port is kept, since links must point back at the same listener.
///
/// Host resolution order:
/// 1. `X-Forwarded-Host` (only when `behind_proxy` is `true`)
/// 2. `Host` header
/// 3. Authority of the request URI (HTTP/2 `:authority`, absolute-form requests)
///
/// Scheme resolution order is `X-Forwarded-Proto` (only behind a proxy), the
/// scheme of the request URI, then `http`. Only the first value of a
/// comma-separated forwarded list is used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither a host header nor a URI authority is present
/// - A header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, &Uri::from_static("/actuator"), false).unwrap();
/// assert_eq!(origin, "http://example.com:8080");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    uri: &Uri,
    behind_proxy: bool,
) -> Result<String, AppError> {
    let forwarded_proto = if behind_proxy {
        first_forwarded_value(headers, X_FORWARDED_PROTO)?
    } else {
        None
    };
    let forwarded_host = if behind_proxy {
        first_forwarded_value(headers, X_FORWARDED_HOST)?
    } else {
        None
    };

    let host = match forwarded_host {
        Some(host) => host,
        None => match headers.get(header::HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
                .trim()
                .to_string(),
            None => uri
                .authority()
                .map(|authority| authority.as_str().to_string())
                .unwrap_or_default(),
        },
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = forwarded_proto
        .or_else(|| uri.scheme_str().map(str::to_string))
        .map(|proto| proto.to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}

fn first_forwarded_value(headers: &HeaderMap, name: &str) -> Result<Option<String>, AppError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::bad_request(format!("Invalid {name} header"), json!({})))?;

    Ok(value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, Uri, header};

    fn path_only() -> Uri {
        Uri::from_static("/actuator")
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &(name, value) in pairs {
            headers.insert(name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn test_origin_simple() {
        let headers = headers(&[("host", "example.com")]);

        assert_eq!(request_origin(&headers, &path_only(), false).unwrap(), "http://example.com");
    }

    #[test]
    fn test_origin_keeps_port() {
        let headers = headers(&[("host", "localhost:3000")]);

        assert_eq!(
            request_origin(&headers, &path_only(), false).unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_origin_ipv6_with_port() {
        let headers = headers(&[("host", "[::1]:8080")]);

        assert_eq!(request_origin(&headers, &path_only(), false).unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_forwarded_headers_ignored_without_proxy() {
        let headers = headers(&[
            ("host", "internal:3000"),
            ("x-forwarded-proto", "https"),
            ("x-forwarded-host", "api.example.com"),
        ]);

        assert_eq!(
            request_origin(&headers, &path_only(), false).unwrap(),
            "http://internal:3000"
        );
    }

    #[test]
    fn test_forwarded_headers_behind_proxy() {
        let headers = headers(&[
            ("host", "internal:3000"),
            ("x-forwarded-proto", "HTTPS, http"),
            ("x-forwarded-host", "api.example.com, internal"),
        ]);

        assert_eq!(
            request_origin(&headers, &path_only(), true).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_forwarded_proto_only_behind_proxy() {
        let headers = headers(&[("host", "api.example.com"), ("x-forwarded-proto", "https")]);

        assert_eq!(
            request_origin(&headers, &path_only(), true).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_missing_host_header() {
        let headers = HeaderMap::new();

        let result = request_origin(&headers, &path_only(), false);
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_empty_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(""));

        assert!(request_origin(&headers, &path_only(), false).is_err());
    }

    #[test]
    fn test_invalid_utf8_host() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            assert!(request_origin(&headers, &path_only(), false).is_err());
        }
    }

    #[test]
    fn test_origin_from_uri_authority_without_host() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("https://example.com:3000/actuator");

        assert_eq!(
            request_origin(&headers, &uri, false).unwrap(),
            "https://example.com:3000"
        );
    }

    #[test]
    fn test_host_header_wins_over_uri_authority() {
        let headers = headers(&[("host", "api.example.com")]);
        let uri = Uri::from_static("http://internal:3000/actuator");

        assert_eq!(
            request_origin(&headers, &uri, false).unwrap(),
            "http://api.example.com"
        );
    }

    #[test]
    fn test_forwarded_proto_wins_over_uri_scheme() {
        let headers = headers(&[("x-forwarded-proto", "https")]);
        let uri = Uri::from_static("http://api.example.com/actuator");

        assert_eq!(
            request_origin(&headers, &uri, true).unwrap(),
            "https://api.example.com"
        );
    }
}
