//! API Middleware
//!
//! Request context and request logging middleware.

use std::net::{IpAddr, SocketAddr};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::context::RequestContext;

/// Header carrying a caller-supplied correlation ID
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Header set by the request-id layer
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =========================================================================
// Request Context Middleware
// =========================================================================

/// Attach a [`RequestContext`] to every request.
///
/// The correlation ID comes from `X-Correlation-Id`, then `X-Request-Id`,
/// and is generated when neither parses as a UUID.
pub async fn request_context_middleware(mut request: Request<Body>, next: Next) -> Response {
    let correlation_id = correlation_id_from(request.headers()).unwrap_or_else(Uuid::new_v4);

    let mut context = RequestContext::new().with_correlation_id(correlation_id);
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        context = context.with_client_ip(addr.ip());
    }

    request.extensions_mut().insert(context);

    next.run(request).await
}

fn correlation_id_from(headers: &HeaderMap) -> Option<Uuid> {
    [CORRELATION_ID_HEADER, REQUEST_ID_HEADER]
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| Uuid::parse_str(value).ok())
}

// =========================================================================
// mask_headers_for_logging
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Correlation ID and client address recorded by [`request_context_middleware`]
fn request_identity(request: &Request<Body>) -> (Option<Uuid>, Option<IpAddr>) {
    request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| (ctx.correlation_id, ctx.client_ip))
        .unwrap_or((None, None))
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let version = request.version();

    // Mask sensitive headers
    let headers = mask_headers_for_logging(request.headers());

    let (correlation_id, client_ip) = request_identity(&request);

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        version = ?version,
        correlation_id = ?correlation_id,
        client_ip = ?client_ip,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        correlation_id = ?correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_headers_for_logging() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("authorization", "Bearer secret".parse().unwrap());
        headers.insert("x-correlation-id", "abc".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);

        let auth = masked.iter().find(|(k, _)| k == "authorization");
        let content_type = masked.iter().find(|(k, _)| k == "content-type");
        let correlation = masked.iter().find(|(k, _)| k == "x-correlation-id");

        assert_eq!(auth.unwrap().1, "[REDACTED]");
        assert_eq!(content_type.unwrap().1, "application/json");
        assert_eq!(correlation.unwrap().1, "abc");
    }

    #[test]
    fn test_correlation_id_prefers_explicit_header() {
        let explicit = Uuid::new_v4();
        let request_id = Uuid::new_v4();

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, request_id.to_string().parse().unwrap());
        assert_eq!(correlation_id_from(&headers), Some(request_id));

        headers.insert(CORRELATION_ID_HEADER, explicit.to_string().parse().unwrap());
        assert_eq!(correlation_id_from(&headers), Some(explicit));
    }

    #[test]
    fn test_request_identity_reads_context() {
        let correlation_id = Uuid::new_v4();
        let ip: IpAddr = "192.168.1.20".parse().unwrap();

        let mut request = Request::new(Body::empty());
        assert_eq!(request_identity(&request), (None, None));

        request.extensions_mut().insert(
            RequestContext::new()
                .with_correlation_id(correlation_id)
                .with_client_ip(ip),
        );
        assert_eq!(
            request_identity(&request),
            (Some(correlation_id), Some(ip))
        );
    }

    #[test]
    fn test_correlation_id_ignores_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, "not-a-uuid".parse().unwrap());
        assert_eq!(correlation_id_from(&headers), None);
    }
}
