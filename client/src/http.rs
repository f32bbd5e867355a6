//! HTTP transport types for the host-does-IO pattern.
//!
//! GraphQL over HTTP only needs one shape of request here: a JSON `POST` to
//! the query endpoint. The caller maps `HttpRequest` onto its HTTP stack and
//! hands back the status and body as an `HttpResponse`.

/// A `POST` request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The status and body of an HTTP response. Headers are not needed: the
/// endpoint always answers with a JSON GraphQL envelope.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}
