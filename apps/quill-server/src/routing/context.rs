//! Per-request data handed to leaf handlers.

use std::collections::HashMap;

use actix_web::{HttpMessage, HttpRequest, web};
use quill_core::domain::AuthorId;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decoded `application/x-www-form-urlencoded` values.
///
/// Body values shadow query-string values of the same name; for repeated
/// keys the first occurrence wins.
#[derive(Debug, Default, Clone)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    /// Decode the request's form values.
    ///
    /// A non-empty body must be url-encoded; any other declared content
    /// type is rejected rather than read as an empty form.
    pub fn from_request(req: &HttpRequest, body: &[u8]) -> AppResult<Self> {
        let content_type = req.content_type();
        if !body.is_empty()
            && !content_type.is_empty()
            && !content_type.eq_ignore_ascii_case(FORM_CONTENT_TYPE)
        {
            tracing::debug!(content_type, "Rejected form body");
            return Err(AppError::BadRequest(format!(
                "Unsupported content type {content_type:?}, expected {FORM_CONTENT_TYPE}"
            )));
        }

        Ok(Self::parse(req.query_string(), body))
    }

    pub fn parse(query: &str, body: &[u8]) -> Self {
        let mut values = HashMap::new();

        for (key, value) in url::form_urlencoded::parse(body) {
            values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }

        Self { values }
    }

    /// Value of `key`, or the empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }
}

pub struct RequestContext {
    pub state: web::Data<AppState>,
    pub request: HttpRequest,
    pub params: Vec<String>,
    pub form: FormData,
}

impl RequestContext {
    /// Captured path segment `index`; the trie guarantees the captures a
    /// pattern declares are present.
    pub fn param(&self, index: usize) -> &str {
        self.params.get(index).map(String::as_str).unwrap_or_default()
    }

    /// The caller's identity, if they presented a valid token.
    pub fn identity(&self) -> Option<Identity> {
        Identity::from_request(&self.request, self.state.tokens.as_ref())
    }

    /// The caller's author id, or `Forbidden` for anonymous callers.
    pub fn require_author(&self) -> AppResult<AuthorId> {
        self.identity()
            .map(|identity| identity.author_id)
            .ok_or(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::test::TestRequest;

    #[test]
    fn test_form_body_values() {
        let form = FormData::parse("", b"title=Hello+world&body=a%26b");
        assert_eq!(form.get("title"), "Hello world");
        assert_eq!(form.get("body"), "a&b");
        assert_eq!(form.get("missing"), "");
    }

    #[test]
    fn test_body_shadows_query() {
        let form = FormData::parse("username=query&password=pw", b"username=body");
        assert_eq!(form.get("username"), "body");
        assert_eq!(form.get("password"), "pw");
    }

    #[test]
    fn test_urlencoded_or_undeclared_body_is_accepted() {
        let req = TestRequest::post()
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8"))
            .to_http_request();
        let form = FormData::from_request(&req, b"title=T").unwrap();
        assert_eq!(form.get("title"), "T");

        let req = TestRequest::post().to_http_request();
        assert!(FormData::from_request(&req, b"title=T").is_ok());
    }

    #[test]
    fn test_other_body_encodings_are_rejected() {
        for content_type in ["multipart/form-data; boundary=x", "application/json"] {
            let req = TestRequest::post()
                .insert_header((header::CONTENT_TYPE, content_type))
                .to_http_request();
            let err = FormData::from_request(&req, b"--x\r\n").unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{content_type}");
        }
    }

    #[test]
    fn test_empty_body_ignores_content_type() {
        let req = TestRequest::get()
            .uri("/?title=T")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .to_http_request();
        let form = FormData::from_request(&req, b"").unwrap();
        assert_eq!(form.get("title"), "T");
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let form = FormData::parse("", b"title=one&title=two");
        assert_eq!(form.get("title"), "one");
    }
}
