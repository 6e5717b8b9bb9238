//! JSON body extractor that follows the store-first error policy.
//!
//! A body without a JSON content type, or an empty body, is read as `{}`, so
//! every field is missing and the store's `NOT NULL` constraints decide.
//! Only syntactically invalid JSON is rejected up front (400); JSON of the
//! wrong shape is reported like any other failed insert (500).

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

const EMPTY_OBJECT: &[u8] = b"{}";

/// Request body decoded as `T`, with rejections in the [`ApiError`] shape.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let body = if is_json && !bytes.is_empty() {
            bytes
        } else {
            Bytes::from_static(EMPTY_OBJECT)
        };
        let Json(value) = Json::<T>::from_bytes(&body)?;
        Ok(AppJson(value))
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn recognizes_json_media_types() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers_with("application/ld+json")));
    }

    #[test]
    fn other_media_types_are_not_json() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
    }
}
