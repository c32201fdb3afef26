//! Integer addition endpoint.
//!
//! The body is decoded as JSON whatever the `Content-Type` header says. Both
//! operands are presence-required: a missing field is rejected rather than
//! treated as zero, while an explicit `0` is an ordinary operand.

use std::collections::HashMap;

use axum::{body::Bytes, extract::rejection::BytesRejection, Json};
use serde::{de::Error as _, Serialize};
use serde_json::value::RawValue;

use crate::error::AppError;

/// Operands of a sum request. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumRequest {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SumResponse {
    pub result: i64,
}

impl SumRequest {
    /// Decode and validate a raw request body.
    ///
    /// The body must be a JSON object; a derived struct decoder would also
    /// bind a two-element array positionally.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let fields: HashMap<String, &RawValue> = serde_json::from_slice(body)?;
        Ok(Self {
            a: operand(&fields, "a")?,
            b: operand(&fields, "b")?,
        })
    }

    /// Two's-complement sum; overflow wraps around.
    pub fn sum(&self) -> i64 {
        self.a.wrapping_add(self.b)
    }
}

/// Bind one operand from its raw JSON text.
fn operand(
    fields: &HashMap<String, &RawValue>,
    name: &'static str,
) -> Result<i64, serde_json::Error> {
    let raw = fields
        .get(name)
        .ok_or_else(|| serde_json::Error::missing_field(name))?;

    match serde_json::from_str::<i64>(raw.get()) {
        Ok(value) => Ok(value),
        // serde_json reads the integer literal `-0` as the float -0.0
        Err(_) if raw.get() == "-0" => Ok(0),
        Err(e) => Err(e),
    }
}

/// `POST /sum` handler.
pub async fn sum(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SumResponse>, AppError> {
    let body = body?;
    let request = SumRequest::from_body(&body).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected sum request");
    })?;

    let result = request.sum();
    tracing::trace!(a = request.a, b = request.b, result, "Computed sum");

    Ok(Json(SumResponse { result }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<SumRequest, AppError> {
        SumRequest::from_body(body.as_bytes())
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode(r#"{"a": 10, "b": 20}"#).unwrap(), SumRequest { a: 10, b: 20 });
    }

    #[test]
    fn test_zero_is_a_valid_operand() {
        let request = decode(r#"{"a": 0, "b": 0}"#).unwrap();
        assert_eq!(request.sum(), 0);
    }

    #[test]
    fn test_negative_zero_literal_is_an_integer() {
        let request = decode(r#"{"a": -0, "b": 5}"#).unwrap();
        assert_eq!(request, SumRequest { a: 0, b: 5 });

        let request = decode(r#"{"a":-0,"b":-0}"#).unwrap();
        assert_eq!(request.sum(), 0);
    }

    #[test]
    fn test_negative_zero_float_forms_rejected() {
        for body in [
            r#"{"a": -0.0, "b": 5}"#,
            r#"{"a": 0e0, "b": 5}"#,
            r#"{"a": -0e0, "b": 5}"#,
            r#"{"a": 5, "b": -0E1}"#,
        ] {
            assert!(decode(body).is_err(), "accepted {}", body);
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let request = decode(r#"{"a": 1, "b": 2, "c": 3}"#).unwrap();
        assert_eq!(request.sum(), 3);
    }

    #[test]
    fn test_missing_field_is_not_zero() {
        let err = decode(r#"{"a": 10, "c": 50}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `b`"), "{}", err);

        let err = decode(r#"{"b": 10}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `a`"), "{}", err);
    }

    #[test]
    fn test_non_integer_operands_rejected() {
        for body in [
            r#"{"a": "10", "b": 20}"#,
            r#"{"a": 10, "b": 2.5}"#,
            r#"{"a": 10.0, "b": 2}"#,
            r#"{"a": null, "b": 2}"#,
            r#"{"a": true, "b": 2}"#,
            r#"{"a": [1], "b": 2}"#,
            r#"{"a": 1, "b": {"v": 2}}"#,
        ] {
            assert!(
                matches!(decode(body), Err(AppError::Validation(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_out_of_range_integer_rejected() {
        assert!(decode(r#"{"a": 9223372036854775808, "b": 0}"#).is_err());
        assert!(decode(r#"{"a": -9223372036854775809, "b": 0}"#).is_err());
    }

    #[test]
    fn test_malformed_bodies_rejected() {
        for body in ["", "{", "[]", "[1, 2]", "null", "42", r#"{"a": 1, "b": 2"#] {
            assert!(decode(body).is_err(), "accepted {:?}", body);
        }
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        let request = SumRequest { a: i64::MAX, b: 1 };
        assert_eq!(request.sum(), i64::MIN);

        let request = SumRequest { a: i64::MIN, b: -1 };
        assert_eq!(request.sum(), i64::MAX);
    }

    #[tokio::test]
    async fn test_handler_returns_sum() {
        let Json(response) = sum(Ok(Bytes::from_static(br#"{"a": -5, "b": 5}"#)))
            .await
            .unwrap();
        assert_eq!(response, SumResponse { result: 0 });
    }

    #[tokio::test]
    async fn test_handler_rejects_empty_object() {
        let err = sum(Ok(Bytes::from_static(b"{}"))).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_a_json_422() {
        use axum::{body::Body, extract::DefaultBodyLimit, http::Request, routing::post, Router};
        use tower::ServiceExt;

        let app = Router::new()
            .route("/sum", post(sum))
            .layer(DefaultBodyLimit::max(16));
        let request = Request::builder()
            .method("POST")
            .uri("/sum")
            .body(Body::from(r#"{"a": 1, "b": 2, "pad": "xxxxxxxx"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(!json["error"].as_str().unwrap().is_empty());
    }
}
