//! 路径参数安全提取器
//!
//! 非法 id（非数字、<= 0）直接返回 400，避免散落在各 handler 里重复校验。

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorBadRequest};
use futures_util::future::{Ready, err, ok};
use serde_json::json;

use crate::models::{ApiResponse, ErrorCode};

/// 路径里的正整数 id
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl SafeIDI64 {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => ok(SafeIDI64(id)),
            _ => err(bad_id_error(raw)),
        }
    }
}

fn bad_id_error(raw: &str) -> actix_web::Error {
    let body = ApiResponse::error_empty(ErrorCode::BadRequest, format!("无效的 ID 参数: '{raw}'"));
    ErrorBadRequest(json!(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id.into_inner(), 42);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric() {
        let req = TestRequest::default()
            .param("id", "abc")
            .to_http_request();
        assert!(SafeIDI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_rejects_non_positive() {
        let req = TestRequest::default().param("id", "0").to_http_request();
        assert!(SafeIDI64::extract(&req).await.is_err());
    }
}
