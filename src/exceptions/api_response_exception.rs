//! # API Response Exception
//!
//! 완성된 [`ApiResponse`]를 담아 전파되는 에러 타입입니다.
//! 핸들러가 `Result<_, ApiResponseException>`을 반환하면 actix-web이
//! [`ResponseError`] 구현을 통해 담긴 응답을 그대로 클라이언트에 전송합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{get, web};
//! use api_response::exceptions::ApiResponseException;
//! use api_response::http::ApiResponse;
//!
//! #[get("/orders/{id}")]
//! async fn show_order(id: web::Path<u64>) -> Result<ApiResponse, ApiResponseException> {
//!     let order = find_order(*id)
//!         .ok_or_else(|| ApiResponseException::with_code("주문을 찾을 수 없습니다", 404))?;
//!     Ok(ApiResponse::new(order))
//! }
//! // 실패 시 → 200 {"msg": "주문을 찾을 수 없습니다", "code": 404}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::Payload;
use crate::http::ApiResponse;

/// 예외 응답의 기본 결과 코드
pub const DEFAULT_EXCEPTION_CODE: i64 = -1;

/// 응답을 담아 전파되는 에러
#[derive(Error, Debug, Clone)]
#[error("api response exception (code {})", .response.code())]
pub struct ApiResponseException {
    response: ApiResponse,
}

impl ApiResponseException {
    /// 기본 결과 코드(`-1`)로 예외를 생성합니다.
    pub fn new(payload: impl Into<Payload>) -> Self {
        Self::with_code(payload, DEFAULT_EXCEPTION_CODE)
    }

    /// 지정한 결과 코드로 예외를 생성합니다.
    pub fn with_code(payload: impl Into<Payload>, code: i64) -> Self {
        Self {
            response: ApiResponse::with_code(payload, code),
        }
    }

    /// 담긴 응답
    pub fn response(&self) -> &ApiResponse {
        &self.response
    }

    /// 담긴 응답 (가변)
    pub fn response_mut(&mut self) -> &mut ApiResponse {
        &mut self.response
    }

    /// 담긴 응답을 꺼냅니다.
    pub fn into_response(self) -> ApiResponse {
        self.response
    }
}

impl From<ApiResponse> for ApiResponseException {
    fn from(response: ApiResponse) -> Self {
        Self { response }
    }
}

impl ResponseError for ApiResponseException {
    fn status_code(&self) -> StatusCode {
        self.response.status()
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("{} 응답 전송", self);
        self.response.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::test::{
        TestRequest, call_and_read_body_json, call_service, init_service, read_body_json,
    };
    use actix_web::{App, web};
    use serde_json::{Value, json};

    use crate::config::ResponseConfig;

    fn config() -> Arc<ResponseConfig> {
        Arc::new(ResponseConfig::default())
    }

    #[test]
    fn test_default_code_is_negative_one() {
        let exception = ApiResponseException::new("failed");
        assert_eq!(exception.response().code(), -1);
        assert_eq!(exception.to_string(), "api response exception (code -1)");
    }

    #[test]
    fn test_from_response() {
        let response = ApiResponse::with_config(config(), "denied", Some(403));
        let exception = ApiResponseException::from(response);

        assert_eq!(exception.response().code(), 403);
        assert_eq!(exception.status_code(), StatusCode::OK);
        assert_eq!(exception.into_response().message(), Some(&json!("denied")));
    }

    #[test]
    fn test_status_code_follows_response() {
        let mut exception =
            ApiResponseException::from(ApiResponse::with_config(config(), (), Some(9)));
        exception
            .response_mut()
            .set_status_code(StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(exception.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            exception.error_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    async fn find_order(path: web::Path<u64>) -> Result<ApiResponse, ApiResponseException> {
        let id = path.into_inner();
        if id != 1 {
            return Err(ApiResponseException::from(ApiResponse::with_config(
                config(),
                "order not found",
                Some(404),
            )));
        }
        Ok(ApiResponse::with_config(config(), json!({"order": {"id": id}}), None))
    }

    #[actix_web::test]
    async fn test_handler_sends_carried_response() {
        let app =
            init_service(App::new().route("/orders/{id}", web::get().to(find_order))).await;

        let req = TestRequest::get().uri("/orders/1").to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"order": {"id": 1}, "code": 1}));

        let req = TestRequest::get().uri("/orders/2").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"msg": "order not found", "code": 404}));
    }
}
