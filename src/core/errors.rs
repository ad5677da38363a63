//! # Error Handling
//!
//! 응답 포맷 라이브러리에서 발생할 수 있는 에러를 정의합니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?` 연산자로 전파하면 표준 envelope 형태의 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | ApiError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ConversionError` | 500 Internal Server Error | 객체 → 매핑 변환 실패 |
//! | `InvalidHeader` | 500 Internal Server Error | 잘못된 헤더 이름/값 |
//! | `SerializationError` | 500 Internal Server Error | 응답 본문 인코딩 실패 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use api_response::core::errors::ApiResult;
//! use api_response::domain::Payload;
//! use api_response::http::ApiResponse;
//!
//! async fn show_report() -> ApiResult<ApiResponse> {
//!     let report = build_report();
//!     let payload = Payload::from_serialize(&report)?; // 실패 시 500 envelope
//!     Ok(ApiResponse::new(payload))
//! }
//! ```

use thiserror::Error;

use crate::config::ResponseConfig;

/// 에러 응답에 사용되는 결과 코드
pub const ERROR_RESULT_CODE: i64 = -1;

/// 라이브러리 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 직렬화 가능한 객체를 JSON 매핑으로 변환하지 못한 경우
    ///
    /// 원래의 "조용한 실패"(빈 매핑으로 대체) 대신 호출자가
    /// 빈 페이로드와 변환 실패를 구분할 수 있도록 노출합니다.
    #[error("Conversion error: {0}")]
    ConversionError(String),

    /// 헤더 이름 또는 값이 유효하지 않은 경우
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// 응답 본문을 JSON으로 인코딩하지 못한 경우
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    /// 표준 envelope 형태의 에러 응답을 생성합니다.
    ///
    /// 메시지 키에는 에러 메시지가, 코드 키에는 `-1`이 기록됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let config = ResponseConfig::global();

        let mut body = serde_json::Map::new();
        body.insert(
            config.message_key.clone(),
            serde_json::Value::String(self.to_string()),
        );
        body.insert(config.code_key.clone(), ERROR_RESULT_CODE.into());

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_conversion_error_response() {
        let error = ApiError::ConversionError("key must be a string".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_body_is_envelope() {
        let error = ApiError::InvalidHeader("bad header".to_string());
        let response = error.error_response();

        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let config = ResponseConfig::global();
        assert_eq!(body[&config.code_key], ERROR_RESULT_CODE);
        assert_eq!(body[&config.message_key], "Invalid header: bad header");
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::SerializationError("recursion limit".to_string());
        assert_eq!(error.to_string(), "Serialization error: recursion limit");
    }
}
