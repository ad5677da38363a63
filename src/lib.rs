//! API 응답 포맷 라이브러리
//!
//! actix-web 기반 API 엔드포인트가 반환하는 JSON 응답 형식을 표준화합니다.
//! 임의의 페이로드(매핑, 모델, 직렬화 가능한 객체, 문자열, 스칼라)를
//! `{code, msg, ...data}` 형태의 일관된 envelope으로 감쌉니다.
//!
//! # Features
//!
//! - **표준 envelope**: 결과 코드 키와 메시지 키를 항상 같은 형태로 제공
//! - **설정 가능한 키**: 키 이름과 기본 성공 코드를 환경 변수 또는 설정 제공자로 변경
//! - **빈 값 정리**: 지정한 키 경로의 `null`, 빈 문자열, 빈 컨테이너 제거
//! - **예외 응답**: `?` 연산자로 완성된 응답을 전파하는 에러 타입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Payload     │ ← 입력값 (모델, 매핑, 문자열, 스칼라)
//! └─────────────────┘
//!          │ 정규화
//!          ▼
//! ┌─────────────────┐
//! │   ApiResponse   │ ← code / msg / data + 상태 코드, 헤더
//! └─────────────────┘
//!          │ Responder / ResponseError
//!          ▼
//! ┌─────────────────┐
//! │  HttpResponse   │ ← actix-web 응답
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use serde_json::json;
//! use api_response::exceptions::ApiResponseException;
//! use api_response::http::ApiResponse;
//!
//! async fn show_user(id: u64) -> Result<ApiResponse, ApiResponseException> {
//!     if id == 0 {
//!         return Err(ApiResponseException::with_code("사용자를 찾을 수 없습니다", 404));
//!     }
//!
//!     let mut response = ApiResponse::new(json!({"user": {"id": id, "bio": null}}));
//!     response.clean(["user"]).set_message("ok");
//!     Ok(response)
//! }
//! // → {"user": {"id": 1}, "code": 1, "msg": "ok"}
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod utils;
pub mod http;
pub mod exceptions;

pub use crate::config::ResponseConfig;
pub use crate::core::errors::{ApiError, ApiResult};
pub use crate::domain::{Arrayable, Model, Payload};
pub use crate::exceptions::ApiResponseException;
pub use crate::http::ApiResponse;
