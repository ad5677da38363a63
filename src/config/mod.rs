//! # Configuration Module
//!
//! 응답 envelope의 키 이름과 기본 성공 코드를 관리하는 모듈입니다.
//! 설정값은 점 표기법 키로 조회되며, 환경 변수 또는 주입된 설정 제공자로부터 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`response_config`] - 결과 코드 키, 메시지 키, 성공 코드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use api_response::config::ResponseConfig;
//!
//! // 프로세스 전역 설정 (최초 1회 로드 후 캐시)
//! let config = ResponseConfig::global();
//! println!("code key: {}", config.code_key);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! | 설정 키 | 환경 변수 | 기본값 |
//! |---------|-----------|--------|
//! | `api.response.key.code` | `API_RESPONSE_KEY_CODE` | `code` |
//! | `api.response.key.message` | `API_RESPONSE_KEY_MESSAGE` | `msg` |
//! | `api.response.code.success` | `API_RESPONSE_CODE_SUCCESS` | `1` |
//!
//! ```bash
//! export API_RESPONSE_KEY_MESSAGE="message"
//! export API_RESPONSE_CODE_SUCCESS="0"
//! ```

pub mod response_config;

pub use response_config::*;
