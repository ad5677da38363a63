//! # Exceptions Module
//!
//! 완성된 응답을 담아 `?` 연산자로 전파할 수 있는 에러 타입입니다.

pub mod api_response_exception;

pub use api_response_exception::*;
