//! # HTTP Module
//!
//! actix-web 응답으로 렌더링되는 표준 envelope 응답 타입입니다.

pub mod api_response;

pub use api_response::*;
