//! # Domain Module
//!
//! 응답으로 변환될 입력값의 표현을 정의합니다.
//!
//! - [`payload`] - 입력 종류별 태그드 유니언 [`Payload`]
//! - [`models`] - 페이로드 타입이 구현하는 capability trait

pub mod models;
pub mod payload;

pub use models::*;
pub use payload::*;
