//! # Core Module
//!
//! 라이브러리 전역에서 사용하는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
