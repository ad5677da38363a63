//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 타입 이름 추출, snake_case 변환
//! - [`array_utils`] - 점 표기법 경로 조회, 빈 값 정리 필터

pub mod string_utils;
pub mod array_utils;
