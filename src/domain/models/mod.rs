//! # Domain Models
//!
//! 응답 페이로드로 사용될 수 있는 타입들이 구현하는 capability trait입니다.
//!
//! - [`Arrayable`] - 자기 자신을 JSON 매핑으로 변환할 수 있는 타입
//! - [`Model`] - 모델 인스턴스. 응답에서 타입 이름의 snake_case 키 아래에 담깁니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use serde_json::{json, Map, Value};
//! use api_response::domain::models::{Arrayable, Model};
//!
//! struct UserProfile {
//!     name: String,
//! }
//!
//! impl Arrayable for UserProfile {
//!     fn to_array(&self) -> Map<String, Value> {
//!         let mut map = Map::new();
//!         map.insert("name".to_string(), json!(self.name));
//!         map
//!     }
//! }
//!
//! impl Model for UserProfile {}
//!
//! // ApiResponse::new(Payload::model(&profile))
//! // → {"user_profile": {"name": "..."}, "code": 1}
//! ```

use serde_json::{Map, Value};

use crate::utils::string_utils::class_basename;

/// JSON 매핑으로 변환 가능한 타입
pub trait Arrayable {
    /// 인스턴스를 문자열 키 → JSON 값 매핑으로 변환합니다.
    fn to_array(&self) -> Map<String, Value>;
}

/// 모델 인스턴스
///
/// 응답으로 변환될 때 속성 매핑이 모델 이름의 snake_case 키 아래로 한 단계 감싸집니다.
pub trait Model: Arrayable {
    /// 모델의 타입 이름 (모듈 경로 제외)
    ///
    /// 기본 구현은 Rust 타입 이름의 마지막 세그먼트를 사용합니다.
    fn class_basename(&self) -> String {
        class_basename(std::any::type_name::<Self>()).to_string()
    }
}
