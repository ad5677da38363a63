//! # Response Payload
//!
//! 응답으로 감쌀 입력값을 표현하는 태그드 유니언입니다.
//! 런타임 타입 검사 대신 입력 종류별 variant로 정규화 규칙을 결정합니다.
//!
//! | 입력 | Variant | 정규화 결과 |
//! |------|---------|-------------|
//! | 없음 (`()`, `None`, `null`) | `Null` | `{}` |
//! | 문자열 | `Message` | `{msg: s}` |
//! | 매핑 / JSON 객체 | `Map` | 그대로 사용 |
//! | JSON 배열 | `Map` | `{"0": .., "1": ..}` |
//! | 모델 | `Model` | `{snake_case(이름): 속성}` |
//! | 그 외 스칼라 | `Scalar` | `{msg: json_encode(v)}` |

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::errors::{ApiError, ApiResult};
use crate::domain::models::{Arrayable, Model};

/// 응답 페이로드
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// 값 없음
    #[default]
    Null,
    /// 메시지 문자열
    Message(String),
    /// 문자열 키 매핑
    Map(Map<String, Value>),
    /// 모델 인스턴스의 이름과 속성
    Model {
        name: String,
        attributes: Map<String, Value>,
    },
    /// 숫자, 불리언 등 기타 스칼라
    Scalar(Value),
}

impl Payload {
    /// 모델 인스턴스로부터 페이로드를 생성합니다.
    pub fn model<M: Model + ?Sized>(model: &M) -> Self {
        Payload::Model {
            name: model.class_basename(),
            attributes: model.to_array(),
        }
    }

    /// 매핑 변환이 가능한 객체로부터 페이로드를 생성합니다.
    pub fn arrayable<A: Arrayable + ?Sized>(value: &A) -> Self {
        Payload::Map(value.to_array())
    }

    /// 직렬화 가능한 임의의 객체를 페이로드로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `ApiError::ConversionError` - 객체를 JSON 값으로 직렬화할 수 없는 경우
    ///   (예: 문자열이 아닌 키를 가진 맵)
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ApiResult<Self> {
        serde_json::to_value(value)
            .map(Payload::from)
            .map_err(|e| ApiError::ConversionError(e.to_string()))
    }

    /// 직렬화 가능한 객체를 변환하되, 실패 시 빈 매핑으로 대체합니다.
    pub fn from_serialize_lossy<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::from_serialize(value).unwrap_or_else(|e| {
            log::warn!("페이로드 변환 실패, 빈 매핑으로 대체: {}", e);
            Payload::Map(Map::new())
        })
    }

    /// 메시지 키와 함께 페이로드를 매핑으로 정규화합니다.
    ///
    /// 결과 코드 키 삽입과 clean 필터는 호출자(`ApiResponse`)가 담당합니다.
    pub fn into_map(self, message_key: &str) -> Map<String, Value> {
        match self {
            Payload::Null => Map::new(),
            Payload::Message(message) => single(message_key, Value::String(message)),
            Payload::Map(map) => map,
            Payload::Model { name, attributes } => {
                let key = crate::utils::string_utils::snake_case(&name);
                log::debug!("모델 {} 을(를) '{}' 키로 감쌉니다", name, key);
                single(&key, Value::Object(attributes))
            }
            Payload::Scalar(value) => single(message_key, Value::String(value.to_string())),
        }
    }
}

fn single(key: &str, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    map
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Payload::Null,
            Value::String(message) => Payload::Message(message),
            Value::Object(map) => Payload::Map(map),
            Value::Array(items) => Payload::Map(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item))
                    .collect(),
            ),
            scalar @ (Value::Bool(_) | Value::Number(_)) => Payload::Scalar(scalar),
        }
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Null
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Payload::Null, Into::into)
    }
}

impl From<&str> for Payload {
    fn from(message: &str) -> Self {
        Payload::Message(message.to_string())
    }
}

impl From<String> for Payload {
    fn from(message: String) -> Self {
        Payload::Message(message)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload::Map(map)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(items: Vec<Value>) -> Self {
        Payload::from(Value::Array(items))
    }
}

macro_rules! impl_scalar_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                fn from(value: $ty) -> Self {
                    Payload::from(Value::from(value))
                }
            }
        )*
    };
}

impl_scalar_payload!(bool, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// JSON 숫자로 표현할 수 없는 `NaN`, `inf`는 텍스트 그대로 메시지가 됩니다.
impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => Payload::Scalar(Value::Number(number)),
            None => Payload::Message(value.to_string()),
        }
    }
}

impl From<f32> for Payload {
    fn from(value: f32) -> Self {
        Payload::from(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use std::collections::HashMap;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(Payload::from(json!(null)), Payload::Null);
        assert_eq!(Payload::from(json!("hi")), Payload::Message("hi".to_string()));
        assert_eq!(
            Payload::from(json!({"a": 1})),
            Payload::Map(object(json!({"a": 1})))
        );
        assert_eq!(Payload::from(json!(true)), Payload::Scalar(json!(true)));
        assert_eq!(Payload::from(3.5), Payload::Scalar(json!(3.5)));
    }

    #[test]
    fn test_array_becomes_indexed_map() {
        let payload = Payload::from(vec![json!("a"), json!("b")]);
        assert_eq!(payload, Payload::Map(object(json!({"0": "a", "1": "b"}))));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Payload::from(None::<String>), Payload::Null);
        assert_eq!(Payload::from(Some("x")), Payload::Message("x".to_string()));
    }

    #[test]
    fn test_scalar_into_map_is_json_encoded() {
        let map = Payload::from(42).into_map("msg");
        assert_eq!(Value::Object(map), json!({"msg": "42"}));

        let map = Payload::from(false).into_map("msg");
        assert_eq!(Value::Object(map), json!({"msg": "false"}));
    }

    #[test]
    fn test_non_finite_floats_become_messages() {
        assert_eq!(Payload::from(f64::NAN), Payload::Message("NaN".to_string()));
        assert_eq!(Payload::from(f64::INFINITY), Payload::Message("inf".to_string()));
        assert_eq!(
            Payload::from(f32::NEG_INFINITY),
            Payload::Message("-inf".to_string())
        );

        let map = Payload::from(f64::NAN).into_map("msg");
        assert_eq!(Value::Object(map), json!({"msg": "NaN"}));
    }

    #[test]
    fn test_model_into_map_uses_snake_case_name() {
        let payload = Payload::Model {
            name: "UserProfile".to_string(),
            attributes: object(json!({"name": "Bob"})),
        };
        assert_eq!(
            Value::Object(payload.into_map("msg")),
            json!({"user_profile": {"name": "Bob"}})
        );
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(Serialize)]
        struct Page {
            total: u32,
            items: Vec<&'static str>,
        }

        let page = Page {
            total: 2,
            items: vec!["a", "b"],
        };
        let payload = Payload::from_serialize(&page).unwrap();
        assert_eq!(
            payload,
            Payload::Map(object(json!({"total": 2, "items": ["a", "b"]})))
        );
    }

    #[test]
    fn test_from_serialize_failure_is_reported() {
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);

        let result = Payload::from_serialize(&bad);
        assert!(matches!(result, Err(ApiError::ConversionError(_))));

        assert_eq!(Payload::from_serialize_lossy(&bad), Payload::Map(Map::new()));
    }
}
