//! # JSON 매핑 유틸리티
//!
//! 점(`.`) 표기법 키 경로 조회와 빈 값 정리(clean) 필터를 제공합니다.
//! 키 조회는 항상 리터럴 키를 먼저 확인한 뒤 점 표기법 경로를 따라갑니다.

use serde_json::{Map, Value};

/// 점 표기법 경로의 값을 조회합니다.
///
/// 배열은 숫자 세그먼트(`items.0`)로 인덱싱합니다.
///
/// # 예제
/// ```rust,ignore
/// use serde_json::json;
/// use crate::utils::array_utils::get_path;
///
/// let data = json!({"meta": {"links": {"next": null}}});
/// let map = data.as_object().unwrap();
///
/// assert!(get_path(map, "meta.links").is_some());
/// assert!(get_path(map, "meta.missing").is_none());
/// ```
pub fn get_path<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    let mut segments = key.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(fields) => fields.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// 점 표기법 경로의 값을 가변 참조로 조회합니다.
pub fn get_path_mut<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Value> {
    if map.contains_key(key) {
        return map.get_mut(key);
    }

    let mut segments = key.split('.');
    let mut current = map.get_mut(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(fields) => fields.get_mut(segment)?,
            Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// 값이 "참"으로 취급되는지 판단합니다.
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"`, 빈 배열, 빈 객체는 거짓입니다.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// 컨테이너 값에서 거짓 항목을 제거합니다.
///
/// 한 단계만 필터링하며, 컨테이너가 아닌 값은 `false`를 반환하고 그대로 둡니다.
pub fn filter_truthy(value: &mut Value) -> bool {
    match value {
        Value::Object(fields) => {
            fields.retain(|_, item| is_truthy(item));
            true
        }
        Value::Array(items) => {
            items.retain(is_truthy);
            true
        }
        _ => false,
    }
}

/// 주어진 키 경로들의 값을 정리합니다.
///
/// `keys`가 비어 있으면 모든 루트 키를 대상으로 합니다.
/// 해석되지 않는 경로는 무시됩니다.
pub fn clean_map(map: &mut Map<String, Value>, keys: &[String]) {
    let targets: Vec<String> = if keys.is_empty() {
        map.keys().cloned().collect()
    } else {
        keys.to_vec()
    };

    for key in &targets {
        match get_path_mut(map, key) {
            Some(value) => {
                if filter_truthy(value) {
                    log::debug!("clean 필터 적용: {}", key);
                }
            }
            None => log::debug!("clean 대상 경로 없음: {}", key),
        }
    }
}
