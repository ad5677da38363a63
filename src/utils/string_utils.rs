//! # 문자열 유틸리티
//!
//! 모델 타입 이름을 응답 키로 변환할 때 사용하는 문자열 처리 함수들입니다.

/// 타입 경로에서 마지막 이름만 추출합니다.
///
/// 제네릭 인자는 제거됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::class_basename;
///
/// assert_eq!(class_basename("app::models::UserProfile"), "UserProfile");
/// assert_eq!(class_basename("app::Page<app::Post>"), "Page");
/// ```
pub fn class_basename(type_name: &str) -> &str {
    let without_generics = match type_name.find('<') {
        Some(index) => &type_name[..index],
        None => type_name,
    };

    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// 문자열을 snake_case로 변환합니다.
///
/// 대문자 앞마다 `_`를 삽입한 뒤 소문자로 바꿉니다.
/// 연속된 대문자도 각각 분리되므로 `HTMLParser`는 `h_t_m_l_parser`가 됩니다.
/// 공백으로 구분된 단어는 먼저 대문자로 시작하도록 이어 붙입니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::snake_case;
///
/// assert_eq!(snake_case("UserProfile"), "user_profile");
/// assert_eq!(snake_case("user profile"), "user_profile");
/// assert_eq!(snake_case("user"), "user");
/// ```
pub fn snake_case(value: &str) -> String {
    if value.chars().all(|c| !c.is_uppercase() && !c.is_whitespace()) {
        return value.to_string();
    }

    let words: String = value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    let mut result = String::with_capacity(words.len() + 4);
    for (index, c) in words.chars().enumerate() {
        if index > 0 && c.is_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}
