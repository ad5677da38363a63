//! 응답 포맷 설정 관리 모듈
//!
//! 응답 본문에 사용할 결과 코드 키, 메시지 키, 기본 성공 코드를 관리합니다.
//! 설정값은 점(`.`) 표기법 키로 조회되며, 환경 변수 또는 임의의
//! 설정 제공자(provider) 클로저로부터 주입될 수 있습니다.

use std::env;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// 결과 코드 키 설정 경로
pub const CODE_KEY_PATH: &str = "api.response.key.code";

/// 메시지 키 설정 경로
pub const MESSAGE_KEY_PATH: &str = "api.response.key.message";

/// 성공 코드 설정 경로
pub const SUCCESS_CODE_PATH: &str = "api.response.code.success";

const DEFAULT_CODE_KEY: &str = "code";
const DEFAULT_MESSAGE_KEY: &str = "msg";
const DEFAULT_SUCCESS_CODE: i64 = 1;

/// 프로세스 전역 설정 캐시
///
/// 첫 접근 시 `.env` 파일과 환경 변수를 읽어 한 번만 초기화되며,
/// 이후에는 읽기 전용으로 공유됩니다.
static GLOBAL_CONFIG: Lazy<Arc<ResponseConfig>> = Lazy::new(|| {
    dotenv::dotenv().ok();
    let config = ResponseConfig::from_env();
    log::debug!(
        "응답 설정 로드 완료: code_key={}, message_key={}, success_code={}",
        config.code_key,
        config.message_key,
        config.success_code
    );
    Arc::new(config)
});

/// 응답 envelope 설정
///
/// # Examples
///
/// ```rust,ignore
/// use api_response::config::ResponseConfig;
///
/// let config = ResponseConfig::from_provider(|key| match key {
///     "api.response.key.message" => Some("message".to_string()),
///     _ => None,
/// });
///
/// assert_eq!(config.code_key, "code");
/// assert_eq!(config.message_key, "message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// 결과 코드가 기록될 JSON 필드명
    pub code_key: String,
    /// 메시지가 기록될 JSON 필드명
    pub message_key: String,
    /// 코드가 지정되지 않았을 때 사용할 기본 결과 코드
    pub success_code: i64,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            code_key: DEFAULT_CODE_KEY.to_string(),
            message_key: DEFAULT_MESSAGE_KEY.to_string(),
            success_code: DEFAULT_SUCCESS_CODE,
        }
    }
}

impl ResponseConfig {
    /// 설정 제공자로부터 설정을 생성합니다.
    ///
    /// 제공자는 점 표기법 키(`api.response.key.code` 등)를 받아 값을 반환합니다.
    /// 값이 없거나 비어 있으면 기본값을 사용합니다.
    ///
    /// # Arguments
    ///
    /// * `provider` - 설정 키를 값으로 변환하는 조회 함수
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| provider(key).filter(|value| !value.trim().is_empty());

        let success_code = match lookup(SUCCESS_CODE_PATH) {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                log::warn!(
                    "{} 값이 정수가 아닙니다: {:?}, 기본값 {} 사용",
                    SUCCESS_CODE_PATH,
                    raw,
                    DEFAULT_SUCCESS_CODE
                );
                DEFAULT_SUCCESS_CODE
            }),
            None => DEFAULT_SUCCESS_CODE,
        };

        Self {
            code_key: lookup(CODE_KEY_PATH).unwrap_or_else(|| DEFAULT_CODE_KEY.to_string()),
            message_key: lookup(MESSAGE_KEY_PATH)
                .unwrap_or_else(|| DEFAULT_MESSAGE_KEY.to_string()),
            success_code,
        }
    }

    /// 환경 변수로부터 설정을 생성합니다.
    ///
    /// # Environment Variables
    ///
    /// - `API_RESPONSE_KEY_CODE`: 결과 코드 키 (기본값: `code`)
    /// - `API_RESPONSE_KEY_MESSAGE`: 메시지 키 (기본값: `msg`)
    /// - `API_RESPONSE_CODE_SUCCESS`: 성공 코드 (기본값: `1`)
    pub fn from_env() -> Self {
        Self::from_provider(|key| env::var(env_var_name(key)).ok())
    }

    /// 프로세스 전역 설정을 반환합니다.
    ///
    /// 최초 호출 시 한 번만 로드되고 이후에는 캐시된 인스턴스를 공유합니다.
    pub fn global() -> Arc<ResponseConfig> {
        Arc::clone(&GLOBAL_CONFIG)
    }
}

/// 점 표기법 설정 키를 환경 변수 이름으로 변환합니다.
///
/// `api.response.key.code` → `API_RESPONSE_KEY_CODE`
pub fn env_var_name(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ResponseConfig::default();
        assert_eq!(config.code_key, "code");
        assert_eq!(config.message_key, "msg");
        assert_eq!(config.success_code, 1);
    }

    #[test]
    fn test_from_provider_overrides() {
        let config = ResponseConfig::from_provider(provider_from(&[
            (CODE_KEY_PATH, "status"),
            (MESSAGE_KEY_PATH, "message"),
            (SUCCESS_CODE_PATH, "200"),
        ]));

        assert_eq!(config.code_key, "status");
        assert_eq!(config.message_key, "message");
        assert_eq!(config.success_code, 200);
    }

    #[test]
    fn test_from_provider_falls_back_on_missing_and_blank_values() {
        let config = ResponseConfig::from_provider(provider_from(&[(CODE_KEY_PATH, "  ")]));
        assert_eq!(config, ResponseConfig::default());
    }

    #[test]
    fn test_invalid_success_code_uses_default() {
        let config =
            ResponseConfig::from_provider(provider_from(&[(SUCCESS_CODE_PATH, "not-a-number")]));
        assert_eq!(config.success_code, 1);
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name(CODE_KEY_PATH), "API_RESPONSE_KEY_CODE");
        assert_eq!(env_var_name(MESSAGE_KEY_PATH), "API_RESPONSE_KEY_MESSAGE");
        assert_eq!(env_var_name(SUCCESS_CODE_PATH), "API_RESPONSE_CODE_SUCCESS");
    }

    #[test]
    fn test_global_config_is_cached() {
        let first = ResponseConfig::global();
        let second = ResponseConfig::global();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
