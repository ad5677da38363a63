//! # API Response
//!
//! 모든 API 엔드포인트가 반환하는 표준 JSON envelope 응답입니다.
//! 임의의 페이로드를 `{code, msg, ...data}` 형태의 매핑으로 정규화하고,
//! 결과 코드(비즈니스 레벨)와 HTTP 상태 코드(전송 레벨)를 분리하여 관리합니다.
//!
//! ## 정규화 규칙
//!
//! 데이터를 설정하는 모든 연산은 다음 순서로 정규화됩니다.
//!
//! 1. [`Payload`]를 매핑으로 변환 (모델 래핑, 메시지/스칼라 래핑 등)
//! 2. 결과 코드 키가 없으면 현재 결과 코드를 삽입
//! 3. clean 키가 설정되어 있으면 해당 경로의 빈 값을 제거
//!
//! `set_code`, `set_message`, `merge`는 모두 얕은 병합(같은 키는 덮어쓰기) 후
//! 2~3단계를 다시 수행합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{get, web, Responder};
//! use serde_json::json;
//! use api_response::http::ApiResponse;
//!
//! #[get("/posts")]
//! async fn list_posts() -> impl Responder {
//!     let mut response = ApiResponse::new(json!({
//!         "posts": posts,
//!         "links": {"next": null, "prev": null},
//!     }));
//!     response.clean(["links"]).set_message("ok");
//!     response
//! }
//! // → 200 {"posts": [...], "links": {}, "code": 1, "msg": "ok"}
//! ```

use std::fmt;
use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::error::HttpError;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderMap, TryIntoHeaderPair};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::ResponseConfig;
use crate::core::errors::{ApiError, ApiResult};
use crate::domain::Payload;
use crate::utils::array_utils::{clean_map, get_path};

/// 표준 envelope 응답
#[derive(Debug, Clone)]
pub struct ApiResponse {
    config: Arc<ResponseConfig>,
    code: i64,
    data: Map<String, Value>,
    clean_keys: Option<Vec<String>>,
    status: StatusCode,
    headers: HeaderMap,
    pretty: bool,
}

impl ApiResponse {
    /// 전역 설정과 기본 성공 코드로 응답을 생성합니다.
    pub fn new(payload: impl Into<Payload>) -> Self {
        Self::with_config(ResponseConfig::global(), payload, None)
    }

    /// 전역 설정과 지정한 결과 코드로 응답을 생성합니다.
    pub fn with_code(payload: impl Into<Payload>, code: i64) -> Self {
        Self::with_config(ResponseConfig::global(), payload, Some(code))
    }

    /// 명시적으로 주입한 설정으로 응답을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `config` - 키 이름과 성공 코드 설정
    /// * `payload` - 응답 데이터
    /// * `code` - 결과 코드. `None`이면 `config.success_code`
    pub fn with_config(
        config: Arc<ResponseConfig>,
        payload: impl Into<Payload>,
        code: Option<i64>,
    ) -> Self {
        let code = code.unwrap_or(config.success_code);
        let mut response = Self {
            config,
            code,
            data: Map::new(),
            clean_keys: None,
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            pretty: false,
        };
        response.set_data(payload);
        response
    }

    /// 직렬화 가능한 객체로 응답을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ApiError::ConversionError` - 객체를 JSON 매핑으로 변환할 수 없는 경우
    pub fn try_from_serialize<T: Serialize + ?Sized>(value: &T) -> ApiResult<Self> {
        Ok(Self::new(Payload::from_serialize(value)?))
    }

    /// 응답에 사용 중인 설정
    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// 결과 코드
    pub fn code(&self) -> i64 {
        self.code
    }

    /// 결과 코드를 설정하고 본문의 코드 키를 갱신합니다.
    pub fn set_code(&mut self, code: i64) -> &mut Self {
        self.code = code;
        let key = self.config.code_key.clone();
        self.merge(entry(key, Value::from(code)))
    }

    /// 정규화된 본문 매핑
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// 본문 매핑을 소유권과 함께 반환합니다.
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }

    /// 본문을 새 페이로드로 교체하고 정규화합니다.
    pub fn set_data(&mut self, payload: impl Into<Payload>) -> &mut Self {
        let data = payload.into().into_map(&self.config.message_key);
        self.data = self.normalize(data);
        self
    }

    /// 현재 본문에 매핑을 얕게 병합합니다.
    ///
    /// 같은 최상위 키는 새 값으로 덮어쓰며 기존 키의 순서는 유지됩니다.
    pub fn merge(&mut self, data: Map<String, Value>) -> &mut Self {
        self.merge_all([data])
    }

    /// 여러 매핑을 순서대로 병합합니다. 키가 겹치면 나중 매핑이 우선합니다.
    pub fn merge_all<I>(&mut self, maps: I) -> &mut Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let mut data = std::mem::take(&mut self.data);
        for map in maps {
            for (key, value) in map {
                data.insert(key, value);
            }
        }
        self.data = self.normalize(data);
        self
    }

    /// 메시지 키 경로의 값을 반환합니다.
    pub fn message(&self) -> Option<&Value> {
        get_path(&self.data, &self.config.message_key)
    }

    /// 메시지를 설정합니다.
    pub fn set_message(&mut self, message: impl fmt::Display) -> &mut Self {
        let key = self.config.message_key.clone();
        self.merge(entry(key, Value::String(message.to_string())))
    }

    /// clean 대상 키 경로
    ///
    /// `None`이면 정리하지 않고, 빈 목록이면 모든 루트 키를 정리합니다.
    pub fn clean_keys(&self) -> Option<&[String]> {
        self.clean_keys.as_deref()
    }

    /// 빈 값을 정리할 키 경로를 설정하고 즉시 본문을 정리합니다.
    ///
    /// 키는 점 표기법(`meta.links`)을 사용할 수 있습니다.
    /// 빈 목록을 전달하면 모든 루트 키를 대상으로 합니다.
    pub fn clean<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clean_keys = Some(keys.into_iter().map(Into::into).collect());
        let data = std::mem::take(&mut self.data);
        self.data = self.normalize(data);
        self
    }

    /// 모든 루트 키의 빈 값을 정리합니다.
    pub fn clean_all(&mut self) -> &mut Self {
        self.clean(std::iter::empty::<String>())
    }

    /// clean 설정을 해제합니다. 이미 정리된 본문은 그대로 둡니다.
    pub fn disable_clean(&mut self) -> &mut Self {
        self.clean_keys = None;
        self
    }

    /// HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP 상태 코드를 설정합니다. 결과 코드와는 독립적입니다.
    pub fn set_status_code(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// 응답 헤더
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// 응답 헤더 (가변)
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// 헤더를 추가합니다. 같은 이름의 기존 값은 교체됩니다.
    ///
    /// # Errors
    ///
    /// * `ApiError::InvalidHeader` - 헤더 이름이나 값이 유효하지 않은 경우
    pub fn insert_header(&mut self, header: impl TryIntoHeaderPair) -> ApiResult<&mut Self> {
        let (name, value) = header.try_into_pair().map_err(|e| {
            let error: HttpError = e.into();
            ApiError::InvalidHeader(error.to_string())
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// 여러 헤더를 한 번에 추가합니다.
    pub fn with_headers<I, H>(mut self, headers: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = H>,
        H: TryIntoHeaderPair,
    {
        for header in headers {
            self.insert_header(header)?;
        }
        Ok(self)
    }

    /// 본문을 들여쓰기된 JSON으로 인코딩할지 설정합니다.
    pub fn pretty(&mut self, pretty: bool) -> &mut Self {
        self.pretty = pretty;
        self
    }

    /// 본문을 JSON 문자열로 인코딩합니다.
    pub fn to_json(&self) -> ApiResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&self.data)
        } else {
            serde_json::to_string(&self.data)
        };
        encoded.map_err(|e| ApiError::SerializationError(e.to_string()))
    }

    /// actix-web `HttpResponse`로 변환합니다.
    pub fn to_http_response(&self) -> HttpResponse {
        let body = match self.to_json() {
            Ok(body) => body,
            Err(e) => {
                log::error!("응답 본문 인코딩 실패: {}", e);
                return actix_web::ResponseError::error_response(&e);
            }
        };

        let mut builder = HttpResponse::build(self.status);
        if !self.headers.contains_key(CONTENT_TYPE) {
            builder.content_type("application/json");
        }
        for (name, value) in self.headers.iter() {
            builder.append_header((name.clone(), value.clone()));
        }
        builder.body(body)
    }

    fn normalize(&self, mut data: Map<String, Value>) -> Map<String, Value> {
        if !data.contains_key(&self.config.code_key) {
            data.insert(self.config.code_key.clone(), Value::from(self.code));
        }

        if let Some(keys) = &self.clean_keys {
            clean_map(&mut data, keys);
        }

        data
    }
}

fn entry(key: String, value: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key, value);
    map
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl Responder for ApiResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.to_http_response()
    }
}

impl From<ApiResponse> for HttpResponse {
    fn from(response: ApiResponse) -> Self {
        response.to_http_response()
    }
}
