//! HTTP 요청 핸들러 모듈
//!
//! 라우트마다 하나의 핸들러가 있으며, 각 핸들러는 요청 파라미터로 필터를 만들고
//! 저장소(또는 서비스) 연산을 한 번 호출한 뒤 결과를 그대로 JSON 으로 돌려줍니다.
//! 라우트 등록 순서는 [`crate::routes`] 의 라우트 테이블이 결정합니다.

use mongodb::bson::Document;
use serde_json::Value;
use crate::errors::{AppError, AppResult};

pub mod auth;
pub mod categories;
pub mod market;
pub mod payments;
pub mod products;
pub mod root;
pub mod users;

/// JSON 요청 본문을 저장용 문서로 변환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 본문이 JSON 객체가 아님
pub(crate) fn body_to_document(body: Value) -> AppResult<Document> {
    if !body.is_object() {
        return Err(AppError::ValidationError(
            "요청 본문은 JSON 객체여야 합니다".to_string(),
        ));
    }
    Ok(mongodb::bson::to_document(&body)?)
}
