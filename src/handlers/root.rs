//! 루트 핸들러 (서버 동작 확인)

use actix_web::HttpResponse;
use serde_json::json;

/// 서버 동작 확인
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "LapStore Server Root page.",
    }))
}
