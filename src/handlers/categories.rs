//! 카테고리 핸들러

use actix_web::{web, HttpResponse};
use crate::db::json::documents_to_json;
use crate::errors::AppError;
use crate::state::AppState;

/// 전체 카테고리 목록
///
/// `GET /categories`
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.categories.find_all().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(categories)))
}
