//! 위시리스트 / 주문 핸들러
//!
//! 두 컬렉션 모두 `(productId, email)` 쌍당 하나의 항목만 허용합니다.
//! 같은 쌍을 다시 추가하면 409 와 `alreadyExists: true` 본문을 반환합니다.

use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::db::json::{document_to_json, documents_to_json};
use crate::db::InsertOutcome;
use crate::domain::dto::{AlreadyExists, EmailQuery};
use crate::domain::MarketEntry;
use crate::errors::AppError;
use crate::handlers::body_to_document;
use crate::repositories::MarketRepository;
use crate::state::AppState;

async fn add_entry(repo: &MarketRepository, body: Value) -> Result<HttpResponse, AppError> {
    let entry: MarketEntry = serde_json::from_value(body.clone()).map_err(|e| {
        AppError::ValidationError(format!("productId 와 email 이 필요합니다: {}", e))
    })?;
    let document = body_to_document(body)?;

    match repo.add(&entry, document).await? {
        InsertOutcome::Inserted(result) => Ok(HttpResponse::Ok().json(result)),
        InsertOutcome::AlreadyExists => {
            log::debug!(
                "{} 중복 추가 무시: product={}, email={}",
                repo.collection(), entry.product_id, entry.email
            );
            Ok(HttpResponse::Conflict().json(AlreadyExists::new(format!(
                "already added to {}", repo.collection()
            ))))
        }
    }
}

/// 사용자 위시리스트
pub async fn list_wishlist(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let entries = state.wishlist.find_by_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(entries)))
}

/// 위시리스트 항목이 가리키는 상품 조회
pub async fn wishlist_product(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("상품을 찾을 수 없습니다: {}", id)))?;

    Ok(HttpResponse::Ok().json(document_to_json(product)))
}

pub async fn add_to_wishlist(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    add_entry(&state.wishlist, body.into_inner()).await
}

/// 사용자 주문 목록
pub async fn list_orders(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let orders = state.orders.find_by_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(orders)))
}

pub async fn add_order(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    add_entry(&state.orders, body.into_inner()).await
}
