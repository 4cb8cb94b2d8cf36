//! # Product HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/products/all` | - |
//! | `GET` | `/products/{category}` | - |
//! | `GET` | `/products?email=` | - |
//! | `GET` | `/payment/products/{id}` | - |
//! | `POST` | `/products/add` | 필요 |
//! | `DELETE` | `/products/{id}` | 필요 (판매자 또는 관리자) |
//! | `PUT` | `/advertise/{email}/{id}` | - |

use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::db::json::{document_to_json, documents_to_json};
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::EmailQuery;
use crate::domain::Role;
use crate::errors::AppError;
use crate::handlers::body_to_document;
use crate::repositories::parse_object_id;
use crate::state::AppState;

/// 판매 중인 전체 상품
pub async fn list_unsold(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = state.products.find_unsold().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(products)))
}

/// 카테고리별 판매 중인 상품 (판매 완료 제외)
pub async fn list_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let products = state.products.find_unsold_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(products)))
}

/// 판매자 이메일로 상품 조회
pub async fn list_by_seller(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let products = state.products.find_by_seller(&query.email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(products)))
}

/// 결제 화면용 단일 상품 조회
pub async fn get_for_payment(
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

/// 상품 등록
pub async fn add_product(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let product = body_to_document(body.into_inner())?;
    let result = state.products.insert(product).await?;

    log::info!("📦 상품 등록: by={}", user.email);
    Ok(HttpResponse::Ok().json(result))
}

/// 상품 삭제
///
/// 요청자가 상품의 판매자이거나 관리자여야 합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 잘못된 ID 형식
/// * `AppError::NotFound` - 상품 없음
/// * `AppError::AuthorizationError` - 판매자/관리자가 아님
pub async fn delete_product(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&id)?;
    let product = state
        .products
        .find_view(object_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("상품을 찾을 수 없습니다: {}", id)))?;

    if !product.is_owned_by(&user.email)
        && state.users.role_of(&user.email).await? != Some(Role::Admin)
    {
        log::warn!("상품 삭제 권한 없음: product={}, requester={}", id, user.email);
        return Err(AppError::AuthorizationError(
            "본인 상품만 삭제할 수 있습니다".to_string(),
        ));
    }

    let result = state.products.delete(object_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 광고 표시 (판매자 이메일 + ID 일치, 없으면 upsert)
pub async fn advertise(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (email, id) = path.into_inner();
    let result = state.products.advertise(&email, &id).await?;
    Ok(HttpResponse::Ok().json(result))
}
