//! # User Management HTTP Handlers
//!
//! 가입, 관리자 인증, 삭제, 그리고 역할 확인 엔드포인트입니다.
//!
//! 역할 확인 응답은 `{ "isAdmin": bool }` 처럼 단일 필드 객체이며,
//! 등록되지 않은 이메일은 404 입니다.

use actix_web::{web, HttpResponse};
use serde_json::{json, Value};
use crate::db::json::{document_to_json, documents_to_json};
use crate::db::InsertOutcome;
use crate::domain::dto::{AlreadyExists, RoleQuery};
use crate::errors::AppError;
use crate::handlers::body_to_document;
use crate::state::AppState;

/// 사용자 목록 (`?role=` 선택)
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse, AppError> {
    let users = state.users.list(query.role.as_deref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(users)))
}

/// 사용자 가입 (이메일 기준 멱등)
///
/// 이미 가입된 이메일이면 200 과 함께 `alreadyExists: true` 를 반환합니다.
pub async fn register_user(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let user = body_to_document(body.into_inner())?;

    match state.users.register(user).await? {
        InsertOutcome::Inserted(result) => Ok(HttpResponse::Ok().json(result)),
        InsertOutcome::AlreadyExists => {
            Ok(HttpResponse::Ok().json(AlreadyExists::new("user already exists")))
        }
    }
}

/// 관리자 인증 표시
pub async fn verify_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.users.verify(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn delete_user(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.users.delete(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 판매자 정보 조회
pub async fn get_seller(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let seller = state.users.find_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(document_to_json(seller)))
}

pub async fn check_admin(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let is_admin = state.users.is_admin(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "isAdmin": is_admin })))
}

pub async fn check_seller(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let is_seller = state.users.is_seller(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "isSeller": is_seller })))
}

pub async fn check_buyer(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let is_buyer = state.users.is_buyer(&email).await?;
    Ok(HttpResponse::Ok().json(json!({ "isBuyer": is_buyer })))
}
