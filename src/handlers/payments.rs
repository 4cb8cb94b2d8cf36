//! 결제 핸들러

use actix_web::{web, HttpResponse};
use serde_json::Value;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::{ClientSecretResponse, PaymentIntentRequest};
use crate::errors::AppError;
use crate::handlers::body_to_document;
use crate::state::AppState;

/// 결제 인텐트 생성
///
/// `POST /create-payment-intent` `{ "price": 540.5 }` → `{ "clientSecret": "..." }`
pub async fn create_payment_intent(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, AppError> {
    let client_secret = state.payments.create_intent(body.price).await?;

    log::info!("결제 인텐트 생성: user={}, price={}", user.email, body.price);
    Ok(HttpResponse::Ok().json(ClientSecretResponse { client_secret }))
}

/// 결제 기록 저장 및 상품 판매 완료 처리
pub async fn complete_payment(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let payment = body_to_document(body.into_inner())?;
    let completion = state.payments.complete(payment).await?;
    Ok(HttpResponse::Ok().json(completion))
}
