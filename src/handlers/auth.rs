//! 토큰 발급 핸들러

use actix_web::{web, HttpResponse};
use crate::domain::dto::{EmailQuery, TokenResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// 등록된 사용자에게 액세스 토큰 발급
///
/// `GET /jwt?email=`
///
/// 등록되지 않은 이메일이면 빈 토큰과 함께 403 을 반환합니다.
pub async fn issue_jwt(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    match state.users.issue_token(&query.email).await? {
        Some(access_token) => Ok(HttpResponse::Ok().json(TokenResponse { access_token })),
        None => {
            log::warn!("등록되지 않은 이메일에 대한 토큰 요청 거부: {}", query.email);
            Ok(HttpResponse::Forbidden().json(TokenResponse {
                access_token: String::new(),
            }))
        }
    }
}
