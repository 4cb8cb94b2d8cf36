//! JWT 인증 게이트 미들웨어
//!
//! 보호된 라우트에서 핸들러보다 먼저 실행되어 Bearer 토큰을 검증합니다.
//!
//! | 요청 상태 | 결과 |
//! |-----------|------|
//! | `Authorization` 헤더 없음 | 401, 핸들러 미실행 |
//! | `Bearer <token>` 형식이 아님 / 서명 불일치 / 만료 | 403, 핸들러 미실행 |
//! | 검증 성공 | [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser) 를 확장에 넣고 통과 |
//!
//! 서명 검증에 쓰는 [`TokenService`](crate::services::auth::TokenService) 는
//! `web::Data<TokenService>` 로 앱에 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthGateService;

/// JWT 인증 게이트
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthGate;

impl AuthGate {
    /// 필수 인증 게이트 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
        }))
    }
}
