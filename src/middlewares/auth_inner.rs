//! AuthGate 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::auth::AuthenticatedUser;
use crate::services::auth::{TokenError, TokenService};

/// 게이트 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GateDecision {
    /// 토큰 검증 성공
    Admit(AuthenticatedUser),
    /// Authorization 헤더 없음 (401)
    Unauthorized,
    /// 헤더 형식 오류 또는 토큰 검증 실패 (403)
    Forbidden(TokenError),
}

/// Authorization 헤더 값으로 요청 허용 여부를 판정합니다.
pub(crate) fn decide(auth_header: Option<&str>, token_service: &TokenService) -> GateDecision {
    let Some(auth_header) = auth_header else {
        return GateDecision::Unauthorized;
    };

    let verified = token_service
        .extract_bearer_token(auth_header)
        .and_then(|token| token_service.verify(token));

    match verified {
        Ok(claims) => GateDecision::Admit(AuthenticatedUser { email: claims.email }),
        Err(err) => GateDecision::Forbidden(err),
    }
}

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGateService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(token_service) = req.app_data::<web::Data<TokenService>>().cloned() else {
                log::error!("TokenService 가 등록되지 않아 보호된 요청을 거부합니다: {}", req.path());
                let response = HttpResponse::InternalServerError()
                    .json(serde_json::json!({
                        "error": "internal_error",
                        "message": "요청을 처리하지 못했습니다"
                    }));
                return Ok(req.into_response(response).map_into_right_body());
            };

            // 헤더 값이 ASCII 가 아니면 형식 오류로 취급
            let auth_header = req
                .headers()
                .get("Authorization")
                .map(|h| h.to_str().unwrap_or_default().to_string());

            match decide(auth_header.as_deref(), &token_service) {
                GateDecision::Unauthorized => {
                    log::warn!("인증 헤더 없음: {} {}", req.method(), req.path());
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "unauthorized",
                            "message": "unauthorized access"
                        }));
                    Ok(req.into_response(response).map_into_right_body())
                },
                GateDecision::Forbidden(err) => {
                    log::warn!("토큰 거부 ({}): {} {}", err, req.method(), req.path());
                    let response = HttpResponse::Forbidden()
                        .json(serde_json::json!({
                            "error": "forbidden",
                            "message": "forbidden access"
                        }));
                    Ok(req.into_response(response).map_into_right_body())
                },
                GateDecision::Admit(user) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                },
            }
        })
    }
}
