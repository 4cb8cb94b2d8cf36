use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 인증 게이트가 JWT 에서 추출해 요청 확장(extensions)에 넣어 두는 신원
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰에 담긴 사용자 이메일
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 게이트 뒤에 있는 핸들러에서만 사용합니다. 게이트 없이 호출되면 401 입니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_identity_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser { email: "a@x.com".to_string() });

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(_)));
    }
}
