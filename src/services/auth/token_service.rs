//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 이메일을 담은 장기 액세스 토큰을 발급하고 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use crate::config::JwtConfig;
use crate::domain::token::TokenClaims;
use crate::errors::AppError;

/// 토큰 검증 실패 종류
///
/// 두 경우 모두 요청 거부(403)로 이어지지만 로그에서는 구분합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    /// 서명 불일치 또는 형식 오류
    #[error("유효하지 않은 토큰입니다")]
    Invalid,
    /// 만료 시각 경과
    #[error("토큰이 만료되었습니다")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        AppError::AuthorizationError(e.to_string())
    }
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 서명 키와 유효 기간은 생성 시점에 고정됩니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            lifetime: Duration::days(config.expiration_days),
        }
    }

    /// 사용자 이메일로 JWT 액세스 토큰 생성
    ///
    /// 사용자 존재 여부는 확인하지 않습니다. 호출 측(`UserService::issue_token`)이
    /// 등록된 사용자인지 먼저 확인해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - 만료된 토큰
    /// * `TokenError::Invalid` - 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Invalid` - 잘못된 헤더 형식 또는 빈 토큰
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, TokenError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(TokenError::Invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            expiration_days: 730,
        })
    }

    #[test]
    fn test_verify_returns_issued_identity() {
        let tokens = service();
        let token = tokens.issue("seller@x.com").unwrap();

        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.email, "seller@x.com");
        // 약 2년
        assert!(claims.exp - claims.iat >= 729 * 24 * 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_invalid() {
        let other = TokenService::new(&JwtConfig {
            secret: "other-secret".to_string(),
            expiration_days: 730,
        });
        let token = other.issue("seller@x.com").unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
        assert_eq!(service().verify("not.a.jwt"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            email: "seller@x.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = service().verify(&token).unwrap_err();

        assert_eq!(err, TokenError::Expired);
        assert!(matches!(AppError::from(err), AppError::AuthorizationError(_)));
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();

        assert_eq!(tokens.extract_bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
        assert_eq!(tokens.extract_bearer_token("Bearer "), Err(TokenError::Invalid));
        assert_eq!(tokens.extract_bearer_token("Basic dXNlcjpwYXNz"), Err(TokenError::Invalid));
    }
}
