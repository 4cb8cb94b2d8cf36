//! JWT 클레임 구조체
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 신원은 이메일 하나뿐이며 역할 정보는 담지 않습니다.
/// 역할은 요청 시점에 사용자 컬렉션에서 조회합니다.
///
/// - `email`: 토큰의 주체 (사용자 이메일)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 이메일
    pub email: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
