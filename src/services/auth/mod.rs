//! 인증 서비스 모듈
//!
//! 이메일을 신원으로 하는 HS256 JWT 발급/검증을 제공합니다.
//! 서버 측 세션이나 폐기 목록은 없으므로 토큰은 만료 시각까지 유효합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let tokens = TokenService::new(&jwt_config);
//! let token = tokens.issue("seller@lapstore.com")?;
//! let claims = tokens.verify(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
