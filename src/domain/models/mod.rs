//! 인증 관련 도메인 모델

pub mod auth;
pub mod token;
