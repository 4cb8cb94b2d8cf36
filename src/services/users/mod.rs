//! 사용자 관리 서비스 모듈
//!
//! 가입, 역할 확인, 관리자 인증 처리와 등록된 사용자에 대한 토큰 발급을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let users = UserService::new(UserRepository::new(store.clone()), tokens.clone());
//! let is_admin = users.is_admin("admin@x.com").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
