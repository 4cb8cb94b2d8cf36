//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 게이트 (AuthGate)
//! - Bearer 토큰 추출 및 검증
//! - 헤더 없음 401, 거부된 토큰 403
//! - 검증된 신원을 request extension 에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthGate;
//!
//! App::new()
//!     .app_data(web::Data::new(token_service))
//!     .service(
//!         web::resource("/products/add")
//!             .wrap(AuthGate::required())
//!             .route(web::post().to(add_product))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthGate;
