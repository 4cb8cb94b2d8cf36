//! LapStore 마켓플레이스 백엔드
//!
//! 중고 노트북 거래 스토어프론트를 위한 REST API 서버입니다.
//! 관리자, 판매자, 구매자 세 역할을 가지며 카테고리/상품 조회, 위시리스트,
//! 주문, 역할 확인, JWT 인증, 결제 인텐트 생성을 제공합니다.
//!
//! # Features
//!
//! - **상품 관리**: 등록, 카테고리별 조회(판매 완료 제외), 광고, 소유자 삭제
//! - **JWT 인증**: 등록된 사용자에게 장기 액세스 토큰 발급, 보호 라우트 게이트
//! - **조건부 삽입**: 위시리스트/주문/가입의 자연 키 중복 방지
//! - **결제**: Stripe 결제 인텐트 생성, 결제 기록 후 판매 완료 처리
//! - **MongoDB**: 문서 저장소 (테스트/데모용 메모리 구현 포함)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Route Table   │ ← 순서 있는 (메서드, 패턴) → 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    AuthGate     │ ← 보호 라우트만
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 사용자, 토큰, 결제
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 필터 문서 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use lapstore_backend::state::AppState;
//! use lapstore_backend::routes::configure_all_routes;
//!
//! let state = AppState::new(store, tokens.clone(), gateway, &payment_config);
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .app_data(web::Data::from(tokens))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
