//! # Configuration Module
//!
//! 서비스 설정을 관리하는 모듈입니다.
//! 환경 변수는 `main` 에서 한 번만 읽어 타입이 있는 구조체로 만들고,
//! 그 값을 각 서비스의 생성자에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, CORS 설정
//! - [`auth_config`] - JWT 서명, 결제 프로세서 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 데이터베이스
//! export DB_USER="lapstore"
//! export DB_PASSWORD="..."
//! export DB_CLUSTER="cluster0.xxxxx.mongodb.net"
//!
//! # 인증 / 결제
//! export ACCESS_TOKEN_SECRET="..."
//! export STRIPE_SECRET_KEY="sk_test_..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
