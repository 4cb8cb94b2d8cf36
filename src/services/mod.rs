//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 대부분의 엔드포인트는 리포지토리를 직접 호출하는 단순 전달이며,
//! 토큰 발급/검증, 역할 확인, 결제 흐름처럼 판단이 필요한 부분만 서비스로 둡니다.
//! 모든 서비스는 `main` 에서 설정값을 받아 명시적으로 생성됩니다.

pub mod users;
pub mod auth;
pub mod payments;
