//! 도메인 계층 모듈
//!
//! 저장소 문서의 형태(엔티티), HTTP 요청/응답 DTO,
//! 그리고 인증 토큰 관련 모델을 정의합니다.
//!
//! 이 서비스는 문서를 그대로 전달하는 것이 기본이므로 엔티티 구조체는
//! 비즈니스 판단에 필요한 필드만 읽어내는 "뷰" 역할을 합니다.
//! 그 외 필드는 저장소 문서에 그대로 남아 응답에 포함됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
