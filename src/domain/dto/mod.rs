//! HTTP 요청/응답 DTO
//!
//! 본문 대부분은 저장소 문서를 그대로 주고받으므로, 여기에는 쿼리 파라미터와
//! 형태가 고정된 소수의 요청/응답만 정의합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
