//! 결제 서비스 모듈
//!
//! 외부 결제 프로세서 연동([`PaymentGateway`])과 결제 완료 처리([`PaymentService`])를 제공합니다.

pub mod gateway;
pub mod payment_service;

pub use gateway::{PaymentGateway, StripeGateway};
pub use payment_service::PaymentService;
