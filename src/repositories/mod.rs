//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 하나의 컬렉션에 대한 필터 문서를 조립하고
//! [`DocumentStore`](crate::db::DocumentStore) 연산을 정확히 한 번 호출합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::ProductRepository;
//!
//! let products = ProductRepository::new(store.clone());
//! let unsold = products.find_unsold_by_category("gaming").await?;
//! ```

use mongodb::bson::oid::ObjectId;
use crate::errors::{AppError, AppResult};

pub mod category_repo;
pub mod market_repo;
pub mod payment_repo;
pub mod product_repo;
pub mod user_repo;

pub use category_repo::CategoryRepository;
pub use market_repo::MarketRepository;
pub use payment_repo::PaymentRepository;
pub use product_repo::ProductRepository;
pub use user_repo::UserRepository;

/// 경로 파라미터의 16진수 ID 를 ObjectId 로 변환합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("64b7f0c2a1b2c3d4e5f60718").is_ok());
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
