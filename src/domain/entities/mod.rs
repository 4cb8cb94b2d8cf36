//! 저장소 엔티티
//!
//! 각 모듈은 하나의 컬렉션에 저장되는 문서의 형태를 정의합니다.
//! 카테고리(`categories`)는 읽기 전용 참조 데이터이므로 그대로 전달만 합니다.

pub mod users;
pub mod product;
pub mod market;
pub mod payment;

pub use users::user::{Role, User};
pub use product::Product;
pub use market::MarketEntry;
pub use payment::PaymentRecord;

/// 컬렉션 이름
pub mod collections {
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
    pub const USERS: &str = "users";
    pub const WISHLIST: &str = "wishlist";
    pub const ORDERS: &str = "orders";
    pub const PAYMENTS: &str = "payments";
}
