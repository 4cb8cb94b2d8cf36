//! 애플리케이션 공유 상태
//!
//! `main` 에서 한 번 조립되어 `web::Data<AppState>` 로 모든 핸들러에 전달됩니다.
//! 내부 필드는 모두 `Arc` 를 공유하므로 워커별 복제 비용이 작습니다.

use std::sync::Arc;
use log::info;
use crate::config::PaymentConfig;
use crate::db::DocumentStore;
use crate::errors::AppResult;
use crate::repositories::{CategoryRepository, MarketRepository, PaymentRepository, ProductRepository, UserRepository};
use crate::services::auth::TokenService;
use crate::services::payments::{PaymentGateway, PaymentService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryRepository,
    pub products: ProductRepository,
    pub wishlist: MarketRepository,
    pub orders: MarketRepository,
    pub users: UserService,
    pub payments: PaymentService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        tokens: Arc<TokenService>,
        gateway: Arc<dyn PaymentGateway>,
        payment_config: &PaymentConfig,
    ) -> Self {
        let products = ProductRepository::new(store.clone());

        Self {
            categories: CategoryRepository::new(store.clone()),
            wishlist: MarketRepository::wishlist(store.clone()),
            orders: MarketRepository::orders(store.clone()),
            users: UserService::new(UserRepository::new(store.clone()), tokens),
            payments: PaymentService::new(
                gateway,
                PaymentRepository::new(store),
                products.clone(),
                payment_config,
            ),
            products,
        }
    }

    /// 자연 키 고유 인덱스 생성 (사용자 이메일, 위시리스트/주문 쌍)
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.users.create_indexes().await?;
        self.wishlist.create_indexes().await?;
        self.orders.create_indexes().await?;
        info!("🗂️ 고유 인덱스 확인 완료");
        Ok(())
    }
}
