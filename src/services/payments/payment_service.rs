//! # 결제 서비스 구현
//!
//! ## 결제 완료 흐름
//!
//! ```text
//! POST /payment
//!   1. productId 검증 (쓰기 전)
//!   2. payments 컬렉션에 결제 기록 삽입
//!   3. products 의 sold 플래그 설정
//! ```
//!
//! 2 와 3 은 독립된 쓰기입니다. 3 이 실패해도 2 는 되돌리지 않으며,
//! 실패는 로그로 남기고 500 으로 응답합니다.

use std::sync::Arc;
use log::{error, info};
use mongodb::bson::Document;
use crate::config::PaymentConfig;
use crate::domain::dto::PaymentCompletion;
use crate::domain::PaymentRecord;
use crate::errors::{AppError, AppResult};
use crate::repositories::{parse_object_id, PaymentRepository, ProductRepository};
use super::gateway::PaymentGateway;

#[derive(Clone)]
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    payment_repo: PaymentRepository,
    product_repo: ProductRepository,
    currency: String,
}

impl PaymentService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        payment_repo: PaymentRepository,
        product_repo: ProductRepository,
        config: &PaymentConfig,
    ) -> Self {
        Self {
            gateway,
            payment_repo,
            product_repo,
            currency: config.currency.clone(),
        }
    }

    /// 결제 인텐트 생성
    ///
    /// 가격(주 통화 단위)을 최소 통화 단위로 반올림하여 게이트웨이에 전달합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 0 이하이거나 유한하지 않은 가격
    /// * `AppError::ExternalServiceError` - 결제 프로세서 호출 실패
    pub async fn create_intent(&self, price: f64) -> AppResult<String> {
        let amount = to_minor_units(price)?;
        self.gateway.create_payment_intent(amount, &self.currency).await
    }

    /// 결제 기록 저장 후 상품 판매 완료 처리
    pub async fn complete(&self, payment: Document) -> AppResult<PaymentCompletion> {
        let record = PaymentRecord::from_snapshot(&payment).ok_or_else(|| {
            AppError::ValidationError("결제 정보에 문자열 productId 가 필요합니다".to_string())
        })?;
        let product_id = parse_object_id(&record.product_id)?;

        let inserted = self.payment_repo.insert(payment).await?;
        info!("💳 결제 기록 저장: product={}", record.product_id);

        let product_update = self.product_repo.mark_sold(product_id).await.map_err(|e| {
            error!(
                "결제 기록은 저장되었으나 상품 판매 처리 실패: product={}, error={}",
                record.product_id, e
            );
            e
        })?;

        Ok(PaymentCompletion {
            payment: inserted,
            product_update,
        })
    }
}

fn to_minor_units(price: f64) -> AppResult<i64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::ValidationError(format!(
            "가격은 0보다 큰 숫자여야 합니다: {}", price
        )));
    }
    Ok((price * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use crate::db::{DocumentStore, MemoryStore};
    use crate::domain::collections::PAYMENTS;
    use crate::services::payments::gateway::MockPaymentGateway;

    fn config() -> PaymentConfig {
        PaymentConfig {
            secret_key: "sk_test".to_string(),
            api_base: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
        }
    }

    fn service(gateway: MockPaymentGateway, store: Arc<MemoryStore>) -> PaymentService {
        PaymentService::new(
            Arc::new(gateway),
            PaymentRepository::new(store.clone()),
            ProductRepository::new(store),
            &config(),
        )
    }

    #[test]
    fn test_to_minor_units_rounds_cents() {
        assert_eq!(to_minor_units(540.5).unwrap(), 54050);
        assert_eq!(to_minor_units(19.999).unwrap(), 2000);
        assert!(to_minor_units(0.0).is_err());
        assert!(to_minor_units(-3.0).is_err());
        assert!(to_minor_units(f64::NAN).is_err());
    }

    #[actix_web::test]
    async fn test_create_intent_passes_minor_units_and_currency() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_payment_intent()
            .withf(|amount, currency| *amount == 54050 && currency.to_string() == "usd")
            .times(1)
            .returning(|_, _| Ok("pi_123_secret_456".to_string()));

        let payments = service(gateway, Arc::new(MemoryStore::new()));

        assert_eq!(payments.create_intent(540.5).await.unwrap(), "pi_123_secret_456");
    }

    #[actix_web::test]
    async fn test_invalid_price_never_reaches_gateway() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_payment_intent().times(0);

        let payments = service(gateway, Arc::new(MemoryStore::new()));

        assert!(matches!(payments.create_intent(-1.0).await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_complete_records_payment_and_marks_product_sold() {
        let store = Arc::new(MemoryStore::new());
        let products = ProductRepository::new(store.clone());
        let inserted = products.insert(doc! { "name": "XPS 13", "price": 540.5 }).await.unwrap();
        let product_id = inserted.inserted_id.as_object_id().unwrap();

        let payments = service(MockPaymentGateway::new(), store.clone());
        let completion = payments
            .complete(doc! {
                "productId": product_id.to_hex(),
                "email": "buyer@x.com",
                "price": 540.5,
                "transactionId": "pi_123",
            })
            .await
            .unwrap();

        assert_eq!(completion.product_update.modified_count, 1);
        assert_eq!(store.count(PAYMENTS).unwrap(), 1);
        assert!(products.find_view(product_id).await.unwrap().unwrap().sold);
        assert!(products.find_unsold().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_complete_accepts_loosely_typed_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let products = ProductRepository::new(store.clone());
        let inserted = products.insert(doc! { "name": "ThinkPad T480" }).await.unwrap();
        let product_id = inserted.inserted_id.as_object_id().unwrap();

        let payments = service(MockPaymentGateway::new(), store.clone());
        let completion = payments
            .complete(doc! { "productId": product_id.to_hex(), "price": "800", "email": null })
            .await
            .unwrap();

        assert_eq!(completion.product_update.modified_count, 1);
        let stored = store.find(PAYMENTS, doc! {}).await.unwrap();
        assert_eq!(stored[0].get_str("price").unwrap(), "800");
    }

    #[actix_web::test]
    async fn test_complete_rejects_malformed_product_id_before_writing() {
        let store = Arc::new(MemoryStore::new());
        let payments = service(MockPaymentGateway::new(), store.clone());

        let bad_id = payments.complete(doc! { "productId": "nope" }).await;
        let missing = payments.complete(doc! { "price": 10 }).await;

        assert!(matches!(bad_id, Err(AppError::ValidationError(_))));
        assert!(matches!(missing, Err(AppError::ValidationError(_))));
        assert_eq!(store.count(PAYMENTS).unwrap(), 0);
        assert!(store.find(PAYMENTS, doc! {}).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_complete_for_unknown_product_keeps_payment() {
        let store = Arc::new(MemoryStore::new());
        let payments = service(MockPaymentGateway::new(), store.clone());

        let completion = payments
            .complete(doc! { "productId": ObjectId::new().to_hex() })
            .await
            .unwrap();

        assert_eq!(completion.product_update.matched_count, 0);
        assert_eq!(store.count(PAYMENTS).unwrap(), 1);
    }
}
