//! # 위시리스트 / 주문 리포지토리
//!
//! 두 컬렉션은 `(productId, email)` 자연 키와 접근 패턴이 같으므로
//! 컬렉션 이름만 달리한 하나의 리포지토리로 다룹니다.

use std::sync::Arc;
use mongodb::bson::{doc, Document};
use crate::db::{DocumentStore, InsertOutcome};
use crate::domain::collections::{ORDERS, WISHLIST};
use crate::domain::MarketEntry;
use crate::errors::AppResult;

#[derive(Clone)]
pub struct MarketRepository {
    store: Arc<dyn DocumentStore>,
    collection: &'static str,
}

impl MarketRepository {
    /// `wishlist` 컬렉션 리포지토리
    pub fn wishlist(store: Arc<dyn DocumentStore>) -> Self {
        Self { store, collection: WISHLIST }
    }

    /// `orders` 컬렉션 리포지토리
    pub fn orders(store: Arc<dyn DocumentStore>) -> Self {
        Self { store, collection: ORDERS }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// 사용자 이메일로 항목 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Document>> {
        self.store.find(self.collection, doc! { "email": email }).await
    }

    /// 자연 키 기준 조건부 추가
    pub async fn add(&self, entry: &MarketEntry, mut document: Document) -> AppResult<InsertOutcome> {
        document.remove("_id");
        self.store
            .insert_if_absent(self.collection, entry.key_filter(), document)
            .await
    }

    /// `(productId, email)` 고유 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.store
            .ensure_unique_index(
                self.collection,
                doc! { "productId": 1, "email": 1 },
                "product_email_unique",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn entry(product_id: &str, email: &str) -> MarketEntry {
        MarketEntry { product_id: product_id.to_string(), email: email.to_string() }
    }

    #[actix_web::test]
    async fn test_same_pair_is_added_once() {
        let repo = MarketRepository::wishlist(Arc::new(MemoryStore::new()));
        let e = entry("p1", "a@x.com");
        let body = doc! { "productId": "p1", "email": "a@x.com", "productName": "MacBook Air" };

        assert!(repo.add(&e, body.clone()).await.unwrap().is_inserted());
        assert_eq!(repo.add(&e, body).await.unwrap(), InsertOutcome::AlreadyExists);
        assert_eq!(repo.find_by_email("a@x.com").await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_wishlist_and_orders_are_separate_collections() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let wishlist = MarketRepository::wishlist(store.clone());
        let orders = MarketRepository::orders(store);
        let e = entry("p1", "a@x.com");
        let body = doc! { "productId": "p1", "email": "a@x.com" };

        assert!(wishlist.add(&e, body.clone()).await.unwrap().is_inserted());
        assert!(orders.add(&e, body).await.unwrap().is_inserted());
        assert_eq!(orders.collection(), "orders");
    }
}
