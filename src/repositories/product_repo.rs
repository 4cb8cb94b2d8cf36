//! # 상품 리포지토리
//!
//! 판매 목록 조회는 항상 `sold: false` 조건을 포함하여
//! 판매 완료된 재고를 노출하지 않습니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use crate::db::{DeleteOutcome, DocumentStore, InsertResult, UpdateOutcome};
use crate::domain::collections::PRODUCTS;
use crate::domain::Product;
use crate::errors::AppResult;
use super::parse_object_id;

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 판매 중인 전체 상품
    pub async fn find_unsold(&self) -> AppResult<Vec<Document>> {
        self.store.find(PRODUCTS, doc! { "sold": false }).await
    }

    /// 카테고리별 판매 중인 상품
    pub async fn find_unsold_by_category(&self, category: &str) -> AppResult<Vec<Document>> {
        self.store
            .find(PRODUCTS, doc! { "category": category, "sold": false })
            .await
    }

    /// 판매자 이메일로 상품 조회 (판매 완료 포함)
    pub async fn find_by_seller(&self, email: &str) -> AppResult<Vec<Document>> {
        self.store.find(PRODUCTS, doc! { "email": email }).await
    }

    /// ID 로 상품 문서 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Document>> {
        let object_id = parse_object_id(id)?;
        self.store.find_one(PRODUCTS, doc! { "_id": object_id }).await
    }

    /// ID 로 상품을 조회하여 소유자/판매 상태 뷰로 변환
    pub async fn find_view(&self, object_id: ObjectId) -> AppResult<Option<Product>> {
        match self.store.find_one(PRODUCTS, doc! { "_id": object_id }).await? {
            Some(document) => Ok(Some(Product::from(&document))),
            None => Ok(None),
        }
    }

    /// 새 상품 등록
    ///
    /// 게시 시각(`postedAt`)은 클라이언트 값과 무관하게 서버 시각으로 덮어쓰고,
    /// `sold` / `advertised` 가 없으면 `false` 로 채웁니다.
    pub async fn insert(&self, mut product: Document) -> AppResult<InsertResult> {
        product.remove("_id");
        product.insert("postedAt", DateTime::now());
        if !matches!(product.get("sold"), Some(mongodb::bson::Bson::Boolean(_))) {
            product.insert("sold", false);
        }
        if !matches!(product.get("advertised"), Some(mongodb::bson::Bson::Boolean(_))) {
            product.insert("advertised", false);
        }

        self.store.insert_one(PRODUCTS, product).await
    }

    pub async fn delete(&self, object_id: ObjectId) -> AppResult<DeleteOutcome> {
        self.store.delete_one(PRODUCTS, doc! { "_id": object_id }).await
    }

    /// 광고 표시
    ///
    /// 판매자 이메일과 ID 가 모두 일치해야 하며, 일치하는 문서가 없으면
    /// upsert 로 부분 문서가 생성됩니다.
    pub async fn advertise(&self, email: &str, id: &str) -> AppResult<UpdateOutcome> {
        let object_id = parse_object_id(id)?;
        self.store
            .update_one(
                PRODUCTS,
                doc! { "email": email, "_id": object_id },
                doc! { "$set": { "advertised": true } },
                true,
            )
            .await
    }

    /// 결제 완료 후 판매 완료 처리 (upsert 없음)
    pub async fn mark_sold(&self, object_id: ObjectId) -> AppResult<UpdateOutcome> {
        self.store
            .update_one(
                PRODUCTS,
                doc! { "_id": object_id },
                doc! { "$set": { "sold": true } },
                false,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn repository() -> ProductRepository {
        ProductRepository::new(Arc::new(MemoryStore::new()))
    }

    #[actix_web::test]
    async fn test_category_listing_excludes_sold_products() {
        let repo = repository();
        repo.insert(doc! { "name": "A", "category": "X" }).await.unwrap();
        repo.insert(doc! { "name": "B", "category": "X", "sold": true }).await.unwrap();
        repo.insert(doc! { "name": "C", "category": "Y" }).await.unwrap();

        let listed = repo.find_unsold_by_category("X").await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].get_str("name").unwrap(), "A");
    }

    #[actix_web::test]
    async fn test_insert_stamps_posted_time_and_defaults() {
        let repo = repository();
        let client_time = DateTime::from_millis(0);
        let inserted = repo
            .insert(doc! { "name": "A", "postedAt": client_time, "advertised": "yes" })
            .await
            .unwrap();

        let id = inserted.inserted_id.as_object_id().unwrap();
        let stored = repo.find_by_id(&id.to_hex()).await.unwrap().unwrap();

        assert_ne!(stored.get_datetime("postedAt").unwrap(), &client_time);
        assert_eq!(stored.get_bool("sold").unwrap(), false);
        assert_eq!(stored.get_bool("advertised").unwrap(), false);
    }

    #[actix_web::test]
    async fn test_mark_sold_removes_product_from_listing() {
        let repo = repository();
        let inserted = repo.insert(doc! { "name": "A", "category": "X" }).await.unwrap();
        let id = inserted.inserted_id.as_object_id().unwrap();

        let outcome = repo.mark_sold(id).await.unwrap();

        assert_eq!(outcome.matched_count, 1);
        assert!(repo.find_unsold().await.unwrap().is_empty());
        assert!(repo.find_view(id).await.unwrap().unwrap().sold);
    }

    #[actix_web::test]
    async fn test_advertise_upserts_when_nothing_matches() {
        let repo = repository();
        let id = ObjectId::new();

        let outcome = repo.advertise("seller@x.com", &id.to_hex()).await.unwrap();

        assert_eq!(outcome.upserted_count, 1);
        let created = repo.find_view(id).await.unwrap().unwrap();
        assert!(created.advertised);
        assert!(created.is_owned_by("seller@x.com"));
    }
}
