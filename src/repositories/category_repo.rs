//! 카테고리 리포지토리 (읽기 전용)

use std::sync::Arc;
use mongodb::bson::{doc, Document};
use crate::db::DocumentStore;
use crate::domain::collections::CATEGORIES;
use crate::errors::AppResult;

#[derive(Clone)]
pub struct CategoryRepository {
    store: Arc<dyn DocumentStore>,
}

impl CategoryRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 전체 카테고리 목록
    pub async fn find_all(&self) -> AppResult<Vec<Document>> {
        self.store.find(CATEGORIES, doc! {}).await
    }
}
