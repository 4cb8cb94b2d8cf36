//! 결제 기록 리포지토리

use std::sync::Arc;
use mongodb::bson::Document;
use crate::db::{DocumentStore, InsertResult};
use crate::domain::collections::PAYMENTS;
use crate::errors::AppResult;

#[derive(Clone)]
pub struct PaymentRepository {
    store: Arc<dyn DocumentStore>,
}

impl PaymentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn insert(&self, mut payment: Document) -> AppResult<InsertResult> {
        payment.remove("_id");
        self.store.insert_one(PAYMENTS, payment).await
    }
}
