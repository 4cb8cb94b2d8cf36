//! Document Store Gateway
//!
//! 컬렉션 단위 문서 저장소 추상화입니다. 핸들러와 리포지토리는
//! [`DocumentStore`] trait 만 알고, 실제 구현은 시작 시점에 선택됩니다.
//!
//! - [`MongoStore`] - MongoDB 드라이버 기반 운영 구현
//! - [`MemoryStore`] - 프로세스 내 메모리 구현 (테스트/로컬 데모)
//!
//! # 필터 규칙
//!
//! 모든 필터는 필드 동등 비교(`{ "email": "a@x.com", "sold": false }`)만 사용하며,
//! 업데이트 문서는 `$set` 연산자만 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::{DocumentStore, MemoryStore};
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let unsold = store.find("products", doc! { "sold": false }).await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::Document;
use crate::errors::AppResult;

pub mod json;
pub mod memory;
pub mod mongo;
pub mod results;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use results::{DeleteOutcome, InsertOutcome, InsertResult, UpdateOutcome};

/// 문서 컬렉션 저장소 인터페이스
///
/// 각 메서드는 정확히 하나의 저장소 연산에 대응합니다.
/// 재시도나 트랜잭션은 제공하지 않습니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 필터에 일치하는 모든 문서를 반환합니다.
    async fn find(&self, collection: &str, filter: Document) -> AppResult<Vec<Document>>;

    /// 필터에 일치하는 첫 문서를 반환합니다.
    async fn find_one(&self, collection: &str, filter: Document) -> AppResult<Option<Document>>;

    /// 문서를 삽입합니다. `_id` 가 없으면 새 ObjectId 가 할당됩니다.
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertResult>;

    /// `key` 필터에 일치하는 문서가 없을 때만 삽입합니다.
    ///
    /// 자연 키 중복 삽입을 막기 위한 연산이며, 구현체는 가능한 한
    /// 원자적으로 동작해야 합니다 (고유 인덱스 또는 단일 잠금).
    async fn insert_if_absent(
        &self,
        collection: &str,
        key: Document,
        document: Document,
    ) -> AppResult<InsertOutcome>;

    /// 첫 번째 일치 문서에 `update`(`$set`)를 적용합니다.
    ///
    /// `upsert` 가 참이고 일치 문서가 없으면 필터 필드와 `$set` 필드로 새 문서를 만듭니다.
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome>;

    /// 첫 번째 일치 문서를 삭제합니다.
    async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome>;

    /// 자연 키에 대한 고유 인덱스를 보장합니다.
    async fn ensure_unique_index(&self, collection: &str, keys: Document, name: &str) -> AppResult<()>;
}
