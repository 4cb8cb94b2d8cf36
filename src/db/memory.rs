//! 프로세스 내 메모리 [`DocumentStore`] 구현
//!
//! 테스트와 로컬 데모(`STORE_BACKEND=memory`)에서 사용합니다.
//! 필터는 최상위 필드 동등 비교만, 업데이트는 `$set` 만 지원합니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::db::{DeleteOutcome, DocumentStore, InsertOutcome, InsertResult, UpdateOutcome};
use crate::errors::{AppError, AppResult};

type Collections = HashMap<String, Vec<Document>>;

/// 메모리 문서 저장소
///
/// 모든 연산은 하나의 `RwLock` 아래에서 수행되므로
/// [`DocumentStore::insert_if_absent`] 는 원자적입니다.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬렉션의 문서 수
    pub fn count(&self, collection: &str) -> AppResult<usize> {
        Ok(self.read()?.get(collection).map_or(0, Vec::len))
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금이 손상되었습니다".to_string()))
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key).is_some_and(|actual| values_equal(actual, expected)))
}

// 숫자는 저장 타입(int32/int64/double)과 무관하게 값으로 비교
fn values_equal(actual: &Bson, expected: &Bson) -> bool {
    match (as_number(actual), as_number(expected)) {
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn set_fields(update: &Document) -> AppResult<Document> {
    match update.get("$set") {
        Some(Bson::Document(fields)) => Ok(fields.clone()),
        _ => Err(AppError::InternalError(
            "메모리 저장소는 $set 업데이트만 지원합니다".to_string(),
        )),
    }
}

fn push_with_id(documents: &mut Vec<Document>, mut document: Document) -> Bson {
    if !document.contains_key("_id") {
        document.insert("_id", ObjectId::new());
    }
    let id = document.get("_id").cloned().unwrap_or(Bson::Null);
    documents.push(document);
    id
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> AppResult<Vec<Document>> {
        let collections = self.read()?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, filter: Document) -> AppResult<Option<Document>> {
        let collections = self.read()?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<InsertResult> {
        let mut collections = self.write()?;
        let documents = collections.entry(collection.to_string()).or_default();
        Ok(InsertResult::new(push_with_id(documents, document)))
    }

    async fn insert_if_absent(
        &self,
        collection: &str,
        key: Document,
        document: Document,
    ) -> AppResult<InsertOutcome> {
        let mut collections = self.write()?;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents.iter().any(|d| matches(d, &key)) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        Ok(InsertOutcome::Inserted(InsertResult::new(push_with_id(documents, document))))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome> {
        let fields = set_fields(&update)?;
        let mut collections = self.write()?;
        let documents = collections.entry(collection.to_string()).or_default();

        if let Some(existing) = documents.iter_mut().find(|d| matches(d, &filter)) {
            let before = existing.clone();
            for (key, value) in fields {
                existing.insert(key, value);
            }
            let modified = u64::from(*existing != before);
            return Ok(UpdateOutcome::new(1, modified, None));
        }

        if !upsert {
            return Ok(UpdateOutcome::new(0, 0, None));
        }

        // upsert: 필터의 동등 조건 + $set 필드로 새 문서 생성
        let mut created = filter;
        for (key, value) in fields {
            created.insert(key, value);
        }
        let id = push_with_id(documents, created);
        Ok(UpdateOutcome::new(0, 0, Some(id)))
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> AppResult<DeleteOutcome> {
        let mut collections = self.write()?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(DeleteOutcome::new(0));
        };

        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(DeleteOutcome::new(1))
            }
            None => Ok(DeleteOutcome::new(0)),
        }
    }

    async fn ensure_unique_index(&self, _collection: &str, _keys: Document, _name: &str) -> AppResult<()> {
        // insert_if_absent 가 단일 잠금으로 자연 키를 보장하므로 별도 인덱스 없음
        Ok(())
    }
}
