//! 저장소 쓰기 연산 결과
//!
//! 응답 본문으로 그대로 전달되므로 드라이버의 확인(acknowledgement) 객체와
//! 같은 camelCase 형태로 직렬화됩니다.

use mongodb::bson::Bson;
use serde::{Serialize, Serializer};

/// ObjectId 는 16진수 문자열로, 그 외 값은 relaxed Extended JSON 으로 직렬화
fn serialize_bson_id<S>(id: &Bson, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    super::json::bson_to_json(id.clone()).serialize(serializer)
}

fn serialize_optional_bson_id<S>(id: &Option<Bson>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serialize_bson_id(id, serializer),
        None => serializer.serialize_none(),
    }
}

/// `insertOne` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    #[serde(serialize_with = "serialize_bson_id")]
    pub inserted_id: Bson,
}

impl InsertResult {
    pub fn new(inserted_id: Bson) -> Self {
        Self { acknowledged: true, inserted_id }
    }
}

/// 조건부 삽입 결과
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// 새 문서가 삽입됨
    Inserted(InsertResult),
    /// 같은 자연 키의 문서가 이미 존재하여 삽입하지 않음
    AlreadyExists,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

/// `updateOne` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[serde(serialize_with = "serialize_optional_bson_id")]
    pub upserted_id: Option<Bson>,
}

impl UpdateOutcome {
    pub fn new(matched_count: u64, modified_count: u64, upserted_id: Option<Bson>) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

/// `deleteOne` 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        Self { acknowledged: true, deleted_count }
    }
}
