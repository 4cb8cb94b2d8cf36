//! 저장소 문서를 HTTP 응답용 JSON 으로 변환
//!
//! ObjectId 는 16진수 문자열, 날짜는 RFC 3339 문자열로 바꾸고
//! 나머지 값은 relaxed Extended JSON 규칙을 따릅니다.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// 단일 BSON 값을 JSON 으로 변환합니다.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// 문서를 JSON 객체로 변환합니다.
pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

/// 문서 목록을 JSON 배열로 변환합니다.
pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}
