//! 위시리스트 항목 / 주문 엔티티
//!
//! 두 컬렉션 모두 `(productId, email)` 쌍을 자연 키로 사용합니다.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

/// 위시리스트 항목 또는 주문의 자연 키
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEntry {
    /// 대상 상품 ID (16진수 ObjectId 문자열)
    pub product_id: String,
    /// 사용자 이메일
    pub email: String,
}

impl MarketEntry {
    /// 자연 키 조회 필터
    pub fn key_filter(&self) -> Document {
        doc! { "productId": &self.product_id, "email": &self.email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_filter_from_request_body() {
        let entry: MarketEntry = serde_json::from_value(serde_json::json!({
            "productId": "64b7f0c2a1b2c3d4e5f60718",
            "email": "buyer@x.com",
            "productName": "Dell XPS 13",
        }))
        .unwrap();

        assert_eq!(
            entry.key_filter(),
            doc! { "productId": "64b7f0c2a1b2c3d4e5f60718", "email": "buyer@x.com" }
        );
    }
}
