//! Payment Record Entity
//!
//! 완료된 결제의 스냅샷입니다. 저장 직후 대상 상품의 `sold` 플래그를 갱신합니다.
//! 스냅샷의 나머지 필드(가격, 거래 ID 등)는 받은 형태 그대로 저장합니다.

use mongodb::bson::Document;

/// 결제 기록 (상품 참조 확인용 뷰)
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    /// 결제된 상품 ID (16진수 ObjectId 문자열)
    pub product_id: String,
}

impl PaymentRecord {
    /// 스냅샷에서 문자열 `productId` 만 읽어냄 (없거나 문자열이 아니면 `None`)
    pub fn from_snapshot(snapshot: &Document) -> Option<Self> {
        snapshot.get_str("productId").ok().map(|product_id| Self {
            product_id: product_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_only_product_id_is_read() {
        let record = PaymentRecord::from_snapshot(&doc! {
            "productId": "64b7f0c2a1b2c3d4e5f60718",
            "price": "800",
            "transactionId": 17,
        });

        assert_eq!(record.unwrap().product_id, "64b7f0c2a1b2c3d4e5f60718");
        assert!(PaymentRecord::from_snapshot(&doc! { "productId": 5 }).is_none());
        assert!(PaymentRecord::from_snapshot(&doc! { "price": 10 }).is_none());
    }
}
