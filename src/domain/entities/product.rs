//! Product Entity
//!
//! 판매자가 등록하는 중고 노트북 상품입니다. `email` 은 판매자 이메일에 대한
//! 역참조이며 소유 관계를 표현하지 않습니다.

use mongodb::bson::Document;

/// 상품 엔티티 (소유자/판매 상태 판단용 뷰)
///
/// 가격, 카테고리 등 나머지 필드는 클라이언트가 보낸 형태 그대로 저장되며 여기서 읽지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// 판매자 이메일
    pub email: Option<String>,
    /// 결제 완료 여부
    pub sold: bool,
    /// 광고 노출 여부
    pub advertised: bool,
}

impl Product {
    /// 주어진 이메일이 판매자인지 확인
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|owner| owner.eq_ignore_ascii_case(email))
    }
}

impl From<&Document> for Product {
    fn from(document: &Document) -> Self {
        Self {
            email: document.get_str("email").ok().map(str::to_string),
            sold: document.get_bool("sold").unwrap_or(false),
            advertised: document.get_bool("advertised").unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_product_view_defaults() {
        let product = Product::from(&doc! {
            "email": "Seller@x.com",
            "category": "gaming",
            "price": 650_i32,
        });

        assert!(!product.sold);
        assert!(product.is_owned_by("seller@x.com"));
        assert!(!product.is_owned_by("other@x.com"));
    }

    #[test]
    fn test_product_view_ignores_loosely_typed_fields() {
        let product = Product::from(&doc! {
            "email": "s@x.com",
            "price": "800",
            "category": null,
            "sold": "yes",
        });

        assert!(product.is_owned_by("s@x.com"));
        assert!(!product.sold);

        let anonymous = Product::from(&doc! { "email": 42 });
        assert!(!anonymous.is_owned_by("s@x.com"));
    }
}
