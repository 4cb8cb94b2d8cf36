//! User Entity Implementation
//!
//! 사용자는 이메일로 식별되며 역할(admin / seller / user)과 인증 여부를 가집니다.
//! 가입은 클라이언트가 보낸 문서를 그대로 저장하므로, 역할 판단에 필요한 필드만
//! 타입과 무관하게 관대하게 읽어냅니다.

use mongodb::bson::{Bson, Document};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Seller,
    /// 구매자
    User,
}

impl Role {
    /// 저장된 역할 문자열 해석
    ///
    /// 대소문자를 구분하지 않으며 과거 데이터의 `buyer` 도 구매자로 봅니다.
    /// 알 수 없는 값은 `None` 입니다.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "seller" => Some(Role::Seller),
            "user" | "buyer" => Some(Role::User),
            _ => None,
        }
    }
}

/// 사용자 엔티티 (역할 판단용 뷰)
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 사용자 이메일 (자연 키)
    pub email: String,
    /// 사용자 역할
    ///
    /// 필드가 없거나 `null` 이면 구매자, 알 수 없는 값이면 `None` 으로 어떤 역할과도
    /// 일치하지 않습니다.
    pub role: Option<Role>,
    /// 관리자 인증 여부 (불리언이 아니면 미인증)
    pub verified: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn is_seller(&self) -> bool {
        self.role == Some(Role::Seller)
    }

    pub fn is_buyer(&self) -> bool {
        self.role == Some(Role::User)
    }
}

impl From<&Document> for User {
    fn from(document: &Document) -> Self {
        let role = match document.get("role") {
            None | Some(Bson::Null) => Some(Role::User),
            Some(Bson::String(role)) => Role::parse(role),
            Some(_) => None,
        };

        Self {
            email: document.get_str("email").unwrap_or_default().to_string(),
            role,
            verified: document.get_bool("verified").unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_user_from_document_ignores_extra_fields() {
        let user = User::from(&doc! {
            "_id": ObjectId::new(),
            "name": "Rahim",
            "email": "rahim@x.com",
            "role": "seller",
            "image": "https://i.ibb.co/abc.png",
        });

        assert!(user.is_seller());
        assert!(!user.verified);
    }

    #[test]
    fn test_role_aliases_and_default() {
        let legacy = User::from(&doc! { "email": "a@x.com", "role": "Buyer" });
        let missing = User::from(&doc! { "email": "b@x.com" });
        let null = User::from(&doc! { "email": "c@x.com", "role": null });

        assert_eq!(legacy.role, Some(Role::User));
        assert!(missing.is_buyer());
        assert!(null.is_buyer());
    }

    #[test]
    fn test_unexpected_field_types_match_no_role() {
        let guest = User::from(&doc! { "email": "g@x.com", "role": "guest", "verified": "no" });
        let numeric = User::from(&doc! { "email": "n@x.com", "role": 3 });

        assert_eq!(guest.role, None);
        assert!(!guest.is_admin() && !guest.is_seller() && !guest.is_buyer());
        assert!(!guest.verified);
        assert_eq!(numeric.role, None);
    }
}
