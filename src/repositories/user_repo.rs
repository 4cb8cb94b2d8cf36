//! # 사용자 리포지토리
//!
//! 이메일을 자연 키로 사용하는 `users` 컬렉션 접근을 담당합니다.

use std::sync::Arc;
use mongodb::bson::{doc, Document};
use crate::db::{DeleteOutcome, DocumentStore, InsertOutcome, UpdateOutcome};
use crate::domain::collections::USERS;
use crate::domain::User;
use crate::errors::AppResult;
use super::parse_object_id;

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 사용자 목록 (역할 필터 선택)
    pub async fn find_all(&self, role: Option<&str>) -> AppResult<Vec<Document>> {
        let filter = match role {
            Some(role) => doc! { "role": role },
            None => doc! {},
        };
        self.store.find(USERS, filter).await
    }

    /// 이메일로 사용자 문서 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Document>> {
        self.store.find_one(USERS, doc! { "email": email }).await
    }

    /// 이메일로 사용자를 조회하여 역할 뷰로 변환
    ///
    /// # 반환값
    ///
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_user(&self, email: &str) -> AppResult<Option<User>> {
        match self.find_by_email(email).await? {
            Some(document) => Ok(Some(User::from(&document))),
            None => Ok(None),
        }
    }

    /// 이메일 기준 조건부 가입
    ///
    /// 같은 이메일의 사용자가 있으면 아무것도 쓰지 않고 `AlreadyExists` 를 반환합니다.
    pub async fn register(&self, email: &str, mut user: Document) -> AppResult<InsertOutcome> {
        user.remove("_id");
        self.store
            .insert_if_absent(USERS, doc! { "email": email }, user)
            .await
    }

    /// 관리자 인증 표시 (일치 문서가 없으면 upsert)
    pub async fn mark_verified(&self, id: &str) -> AppResult<UpdateOutcome> {
        let object_id = parse_object_id(id)?;
        self.store
            .update_one(
                USERS,
                doc! { "_id": object_id },
                doc! { "$set": { "verified": true } },
                true,
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let object_id = parse_object_id(id)?;
        self.store.delete_one(USERS, doc! { "_id": object_id }).await
    }

    /// 이메일 고유 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.store
            .ensure_unique_index(USERS, doc! { "email": 1 }, "email_unique")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::domain::Role;

    #[actix_web::test]
    async fn test_register_is_idempotent_by_email() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        let user = doc! { "email": "a@x.com", "role": "seller" };

        assert!(repo.register("a@x.com", user.clone()).await.unwrap().is_inserted());
        assert_eq!(
            repo.register("a@x.com", user).await.unwrap(),
            InsertOutcome::AlreadyExists
        );
        assert_eq!(repo.find_all(None).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_role_filter_and_view() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        repo.register("s@x.com", doc! { "email": "s@x.com", "role": "seller" }).await.unwrap();
        repo.register("b@x.com", doc! { "email": "b@x.com", "role": "user" }).await.unwrap();

        assert_eq!(repo.find_all(Some("seller")).await.unwrap().len(), 1);
        assert_eq!(repo.find_user("s@x.com").await.unwrap().unwrap().role, Some(Role::Seller));
        assert!(repo.find_user("nobody@x.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_mark_verified_existing_user() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        let inserted = match repo.register("s@x.com", doc! { "email": "s@x.com" }).await.unwrap() {
            InsertOutcome::Inserted(result) => result,
            InsertOutcome::AlreadyExists => panic!("expected insert"),
        };
        let id = inserted.inserted_id.as_object_id().unwrap().to_hex();

        let outcome = repo.mark_verified(&id).await.unwrap();

        assert_eq!(outcome.matched_count, 1);
        assert!(repo.find_user("s@x.com").await.unwrap().unwrap().verified);
    }
}
