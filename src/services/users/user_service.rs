//! # 사용자 관리 서비스 구현
//!
//! 사용자 문서는 클라이언트가 보낸 형태 그대로 저장하고, 비즈니스 판단(역할 확인,
//! 소유자 확인)에 필요한 필드만 [`User`] 뷰로 읽어냅니다.
//!
//! ## 존재하지 않는 사용자
//!
//! 역할 확인은 조회 결과가 없으면 `AppError::NotFound` 로 실패합니다.
//! 토큰 발급은 예외적으로 실패하지 않고 `None` 을 반환합니다.

use std::sync::Arc;
use log::{debug, info};
use mongodb::bson::{Bson, Document};
use crate::db::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::domain::{Role, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;
use crate::services::auth::TokenService;

/// 사용자 관리 비즈니스 로직 서비스
#[derive(Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: UserRepository,
    /// 액세스 토큰 발급기
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(user_repo: UserRepository, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    /// 사용자 목록 조회
    ///
    /// `role` 이 주어지면 해당 역할의 사용자만 반환합니다.
    pub async fn list(&self, role: Option<&str>) -> AppResult<Vec<Document>> {
        self.user_repo.find_all(role).await
    }

    /// 이메일로 사용자 문서 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음
    pub async fn find_by_email(&self, email: &str) -> AppResult<Document> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }

    /// 역할 판단용 사용자 뷰 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음
    pub async fn require_user(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_user(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }

    pub async fn is_admin(&self, email: &str) -> AppResult<bool> {
        Ok(self.require_user(email).await?.is_admin())
    }

    pub async fn is_seller(&self, email: &str) -> AppResult<bool> {
        Ok(self.require_user(email).await?.is_seller())
    }

    pub async fn is_buyer(&self, email: &str) -> AppResult<bool> {
        Ok(self.require_user(email).await?.is_buyer())
    }

    /// 사용자 역할 조회 (사용자가 없거나 역할을 알 수 없으면 `None`)
    ///
    /// 소유자 확인처럼 사용자가 없어도 요청 자체는 유효한 경우에 사용합니다.
    pub async fn role_of(&self, email: &str) -> AppResult<Option<Role>> {
        Ok(self.user_repo.find_user(email).await?.and_then(|user| user.role))
    }

    /// 사용자 가입 (이메일 기준 멱등)
    ///
    /// 같은 이메일의 사용자가 이미 있으면 아무것도 쓰지 않고
    /// `InsertOutcome::AlreadyExists` 를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문에 문자열 `email` 필드가 없음
    pub async fn register(&self, user: Document) -> AppResult<InsertOutcome> {
        let email = match user.get("email") {
            Some(Bson::String(email)) if !email.trim().is_empty() => email.clone(),
            _ => {
                return Err(AppError::ValidationError(
                    "email 필드가 필요합니다".to_string(),
                ))
            }
        };

        let outcome = self.user_repo.register(&email, user).await?;
        match &outcome {
            InsertOutcome::Inserted(_) => info!("👤 새 사용자 가입: {}", email),
            InsertOutcome::AlreadyExists => debug!("이미 가입된 사용자: {}", email),
        }
        Ok(outcome)
    }

    /// 관리자 인증 표시 (일치하는 사용자가 없으면 upsert)
    pub async fn verify(&self, id: &str) -> AppResult<UpdateOutcome> {
        self.user_repo.mark_verified(id).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        self.user_repo.delete(id).await
    }

    /// 등록된 사용자에게 액세스 토큰 발급
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(token))` - 등록된 사용자
    /// * `Ok(None)` - 등록되지 않은 이메일
    pub async fn issue_token(&self, email: &str) -> AppResult<Option<String>> {
        if self.user_repo.find_by_email(email).await?.is_none() {
            debug!("등록되지 않은 이메일의 토큰 요청: {}", email);
            return Ok(None);
        }

        self.tokens.issue(email).map(Some)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        self.user_repo.create_indexes().await
    }
}
