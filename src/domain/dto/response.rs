use serde::Serialize;
use crate::db::{InsertResult, UpdateOutcome};

/// `GET /jwt` 응답
///
/// 등록되지 않은 사용자에게는 빈 문자열을 담아 보냅니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// 결제 인텐트 생성 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretResponse {
    pub client_secret: String,
}

/// 결제 완료 응답: 결제 기록 삽입 결과와 상품 갱신 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCompletion {
    #[serde(flatten)]
    pub payment: InsertResult,
    pub product_update: UpdateOutcome,
}

/// 이미 존재하는 자연 키로 삽입을 시도했을 때의 응답 본문
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyExists {
    pub acknowledged: bool,
    pub already_exists: bool,
    pub message: String,
}

impl AlreadyExists {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            acknowledged: false,
            already_exists: true,
            message: message.into(),
        }
    }
}
