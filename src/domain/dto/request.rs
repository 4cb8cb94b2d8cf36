use serde::Deserialize;

/// `?email=` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// `GET /users?role=` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub role: Option<String>,
}

/// 결제 인텐트 생성 요청
///
/// ```json
/// { "price": 540.5 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentRequest {
    /// 주 통화 단위 가격 (예: 달러)
    pub price: f64,
}
