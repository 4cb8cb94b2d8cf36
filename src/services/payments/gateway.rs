//! 결제 프로세서 게이트웨이
//!
//! 금액을 받아 결제 인텐트를 만들고 클라이언트 시크릿을 돌려주는 것이 전부입니다.
//! 운영 구현은 Stripe REST API 를 form-encoded 요청으로 호출합니다.

use async_trait::async_trait;
use serde::Deserialize;
use crate::config::PaymentConfig;
use crate::errors::{AppError, AppResult};

/// 결제 인텐트 생성 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// 결제 인텐트를 생성하고 클라이언트 시크릿을 반환합니다.
    ///
    /// * `amount` - 최소 통화 단위 금액 (예: 센트)
    /// * `currency` - 소문자 ISO 통화 코드
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

/// Stripe 결제 인텐트 API 클라이언트
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.clone(),
        }
    }

    fn intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base)
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> AppResult<String> {
        let amount = amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("결제 인텐트 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "결제 인텐트 생성 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<PaymentIntentResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("결제 인텐트 응답 파싱 실패: {}", e)))?
            .client_secret
            .ok_or_else(|| AppError::ExternalServiceError(
                "결제 인텐트 응답에 client_secret 이 없습니다".to_string()
            ))
    }
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_url_uses_configured_base() {
        let gateway = StripeGateway::new(&PaymentConfig {
            secret_key: "sk_test_123".to_string(),
            api_base: "http://localhost:12111".to_string(),
            currency: "usd".to_string(),
        });

        assert_eq!(gateway.intents_url(), "http://localhost:12111/v1/payment_intents");
        assert!(!format!("{:?}", gateway).contains("sk_test_123"));
    }

    #[test]
    fn test_intent_response_without_secret() {
        let parsed: PaymentIntentResponse =
            serde_json::from_str(r#"{"id":"pi_1","object":"payment_intent"}"#).unwrap();
        assert!(parsed.client_secret.is_none());
    }
}
