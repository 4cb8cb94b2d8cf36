//! # Authentication & Payment Configuration Module
//!
//! JWT 서명 비밀키와 결제 프로세서 비밀키처럼 민감한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="730"   # 기본값: 2년
//! ```
//!
//! ### 결제 설정
//! ```bash
//! export STRIPE_SECRET_KEY="sk_test_..."
//! export STRIPE_API_BASE="https://api.stripe.com"  # 선택
//! export PAYMENT_CURRENCY="usd"                    # 선택
//! ```

use super::data_config::{parse_or, process_env, ConfigError, Environment, Lookup};

/// 개발 환경에서만 허용되는 기본 서명 키
const DEV_TOKEN_SECRET: &str = "lapstore-dev-secret";

/// JWT 서명/만료 설정
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 서명 비밀키
    pub secret: String,
    /// 토큰 유효 기간 (일)
    pub expiration_days: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// `ACCESS_TOKEN_SECRET` 이 없으면 개발/테스트 환경에서는 경고와 함께
    /// 기본 키를 사용하고, 그 외 환경에서는 에러를 반환합니다.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env, environment)
    }

    pub(crate) fn from_lookup(
        lookup: Lookup<'_>,
        environment: &Environment,
    ) -> Result<Self, ConfigError> {
        let secret = match lookup("ACCESS_TOKEN_SECRET") {
            Some(secret) => secret,
            None if environment.allows_insecure_defaults() => {
                log::warn!("ACCESS_TOKEN_SECRET not set, using default (not secure for production!)");
                DEV_TOKEN_SECRET.to_string()
            }
            None => return Err(ConfigError::Missing("ACCESS_TOKEN_SECRET")),
        };

        let expiration_days = parse_or(lookup, "JWT_EXPIRATION_DAYS", 730_i64)?;
        if expiration_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_DAYS",
                value: expiration_days.to_string(),
            });
        }

        Ok(Self { secret, expiration_days })
    }
}

/// 결제 프로세서(Stripe) 설정
#[derive(Clone)]
pub struct PaymentConfig {
    /// 서버 측 비밀키 (`sk_...`)
    pub secret_key: String,
    /// API 기본 주소
    pub api_base: String,
    /// 결제 통화 (ISO 4217 소문자)
    pub currency: String,
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("currency", &self.currency)
            .finish()
    }
}

impl PaymentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            secret_key: lookup("STRIPE_SECRET_KEY").ok_or(ConfigError::Missing("STRIPE_SECRET_KEY"))?,
            api_base: lookup("STRIPE_API_BASE")
                .unwrap_or_else(|| "https://api.stripe.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            currency: lookup("PAYMENT_CURRENCY")
                .unwrap_or_else(|| "usd".to_string())
                .to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_jwt_defaults_in_development() {
        let config = JwtConfig::from_lookup(&empty, &Environment::Development).unwrap();

        assert_eq!(config.secret, DEV_TOKEN_SECRET);
        assert_eq!(config.expiration_days, 730);
    }

    #[test]
    fn test_jwt_secret_required_in_production() {
        let err = JwtConfig::from_lookup(&empty, &Environment::Production).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ACCESS_TOKEN_SECRET"));
    }

    #[test]
    fn test_jwt_rejects_non_positive_expiration() {
        let lookup = |key: &str| match key {
            "ACCESS_TOKEN_SECRET" => Some("s3cret".to_string()),
            "JWT_EXPIRATION_DAYS" => Some("0".to_string()),
            _ => None,
        };
        assert!(JwtConfig::from_lookup(&lookup, &Environment::Production).is_err());
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = JwtConfig { secret: "s3cret".to_string(), expiration_days: 1 };
        assert!(!format!("{:?}", config).contains("s3cret"));
    }

    #[test]
    fn test_payment_config() {
        let lookup = |key: &str| match key {
            "STRIPE_SECRET_KEY" => Some("sk_test_123".to_string()),
            "STRIPE_API_BASE" => Some("http://localhost:12111/".to_string()),
            _ => None,
        };
        let config = PaymentConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.api_base, "http://localhost:12111");
        assert_eq!(config.currency, "usd");
        assert_eq!(
            PaymentConfig::from_lookup(&empty).unwrap_err(),
            ConfigError::Missing("STRIPE_SECRET_KEY")
        );
    }
}
