use std::env;

use auth::TokenCodec;
use auth::TokenError;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_algorithm")]
    pub algorithm: String,
    #[serde(default = "JwtConfig::default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
}

impl JwtConfig {
    fn default_algorithm() -> String {
        "HS256".to_string()
    }

    fn default_access_token_expire_minutes() -> i64 {
        30
    }

    /// Build the token codec described by this section.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - `algorithm` is not an HMAC algorithm
    pub fn token_codec(&self) -> Result<TokenCodec, TokenError> {
        TokenCodec::from_algorithm_name(self.secret.as_bytes(), &self.algorithm)
    }

    /// Lifetime of issued access tokens.
    ///
    /// # Errors
    /// * `Message` - Lifetime is not positive, or a token issued now would
    ///   expire past the last representable instant
    pub fn access_token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        let minutes = self.access_token_expire_minutes;
        if minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_expire_minutes must be positive".to_string(),
            ));
        }

        chrono::Duration::try_minutes(minutes)
            .filter(|ttl| chrono::Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.access_token_expire_minutes is out of range: {}",
                    minutes
                ))
            })
    }
}

// The secret never reaches logs through Debug
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__ACCESS_TOKEN_EXPIRE_MINUTES=60 overrides jwt.access_token_expire_minutes
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        config.jwt.access_token_ttl()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(algorithm: &str) -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-jwt-signing-at-least-32-bytes".to_string(),
            algorithm: algorithm.to_string(),
            access_token_expire_minutes: 30,
        }
    }

    #[test]
    fn test_token_codec_from_config() {
        let codec = jwt_config("HS256").token_codec().expect("HS256 is supported");
        assert_eq!(codec.algorithm(), auth::Algorithm::HS256);
    }

    #[test]
    fn test_token_codec_rejects_asymmetric_algorithm() {
        assert!(jwt_config("RS256").token_codec().is_err());
    }

    #[test]
    fn test_access_token_ttl() {
        assert_eq!(
            jwt_config("HS256").access_token_ttl().unwrap(),
            chrono::Duration::minutes(30)
        );
    }

    #[test]
    fn test_access_token_ttl_rejects_unusable_lifetimes() {
        for minutes in [0, -5, 1_000_000_000_000, i64::MAX] {
            let config = JwtConfig {
                access_token_expire_minutes: minutes,
                ..jwt_config("HS256")
            };
            assert!(config.access_token_ttl().is_err(), "{} minutes accepted", minutes);
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", jwt_config("HS256"));
        assert!(!rendered.contains("test-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
