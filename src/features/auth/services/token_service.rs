use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use uuid::Uuid;

use crate::core::config::JwtConfig;
use crate::core::error::{AppError, Result};

/// Session token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: ClaimsUser,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: Uuid,
}

/// Signs and verifies session tokens with a shared HMAC secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in: config.expires_in,
        }
    }

    /// Sign a token for `user_id`, valid for the configured lifetime
    pub fn sign(&self, user_id: Uuid) -> Result<String> {
        let iat = Utc::now().timestamp();
        let claims = SessionClaims {
            user: ClaimsUser { id: user_id },
            iat,
            exp: iat + self.expires_in.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Session token rejected: {}", e);
                AppError::Unauthorized("Token is not valid".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, expires_in_secs: u64) -> TokenService {
        TokenService::new(&JwtConfig::new(
            secret,
            Duration::from_secs(expires_in_secs),
        ))
    }

    #[test]
    fn test_sign_and_verify_round_trip() {
        let tokens = service("test-secret", JwtConfig::DEFAULT_EXPIRES_IN_SECS);
        let id = Uuid::now_v7();

        let claims = tokens.verify(&tokens.sign(id).unwrap()).unwrap();

        assert_eq!(claims.user.id, id);
        assert_eq!(claims.exp - claims.iat, 360_000);
        assert!((claims.iat - Utc::now().timestamp()).abs() <= 5);
    }

    #[test]
    fn test_payload_only_carries_user_id() {
        let tokens = service("test-secret", 60);
        let token = tokens.sign(Uuid::now_v7()).unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let decoded = base64::Engine::decode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            payload,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&decoded).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["exp", "iat", "user"]);
        assert_eq!(json["user"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service("secret-a", 60).sign(Uuid::now_v7()).unwrap();

        let err = service("secret-b", 60).verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service("test-secret", 60);
        let iat = Utc::now().timestamp() - 3600;
        let claims = SessionClaims {
            user: ClaimsUser { id: Uuid::now_v7() },
            iat,
            exp: iat + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let tokens = service("test-secret", 60);
        assert!(tokens.verify("not.a.jwt").is_err());
        assert!(tokens.verify("").is_err());
    }
}
