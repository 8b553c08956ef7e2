use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60; // 1 hour

/// Claims carried by a session token: subject identity id, issuance time
/// and expiry, all verifiable offline by any holder of the signing secret.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs session tokens with a process-wide secret loaded once at startup.
/// The secret stays behind [`SecretString`] and is never logged or returned
/// to a client.
pub struct TokenIssuer {
    secret: SecretString,
    ttl_seconds: i64,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(secret: SecretString, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    /// Issue an HS256-signed token bound to `subject`, expiring at issuance
    /// time plus the configured TTL.
    ///
    /// # Errors
    /// Returns an error if signing fails.
    pub fn issue(&self, subject: Uuid) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());

        encode(&Header::default(), &claims, &key).context("failed to sign session token")
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    /// Returns an error if the signature does not match or the token has
    /// expired.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());

        let data = decode::<Claims>(token, &key, &Validation::default())
            .context("invalid session token")?;

        Ok(data.claims)
    }
}
