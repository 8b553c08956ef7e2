//! Registration and authentication flows.
//!
//! Both flows are single-attempt and terminal within one request. No
//! retries, no multi-step transactions, no shared mutable state between
//! requests.

use crate::auth::error::AuthError;
use crate::auth::password;
use crate::auth::store::{Identity, UserStore};
use crate::auth::token::TokenIssuer;
use crate::auth::validate::{normalize_email, validate_login, validate_registration};
use tracing::debug;
use uuid::Uuid;

pub struct Registered {
    pub user_id: Uuid,
}

pub struct Session {
    pub token: String,
    pub user_id: Uuid,
}

/// Register a new identity: validate, check uniqueness, hash, persist.
///
/// A duplicate email fails before any hash is computed. No session is
/// issued at registration.
///
/// # Errors
/// `Validation` on malformed input, `UserExists` on a duplicate email,
/// `Internal` on store or hashing failure.
pub async fn register(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<Registered, AuthError> {
    let errors = validate_registration(email, password);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    let email = normalize_email(email);

    if store.find_by_email(&email).await?.is_some() {
        return Err(AuthError::UserExists);
    }

    let password_hash = password::hash_password(password)?;

    let identity = Identity {
        id: Uuid::now_v7(),
        email,
        password_hash,
    };

    store.insert(&identity).await?;

    debug!("registered user {}", identity.id);

    Ok(Registered {
        user_id: identity.id,
    })
}

/// Authenticate an identity and issue a session token bound to its id.
///
/// # Errors
/// `Validation` on malformed input, `UserNotFound` for an unknown email,
/// `InvalidCredentials` on a password mismatch, `Internal` on store,
/// hash-parsing or signing failure.
pub async fn authenticate(
    store: &dyn UserStore,
    issuer: &TokenIssuer,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let errors = validate_login(email, password);
    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    let email = normalize_email(email);

    let Some(identity) = store.find_by_email(&email).await? else {
        return Err(AuthError::UserNotFound);
    };

    if !password::verify_password(password, &identity.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    let token = issuer.issue(identity.id)?;

    debug!("issued session token for user {}", identity.id);

    Ok(Session {
        token,
        user_id: identity.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryUserStore;
    use crate::auth::token::DEFAULT_TOKEN_TTL_SECONDS;
    use secrecy::SecretString;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(
            SecretString::from("test-secret".to_string()),
            DEFAULT_TOKEN_TTL_SECONDS,
        )
    }

    #[tokio::test]
    async fn register_twice_yields_success_then_conflict() {
        let store = MemoryUserStore::new();

        assert!(register(&store, "a@b.com", "secret1").await.is_ok());

        let second = register(&store, "a@b.com", "secret1").await;
        assert!(matches!(second, Err(AuthError::UserExists)));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_check_is_case_insensitive() {
        let store = MemoryUserStore::new();

        register(&store, "a@b.com", "secret1").await.unwrap();

        let second = register(&store, " A@B.COM ", "secret1").await;
        assert!(matches!(second, Err(AuthError::UserExists)));
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_store_access() {
        let store = MemoryUserStore::new();

        let result = register(&store, "a@b.com", "five5").await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let store = MemoryUserStore::new();

        let result = register(&store, "not-an-email", "secret1").await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn authenticate_returns_token_bound_to_identity() {
        let store = MemoryUserStore::new();
        let issuer = issuer();

        let registered = register(&store, "a@b.com", "secret1").await.unwrap();
        let session = authenticate(&store, &issuer, "a@b.com", "secret1")
            .await
            .unwrap();

        assert_eq!(session.user_id, registered.user_id);

        let claims = issuer.verify(&session.token).unwrap();
        assert_eq!(claims.sub, registered.user_id.to_string());
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_SECONDS);
    }

    #[tokio::test]
    async fn authenticate_normalizes_email_before_lookup() {
        let store = MemoryUserStore::new();
        let issuer = issuer();

        register(&store, "Alice@Example.COM", "secret1")
            .await
            .unwrap();

        let session = authenticate(&store, &issuer, " alice@example.com ", "secret1").await;
        assert!(session.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_never_authenticates() {
        let store = MemoryUserStore::new();
        let issuer = issuer();

        register(&store, "a@b.com", "secret1").await.unwrap();

        let result = authenticate(&store, &issuer, "a@b.com", "wrong1").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let store = MemoryUserStore::new();
        let issuer = issuer();

        let result = authenticate(&store, &issuer, "ghost@b.com", "secret1").await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    // Full scenario: register, duplicate register, bad login, good login.
    #[tokio::test]
    async fn registration_and_login_scenario() {
        let store = MemoryUserStore::new();
        let issuer = issuer();

        let created = register(&store, "a@b.com", "secret1").await.unwrap();

        assert!(matches!(
            register(&store, "a@b.com", "secret1").await,
            Err(AuthError::UserExists)
        ));

        assert!(matches!(
            authenticate(&store, &issuer, "a@b.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));

        let session = authenticate(&store, &issuer, "a@b.com", "secret1")
            .await
            .unwrap();
        assert_eq!(session.user_id, created.user_id);
        assert!(!session.token.is_empty());
    }
}
