//! Credential verification and session issuance.
//!
//! Registration turns a plaintext password into a salted Argon2id hash and
//! persists a new identity record; authentication verifies a password against
//! the stored hash and answers with a signed, time-bound session token.

pub mod error;
pub mod flows;
pub mod password;
pub mod store;
pub mod token;
pub mod validate;

pub use self::error::{AuthError, FieldError};
pub use self::store::{Identity, PgUserStore, UserStore};
pub use self::token::TokenIssuer;
