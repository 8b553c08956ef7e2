use secrecy::SecretString;

use crate::auth::token::DEFAULT_TOKEN_TTL_SECONDS;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub secret: SecretString,
    pub token_ttl: i64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            token_ttl: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    pub fn set_token_ttl(&mut self, ttl: i64) {
        self.token_ttl = ttl;
    }
}
