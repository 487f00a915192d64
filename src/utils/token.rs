use crate::models::user::{Claims, TokenUser};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// How long a login token stays valid.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Signing and verification keys, derived once from `JWT_SECRET`.
///
/// Lives in `AppState` so handlers and the auth extractor never read the
/// environment themselves.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    pub fn issue(&self, user: TokenUser) -> jsonwebtoken::errors::Result<String> {
        self.issue_at(user, chrono::Utc::now().timestamp())
    }

    /// Signs a token as if it were issued at `now` (unix seconds).
    pub fn issue_at(&self, user: TokenUser, now: i64) -> jsonwebtoken::errors::Result<String> {
        let claims = Claims {
            user,
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Option<TokenUser> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Checks signature and expiry against `now`. `None` covers every failure:
    /// bad signature, garbage input, expired.
    ///
    /// Expiry is checked here with zero leeway instead of by the library, so a token
    /// is good strictly before `exp` and dead from `exp` on.
    pub fn verify_at(&self, token: &str, now: i64) -> Option<TokenUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).ok()?;
        if now >= data.claims.exp {
            return None;
        }

        Some(data.claims.user)
    }
}
