/**
 * JWT Tokens
 *
 * This module handles JWT creation and verification for authenticated
 * sessions.
 *
 * # Token Shape
 *
 * Tokens are HS256-signed and carry:
 * - `sub` - the user id, as a string
 * - `exp` - expiration, 6 hours after issuance
 * - `iat` - issuance time
 *
 * The signing secret is threaded in by the caller (it lives in
 * `AppConfig`), so this module holds no global state.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Tokens are short-lived: 6 hours.
const TOKEN_LIFETIME_SECS: u64 = 6 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed token for a verified user id.
///
/// # Arguments
/// * `user_id` - The authenticated user's id
/// * `secret` - The server signing secret
pub fn create_token(user_id: i64, secret: &[u8]) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_LIFETIME_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
}

/// Verify a token's signature and expiration, returning its claims.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
