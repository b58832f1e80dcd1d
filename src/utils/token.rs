//! API token generation and hashing.
//!
//! Raw tokens are handed to users once and never stored. The database keeps
//! an HMAC-SHA256 of the token keyed by `TOKEN_SIGNING_SECRET`, so a leaked
//! table cannot be used to forge or check tokens without the secret.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Random bytes per token before base64 encoding (256 bits).
const TOKEN_LENGTH_BYTES: usize = 32;

/// Generates a random API token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 43-character token.
///
/// # Errors
///
/// Returns an error if the system random number generator fails.
pub fn generate_token() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Hashes a raw token with HMAC-SHA256 using the server signing secret.
///
/// Returns a 64-character lowercase hex-encoded MAC.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
