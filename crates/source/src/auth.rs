//! Authorization header construction

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Basic credentials for API token authentication
///
/// The upstream expects `"{email}/token:{api_token}"`, base64-encoded.
pub fn token_authorization(email: &str, api_token: &str) -> String {
    let credentials = format!("{}/token:{}", email, api_token);
    format!("Basic {}", STANDARD.encode(credentials))
}
