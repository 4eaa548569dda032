use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Computes the Cognito `SecretHash` parameter for the given username:
/// `Base64(HMAC-SHA256(client_secret, username + client_id))`.
pub fn secret_hash(client_secret: &str, client_id: &str, username: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(client_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());
    base64::encode(mac.finalize().into_bytes())
}
