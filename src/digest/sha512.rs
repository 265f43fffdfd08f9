use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha512};

/// Computes the SHA-512 digest of `password` and encodes the 64-byte result
/// using standard base64 (with padding).
///
/// Deterministic: the same input always yields the same 88-character string.
pub fn sha512_base64(password: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password);
    STANDARD.encode(hasher.finalize())
}
