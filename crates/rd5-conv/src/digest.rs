//! Login digest
//!
//! The handshake submits an MD5 digest instead of the password itself.
//! MD5 here is a wire-format requirement of the device, not a security
//! measure.

use md5::{Digest, Md5};

/// Bytes hashed ahead of the password, exactly as the device's web
/// front-end builds its `magic` value.
const MAGIC_PREFIX: &[u8] = b"\r\n";

/// Compute the `magic` login digest: lowercase-hex MD5 over CR LF
/// followed by the password bytes.
pub fn login_magic(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(MAGIC_PREFIX);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
