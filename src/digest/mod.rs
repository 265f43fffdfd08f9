//! Digest Module
//!
//! Pure password hashing: SHA-512 over the raw password bytes, encoded as a
//! standard padded base64 string. No state, no error conditions.

pub mod sha512;
