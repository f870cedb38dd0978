//! Deterministic byte-stream derivation.

mod pbkdf2;

pub use pbkdf2::pbkdf2_hmac_sha256;

/// Source of the pseudorandom bytes the packing loop consumes.
///
/// Implementations must be deterministic: identical inputs yield identical
/// streams. The retry controller varies `rounds` through the version
/// counter to obtain a fresh stream after a failed attempt.
pub trait ByteSource {
    fn derive(&self, password: &[u8], salt: &[u8], rounds: u32, size: usize) -> Vec<u8>;
}

/// Default source: PBKDF2 with HMAC-SHA-256 as the PRF.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pbkdf2Sha256;

impl ByteSource for Pbkdf2Sha256 {
    fn derive(&self, password: &[u8], salt: &[u8], rounds: u32, size: usize) -> Vec<u8> {
        let mut out = vec![0u8; size];
        pbkdf2_hmac_sha256(password, salt, rounds.max(1), &mut out);
        out
    }
}
