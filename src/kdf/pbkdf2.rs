//! PBKDF2-HMAC-SHA-256 (RFC 2898).

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

const HASH_LEN: usize = 32;

/// Fill `out` with PBKDF2-HMAC-SHA-256 output.
///
/// `rounds` must be at least 1.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
    assert!(rounds >= 1, "PBKDF2 requires at least one round");

    for (block, chunk) in out.chunks_mut(HASH_LEN).enumerate() {
        // Block indices are 1-based in the RFC.
        let index = (block as u32 + 1).to_be_bytes();

        let mut mac = prf(password);
        mac.update(salt);
        mac.update(&index);
        let mut u: [u8; HASH_LEN] = mac.finalize().into_bytes().into();

        let mut acc = u;
        for _ in 1..rounds {
            let mut mac = prf(password);
            mac.update(&u);
            u = mac.finalize().into_bytes().into();
            for (a, b) in acc.iter_mut().zip(&u) {
                *a ^= b;
            }
        }

        chunk.copy_from_slice(&acc[..chunk.len()]);
        u.zeroize();
        acc.zeroize();
    }
}

fn prf(password: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(password).expect("HMAC accepts keys of any length")
}
