//! Checkout signature helpers.
//!
//! Razorpay signs a completed checkout as
//! `hex(HMAC-SHA256(key_secret, "{order_id}|{payment_id}"))`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected checkout signature for an order/payment pair.
pub fn compute_signature(key_secret: &str, order_id: &str, payment_id: &str) -> String {
    hex::encode(hmac_sha256(key_secret, &format!("{order_id}|{payment_id}")))
}

/// Check a client-supplied signature in constant time.
///
/// Anything that is not valid hex fails without touching the MAC.
pub fn verify_signature(key_secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Some(provided) = hex::decode(signature.trim()) else {
        return false;
    };
    let mut mac = new_mac(key_secret);
    mac.update(format!("{order_id}|{payment_id}").as_bytes());
    mac.verify_slice(&provided).is_ok()
}

fn hmac_sha256(key: &str, message: &str) -> Vec<u8> {
    let mut mac = new_mac(key);
    mac.update(message.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

fn new_mac(key: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length")
}

// ---------------------------------------------------------------------------
// hex helpers (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes
            .as_ref()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Decode a hex string (either case). `None` on odd length or a non-hex
    /// digit.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        s.as_bytes()
            .chunks(2)
            .map(|pair| {
                let hi = (pair[0] as char).to_digit(16)?;
                let lo = (pair[1] as char).to_digit(16)?;
                Some((hi * 16 + lo) as u8)
            })
            .collect()
    }
}
