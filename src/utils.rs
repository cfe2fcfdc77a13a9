//! Rounding, color, encoding, and seeding helpers.

use hmac_sha256::Hash;

/// Rounds using JavaScript's `Math.round()` semantics.
///
/// JavaScript rounds -0.5 to 0 (toward positive infinity), while Rust rounds
/// -0.5 to -1 (away from zero). Boundary seed counts are rounded this way.
#[expect(clippy::float_cmp, reason = "checking for exact -0.5 boundary case")]
pub fn js_round(num: f64) -> f64 {
   let decimal_part = num - num.trunc();
   if decimal_part == -0.5 {
      num.ceil()
   } else {
      num.round()
   }
}

/// Formats a gray level as an `#rrggbb` color, clamping to `[0, 255]`.
#[cfg(feature = "svg")]
#[expect(
   clippy::cast_possible_truncation,
   reason = "value is clamped to a byte first"
)]
#[expect(clippy::cast_sign_loss, reason = "value is clamped to be non-negative")]
pub fn gray_hex(level: f64) -> String {
   let byte = if level.is_nan() {
      0
   } else {
      level.clamp(0.0, 255.0).round() as u8
   };
   format!("#{byte:02x}{byte:02x}{byte:02x}")
}

#[cfg(feature = "svg")]
pub fn base64_encode(data: &[u8]) -> String {
   data_encoding::BASE64.encode(data)
}

/// Derives an RNG seed from the first eight bytes of `SHA-256(phrase)`.
pub fn seed_from_phrase(phrase: &str) -> u64 {
   let digest = Hash::hash(phrase.as_bytes());
   let mut bytes = [0_u8; 8];
   bytes.copy_from_slice(&digest[..8]);
   u64::from_le_bytes(bytes)
}
