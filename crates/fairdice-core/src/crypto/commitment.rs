//! Keyed commitment for the commit-reveal scheme.

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Errors from commitment generation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("range must be positive")]
    InvalidRange,
}

/// Secret HMAC key, drawn fresh for every commitment
#[derive(Clone, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "hex_bytes")] [u8; 32]);

impl HmacKey {
    /// Draw a fresh random key
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Keyed digest binding a secret value: HMAC-SHA256(key, value)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(#[serde(with = "hex_bytes")] [u8; 32]);

impl Digest {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}

/// Compute HMAC-SHA256 over the fixed 4-byte big-endian encoding of `value`.
///
/// Generation and verification must share this encoding.
pub fn compute_digest(key: &HmacKey, value: u32) -> Digest {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(&value.to_be_bytes());
    Digest(mac.finalize().into_bytes().into())
}

/// Verify that the given key and value reproduce the digest.
///
/// Comparison is constant-time via the MAC's own verifier.
pub fn verify(key: &HmacKey, value: u32, digest: &Digest) -> bool {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(&value.to_be_bytes());
    mac.verify_slice(digest.as_bytes()).is_ok()
}

/// A committed secret: the digest can be published before the secret is.
///
/// The key and secret are disclosed exactly once, after the value they
/// influence has been fixed.
#[derive(Clone, Debug)]
pub struct Commitment {
    secret: u32,
    key: HmacKey,
    digest: Digest,
}

impl Commitment {
    /// Commit to a fresh uniform secret in `[0, range)`
    pub fn generate<R: RngCore + CryptoRng>(
        range: u32,
        rng: &mut R,
    ) -> Result<Self, CommitmentError> {
        if range == 0 {
            return Err(CommitmentError::InvalidRange);
        }
        let secret = sample_uniform(range, rng);
        Ok(Self::with_secret(secret, rng))
    }

    /// Commit to a specific secret with a fresh key
    pub fn with_secret<R: RngCore + CryptoRng>(secret: u32, rng: &mut R) -> Self {
        let key = HmacKey::random(rng);
        let digest = compute_digest(&key, secret);
        Self {
            secret,
            key,
            digest,
        }
    }

    /// The committed secret
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// The key binding the digest to the secret
    pub fn key(&self) -> &HmacKey {
        &self.key
    }

    /// The digest, safe to publish before the reveal
    pub fn digest(&self) -> &Digest {
        &self.digest
    }
}

/// Uniform draw over `[0, range)` by rejection sampling.
///
/// Draws at or above the largest multiple of `range` are redrawn; reducing
/// them modulo `range` would skew the distribution toward low values
/// whenever `range` does not divide `2^32`.
fn sample_uniform<R: RngCore + CryptoRng>(range: u32, rng: &mut R) -> u32 {
    debug_assert!(range > 0);
    let max_valid = (u32::MAX / range) * range;
    loop {
        let draw = rng.next_u32();
        if draw < max_valid {
            return draw % range;
        }
    }
}
