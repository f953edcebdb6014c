//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - HmacKey and Digest for the keyed commitment scheme
//! - Commitment generation with rejection-sampled uniform secrets
//! - Digest verification for independent audit

mod commitment;

pub use commitment::{compute_digest, verify, Commitment, CommitmentError, Digest, HmacKey};
