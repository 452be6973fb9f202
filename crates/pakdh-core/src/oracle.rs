// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

//! Random-oracle constructions H1..H5 over SHA-256.
//!
//! * Extended oracle (H1, H2): `SHA256(t | i | z) mod 2^128` for `i = 1..=9`,
//!   concatenated big-endian into 1152 bits.
//! * Compact oracle (H3, H4, H5): `SHA256(t | len(z) | z | z) mod 2^128`.
//!
//! `t`, `i` and `len(z)` are ASCII decimal strings.

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto;
use crate::types::{
    constant_time_eq, PakError, PakResult, COMPACT_DIGEST_HEX_LENGTH, COMPACT_DIGEST_LENGTH,
    EXTENDED_DIGEST_LENGTH, EXTENDED_ORACLE_BLOCKS, SHA256_LENGTH,
};

/// Oracles whose output blinds a Diffie-Hellman public value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindingOracle {
    /// Blinds the initiator value `g^Ra`.
    H1,
    /// Blinds the responder value `g^Rb`.
    H2,
}

impl BlindingOracle {
    /// Domain-separation tag hashed ahead of each block.
    pub fn tag(self) -> u8 {
        match self {
            BlindingOracle::H1 => 1,
            BlindingOracle::H2 => 2,
        }
    }

    /// Evaluates the extended oracle under this tag.
    pub fn digest(self, message: &[u8]) -> PakResult<ExtendedDigest> {
        extended_oracle(self.tag(), message)
    }
}

/// Oracles deriving the confirmation values and the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOracle {
    /// Responder confirmation S1.
    H3,
    /// Initiator confirmation S2.
    H4,
    /// Session key K.
    H5,
}

impl ConfirmationOracle {
    /// Domain-separation tag hashed ahead of the length prefix.
    pub fn tag(self) -> u8 {
        match self {
            ConfirmationOracle::H3 => 3,
            ConfirmationOracle::H4 => 4,
            ConfirmationOracle::H5 => 5,
        }
    }

    /// Evaluates the compact oracle under this tag.
    pub fn digest(self, message: &[u8]) -> PakResult<CompactDigest> {
        compact_oracle(self.tag(), message)
    }
}

/// A 1152-bit extended oracle output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedDigest([u8; EXTENDED_DIGEST_LENGTH]);

impl ExtendedDigest {
    /// Big-endian concatenation of the nine truncated blocks.
    pub fn as_bytes(&self) -> &[u8; EXTENDED_DIGEST_LENGTH] {
        &self.0
    }

    /// Interprets the digest as a big-endian unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl std::fmt::Debug for ExtendedDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExtendedDigest([REDACTED; {}])", EXTENDED_DIGEST_LENGTH)
    }
}

/// A 128-bit compact oracle output: S1, S2 or K.
///
/// Equality is evaluated in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CompactDigest([u8; COMPACT_DIGEST_LENGTH]);

impl CompactDigest {
    /// Wraps raw digest bytes.
    pub fn from_bytes(bytes: [u8; COMPACT_DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The raw 16 digest bytes.
    pub fn as_bytes(&self) -> &[u8; COMPACT_DIGEST_LENGTH] {
        &self.0
    }

    /// Interprets the digest as a big-endian unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Fixed-width (32 character) lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses the fixed-width hex encoding produced by [`CompactDigest::to_hex`].
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidProtocolMessage`] if `encoded` is not exactly
    /// 32 hex characters.
    pub fn from_hex(encoded: &str) -> PakResult<Self> {
        if encoded.len() != COMPACT_DIGEST_HEX_LENGTH {
            return Err(PakError::InvalidProtocolMessage);
        }
        let mut bytes = [0u8; COMPACT_DIGEST_LENGTH];
        hex::decode_to_slice(encoded, &mut bytes).map_err(|_| PakError::InvalidProtocolMessage)?;
        Ok(Self(bytes))
    }
}

impl PartialEq for CompactDigest {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for CompactDigest {}

impl std::fmt::Debug for CompactDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompactDigest([REDACTED; {}])", COMPACT_DIGEST_LENGTH)
    }
}

/// Extended oracle: nine truncated SHA-256 blocks over `type | index | message`.
///
/// # Errors
///
/// Returns [`PakError::InternalInvariant`] if the assembled output is not
/// exactly 1152 bits wide.
pub fn extended_oracle(tag: u8, message: &[u8]) -> PakResult<ExtendedDigest> {
    let tag = tag.to_string();
    let mut output = Vec::with_capacity(EXTENDED_DIGEST_LENGTH);
    let mut digest = [0u8; SHA256_LENGTH];

    for block in 1..=EXTENDED_ORACLE_BLOCKS {
        let index = block.to_string();
        crypto::sha256_multi(&[tag.as_bytes(), index.as_bytes(), message], &mut digest);
        output.extend_from_slice(crypto::lower_128(&digest));
    }
    digest.zeroize();

    let result = <[u8; EXTENDED_DIGEST_LENGTH]>::try_from(output.as_slice())
        .map(ExtendedDigest)
        .map_err(|_| PakError::InternalInvariant);
    output.zeroize();
    result
}

/// Compact oracle: one truncated SHA-256 over `type | len(message) | message | message`.
///
/// # Errors
///
/// Returns [`PakError::InternalInvariant`] if the truncated output is not
/// exactly 128 bits wide.
pub fn compact_oracle(tag: u8, message: &[u8]) -> PakResult<CompactDigest> {
    let tag = tag.to_string();
    let length = message.len().to_string();
    let mut digest = [0u8; SHA256_LENGTH];
    crypto::sha256_multi(
        &[tag.as_bytes(), length.as_bytes(), message, message],
        &mut digest,
    );

    let result = <[u8; COMPACT_DIGEST_LENGTH]>::try_from(crypto::lower_128(&digest))
        .map(CompactDigest)
        .map_err(|_| PakError::InternalInvariant);
    digest.zeroize();
    result
}
