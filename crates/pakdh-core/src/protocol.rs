// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use num_bigint::BigUint;

use crate::oracle::CompactDigest;
use crate::types::{
    PakError, PakResult, COMPACT_DIGEST_HEX_LENGTH, EXTENDED_DIGEST_LENGTH, MODULUS_1024_LENGTH,
};

const FIELD_SEPARATOR: char = ':';

/// Upper bound on the hex length of a blinded value: a 1152-bit factor times a
/// 1024-bit group element.
pub const MAX_BLINDED_HEX_LENGTH: usize = (EXTENDED_DIGEST_LENGTH + MODULUS_1024_LENGTH) * 2;
/// Upper bound on the encoded length of an [`InitiatorHello`].
pub const MAX_HELLO_LENGTH: usize = MAX_BLINDED_HEX_LENGTH;
/// Upper bound on the encoded length of a [`ResponderReply`].
pub const MAX_REPLY_LENGTH: usize = MAX_BLINDED_HEX_LENGTH + 1 + COMPACT_DIGEST_HEX_LENGTH;
/// Exact encoded length of an [`InitiatorConfirm`].
pub const CONFIRM_LENGTH: usize = COMPACT_DIGEST_HEX_LENGTH;

/// Big-endian lowercase hex without leading zeros.
pub fn encode_value(value: &BigUint) -> String {
    value.to_str_radix(16)
}

/// Parses a big-endian hex integer (either case).
///
/// # Errors
///
/// Returns [`PakError::InvalidProtocolMessage`] if `encoded` is empty or
/// contains anything other than hex digits.
pub fn decode_value(encoded: &str) -> PakResult<BigUint> {
    if encoded.is_empty() || !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PakError::InvalidProtocolMessage);
    }
    BigUint::parse_bytes(encoded.as_bytes(), 16).ok_or(PakError::InvalidProtocolMessage)
}

fn decode_blinded(encoded: &str) -> PakResult<BigUint> {
    if encoded.len() > MAX_BLINDED_HEX_LENGTH {
        return Err(PakError::InvalidProtocolMessage);
    }
    decode_value(encoded)
}

/// First message, initiator to responder: `X = H1(A | B | PW) * g^Ra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorHello {
    pub x: BigUint,
}

impl InitiatorHello {
    pub fn to_wire(&self) -> String {
        encode_value(&self.x)
    }

    /// # Errors
    ///
    /// Returns [`PakError::InvalidProtocolMessage`] if `data` is not hex or is
    /// longer than [`MAX_HELLO_LENGTH`].
    pub fn from_wire(data: &str) -> PakResult<Self> {
        if data.len() > MAX_HELLO_LENGTH {
            return Err(PakError::InvalidProtocolMessage);
        }
        Ok(Self {
            x: decode_blinded(data)?,
        })
    }
}

/// Second message, responder to initiator: `Y = H2(A | B | PW) * g^Rb` and S1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderReply {
    pub y: BigUint,
    pub s1: CompactDigest,
}

impl ResponderReply {
    /// Encodes as `hex(Y):hex(S1)`.
    pub fn to_wire(&self) -> String {
        format!("{}{}{}", encode_value(&self.y), FIELD_SEPARATOR, self.s1.to_hex())
    }

    /// # Errors
    ///
    /// Returns [`PakError::InvalidProtocolMessage`] if a field is malformed or
    /// `data` is longer than [`MAX_REPLY_LENGTH`].
    pub fn from_wire(data: &str) -> PakResult<Self> {
        if data.len() > MAX_REPLY_LENGTH {
            return Err(PakError::InvalidProtocolMessage);
        }
        let (y, s1) = data
            .split_once(FIELD_SEPARATOR)
            .ok_or(PakError::InvalidProtocolMessage)?;
        Ok(Self {
            y: decode_blinded(y)?,
            s1: CompactDigest::from_hex(s1)?,
        })
    }
}

/// Third message, initiator to responder: S2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatorConfirm {
    pub s2: CompactDigest,
}

impl InitiatorConfirm {
    pub fn to_wire(&self) -> String {
        self.s2.to_hex()
    }

    pub fn from_wire(data: &str) -> PakResult<Self> {
        Ok(Self {
            s2: CompactDigest::from_hex(data)?,
        })
    }
}
