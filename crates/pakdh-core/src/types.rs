// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bit length of an ephemeral secret exponent (Ra / Rb).
pub const EPHEMERAL_EXPONENT_BITS: usize = 384;
/// Length of an ephemeral secret exponent in bytes.
pub const EPHEMERAL_EXPONENT_LENGTH: usize = EPHEMERAL_EXPONENT_BITS / 8;
/// Length of a SHA-256 digest in bytes.
pub const SHA256_LENGTH: usize = 32;
/// Length of the truncated (lower 128-bit) block kept from each digest.
pub const ORACLE_BLOCK_LENGTH: usize = 16;
/// Number of blocks concatenated by the extended oracle (H1, H2).
pub const EXTENDED_ORACLE_BLOCKS: usize = 9;
/// Length of an extended oracle output in bytes (1152 bits).
pub const EXTENDED_DIGEST_LENGTH: usize = EXTENDED_ORACLE_BLOCKS * ORACLE_BLOCK_LENGTH;
/// Length of a compact oracle output in bytes (128 bits).
pub const COMPACT_DIGEST_LENGTH: usize = ORACLE_BLOCK_LENGTH;
/// Length of the fixed-width hex encoding of a compact digest.
pub const COMPACT_DIGEST_HEX_LENGTH: usize = COMPACT_DIGEST_LENGTH * 2;
/// Length of a 1024-bit group modulus in bytes.
pub const MODULUS_1024_LENGTH: usize = 128;

const _: () = assert!(EPHEMERAL_EXPONENT_LENGTH == 48);
const _: () = assert!(ORACLE_BLOCK_LENGTH * 2 == SHA256_LENGTH);
const _: () = assert!(EXTENDED_DIGEST_LENGTH * 8 == 1152);
const _: () = assert!(COMPACT_DIGEST_LENGTH * 8 == 128);
const _: () = assert!(EXTENDED_DIGEST_LENGTH > MODULUS_1024_LENGTH);

/// Enumerates all error conditions that can arise during a PAK-DH exchange.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PakError {
    /// The password is empty or the group selector is not defined.
    #[error("invalid configuration")]
    InvalidConfiguration,
    /// A required argument is absent, empty, or zero.
    #[error("invalid input parameter")]
    InvalidInput,
    /// A received blinded value can never be produced by an honest peer.
    #[error("invalid exchange value")]
    InvalidExchangeValue,
    /// An oracle produced output of the wrong width or a zero blinding factor.
    #[error("internal invariant violated")]
    InternalInvariant,
    /// The secure random source or library initialization failed.
    #[error("cryptographic operation failed")]
    CryptoError,
    /// An encoded protocol value or message is malformed.
    #[error("protocol message has invalid format")]
    InvalidProtocolMessage,
    /// A peer confirmation value did not match the locally derived one.
    #[error("authentication failed")]
    AuthenticationError,
    /// A session operation was invoked in the wrong phase.
    #[error("validation failed")]
    ValidationError,
}

impl PakError {
    /// Converts this error variant into a negative `i32` status code suitable for C FFI.
    pub fn to_c_int(self) -> i32 {
        match self {
            PakError::InvalidInput => -1,
            PakError::CryptoError => -2,
            PakError::InvalidProtocolMessage => -3,
            PakError::ValidationError => -4,
            PakError::AuthenticationError => -5,
            PakError::InvalidConfiguration => -6,
            PakError::InvalidExchangeValue => -7,
            PakError::InternalInvariant => -8,
        }
    }
}

/// Convenience alias for `Result<T, PakError>`.
pub type PakResult<T> = Result<T, PakError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Holds the shared password for the lifetime of a client context.
/// The `Debug` implementation redacts the contents.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Returns an immutable reference to the underlying bytes.
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for SecureBytes {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// A 384-bit ephemeral Diffie-Hellman exponent (Ra or Rb), big-endian.
///
/// Owned by exactly one exchange. It is zeroized on drop, and session drivers
/// wipe it explicitly as soon as the exchange completes or aborts.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EphemeralSecret([u8; EPHEMERAL_EXPONENT_LENGTH]);

impl EphemeralSecret {
    pub(crate) fn from_bytes(bytes: [u8; EPHEMERAL_EXPONENT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the big-endian exponent bytes.
    pub fn as_bytes(&self) -> &[u8; EPHEMERAL_EXPONENT_LENGTH] {
        &self.0
    }

    /// Position of the highest set bit plus one; always
    /// [`EPHEMERAL_EXPONENT_BITS`] for secrets drawn by [`crate::crypto::random_exponent`].
    pub fn bits(&self) -> usize {
        match self.0.iter().position(|&b| b != 0) {
            Some(i) => (EPHEMERAL_EXPONENT_LENGTH - i) * 8 - self.0[i].leading_zeros() as usize,
            None => 0,
        }
    }
}

impl std::fmt::Debug for EphemeralSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EphemeralSecret([REDACTED])")
    }
}

/// Compares two byte slices in constant time using libsodium's `sodium_memcmp`.
///
/// Returns `true` if the slices are equal, `false` otherwise. If the lengths
/// differ, returns `false` immediately (length itself is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // SAFETY: Both pointers come from valid slices. Length equality is verified before the call.
    unsafe {
        libsodium_sys::sodium_memcmp(
            a.as_ptr() as *const _,
            b.as_ptr() as *const _,
            a.len(),
        ) == 0
    }
}

/// Returns `true` if every byte in `data` is zero, checked in constant time.
pub fn is_all_zero(data: &[u8]) -> bool {
    // SAFETY: Pointer comes from a valid slice.
    unsafe { libsodium_sys::sodium_is_zero(data.as_ptr(), data.len()) == 1 }
}
