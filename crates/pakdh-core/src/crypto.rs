// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use std::sync::OnceLock;

use crate::types::{
    EphemeralSecret, PakError, PakResult, EPHEMERAL_EXPONENT_LENGTH, ORACLE_BLOCK_LENGTH,
    SHA256_LENGTH,
};
use zeroize::Zeroize;

static SODIUM_STATUS: OnceLock<i32> = OnceLock::new();

/// Initializes libsodium once per process.
///
/// Safe to call any number of times from any thread; only the first call
/// reaches `sodium_init`.
///
/// # Errors
///
/// Returns [`PakError::CryptoError`] if libsodium could not be initialized
/// (for example when no entropy source is available).
pub fn init() -> PakResult<()> {
    // SAFETY: sodium_init is thread-safe and idempotent.
    let status = *SODIUM_STATUS.get_or_init(|| unsafe { libsodium_sys::sodium_init() });
    if status < 0 {
        return Err(PakError::CryptoError);
    }
    Ok(())
}

/// Fills `buf` with cryptographically secure random bytes.
///
/// # Errors
///
/// Returns [`PakError::InvalidInput`] if `buf` is empty.
/// Returns [`PakError::CryptoError`] if libsodium cannot be initialized.
pub fn random_bytes(buf: &mut [u8]) -> PakResult<()> {
    if buf.is_empty() {
        return Err(PakError::InvalidInput);
    }
    init()?;
    // SAFETY: buf is a valid mutable slice; length matches buf.len().
    unsafe {
        libsodium_sys::randombytes_buf(buf.as_mut_ptr() as *mut _, buf.len());
    }
    Ok(())
}

/// Draws a fresh 384-bit ephemeral exponent.
///
/// The most significant bit is forced on so the exponent is exactly
/// 384 bits long.
///
/// # Errors
///
/// Returns [`PakError::CryptoError`] if the random source is unavailable.
pub fn random_exponent() -> PakResult<EphemeralSecret> {
    let mut bytes = [0u8; EPHEMERAL_EXPONENT_LENGTH];
    random_bytes(&mut bytes)?;
    bytes[0] |= 0x80;
    let secret = EphemeralSecret::from_bytes(bytes);
    bytes.zeroize();
    Ok(secret)
}

/// Computes the SHA-256 digest of `input`.
pub fn sha256(input: &[u8], out: &mut [u8; SHA256_LENGTH]) {
    // SAFETY: Output is a 32-byte array, input is a valid slice. Length is cast from usize.
    unsafe {
        libsodium_sys::crypto_hash_sha256(out.as_mut_ptr(), input.as_ptr(), input.len() as u64);
    }
}

/// Computes the SHA-256 digest of the concatenation of all `parts`.
///
/// Uses the streaming SHA-256 API to avoid allocating a contiguous buffer.
pub fn sha256_multi(parts: &[&[u8]], out: &mut [u8; SHA256_LENGTH]) {
    // SAFETY: State is initialized by _init before use. Subsequent _update and _final
    // calls use the initialized state pointer. State is scrubbed afterwards since
    // the absorbed input may contain the password.
    unsafe {
        let mut state =
            std::mem::MaybeUninit::<libsodium_sys::crypto_hash_sha256_state>::uninit();
        let state_ptr = state.as_mut_ptr();
        libsodium_sys::crypto_hash_sha256_init(state_ptr);
        for part in parts {
            libsodium_sys::crypto_hash_sha256_update(
                state_ptr,
                part.as_ptr(),
                part.len() as u64,
            );
        }
        libsodium_sys::crypto_hash_sha256_final(state_ptr, out.as_mut_ptr());
        libsodium_sys::sodium_memzero(
            state_ptr as *mut _,
            std::mem::size_of::<libsodium_sys::crypto_hash_sha256_state>(),
        );
    }
}

/// Returns the lower 128 bits (the trailing 16 bytes) of a big-endian digest.
pub fn lower_128(digest: &[u8; SHA256_LENGTH]) -> &[u8] {
    &digest[SHA256_LENGTH - ORACLE_BLOCK_LENGTH..]
}
