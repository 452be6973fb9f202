// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

//! Stateless PAK-DH computations bound to one password and group.
//!
//! Identities are always passed in protocol order: the initiator (A) first,
//! the responder (B) second, on both sides of the exchange.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::crypto;
use crate::group::{self, GroupId, GroupParameters};
use crate::oracle::{BlindingOracle, CompactDigest, ConfirmationOracle};
use crate::types::{
    EphemeralSecret, PakError, PakResult, SecureBytes, EXTENDED_DIGEST_LENGTH, MODULUS_1024_LENGTH,
};

/// Widest value an honest party can send: a 1152-bit factor times a 1024-bit element.
const MAX_BLINDED_BITS: u64 = ((EXTENDED_DIGEST_LENGTH + MODULUS_1024_LENGTH) * 8) as u64;

/// A freshly drawn exponent `R` and its public value `g^R mod N`.
///
/// The caller owns `secret` for the lifetime of one exchange.
#[derive(Debug)]
pub struct EphemeralKeyPair {
    pub secret: EphemeralSecret,
    pub public: BigUint,
}

/// A password bound to a group. Immutable and shareable across threads.
pub struct ClientContext {
    password: SecureBytes,
    group: &'static GroupParameters,
}

impl ClientContext {
    /// Creates a context for `password` over the registered group `group`.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidConfiguration`] if `password` is empty.
    pub fn new(password: &[u8], group: GroupId) -> PakResult<Self> {
        if password.is_empty() {
            return Err(PakError::InvalidConfiguration);
        }
        Ok(Self {
            password: SecureBytes::from_slice(password),
            group: GroupParameters::get(group),
        })
    }

    /// Creates a context selecting the group by modulus bit length.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidConfiguration`] if `password` is empty or no
    /// group of `bits` bits is registered.
    pub fn with_group_bits(password: &[u8], bits: u32) -> PakResult<Self> {
        Self::new(password, GroupId::from_bits(bits)?)
    }

    pub fn group(&self) -> &'static GroupParameters {
        self.group
    }

    /// Draws a fresh 384-bit exponent `R` and returns it with `g^R mod N`.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::CryptoError`] if the random source is unavailable.
    pub fn generate_ephemeral(&self) -> PakResult<EphemeralKeyPair> {
        let secret = crypto::random_exponent()?;
        let public = self.group.pow_generator_secret(&secret);
        Ok(EphemeralKeyPair { secret, public })
    }

    /// Computes the wire value `oracle(A | B | PW) * public_value`.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if an identity is empty or
    /// `public_value` is zero.
    pub fn compute_blinded(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        public_value: &BigUint,
        oracle: BlindingOracle,
    ) -> PakResult<BigUint> {
        validate_identities(initiator_id, responder_id)?;
        validate_value(public_value)?;

        let factor = self.blinding_factor(initiator_id, responder_id, oracle)?;
        Ok(group::multiply(&factor, public_value))
    }

    /// Removes the blinding factor from a received value: `received / oracle(A | B | PW)`.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if an identity is empty.
    /// Returns [`PakError::InvalidExchangeValue`] if `received` is zero, wider
    /// than any honest blinded value, or recovers to zero.
    pub fn recover_peer_public(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        received: &BigUint,
        oracle: BlindingOracle,
    ) -> PakResult<BigUint> {
        validate_identities(initiator_id, responder_id)?;
        if received.is_zero() || received.bits() > MAX_BLINDED_BITS {
            return Err(PakError::InvalidExchangeValue);
        }

        let factor = self.blinding_factor(initiator_id, responder_id, oracle)?;
        let recovered = group::divide(received, &factor)?;
        if recovered.is_zero() {
            return Err(PakError::InvalidExchangeValue);
        }
        Ok(recovered)
    }

    /// S1 = H3(A | B | PW | hex(g^Ra) | hex(g^Rb) | hex(AB)).
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if an identity is empty or a public
    /// value is zero.
    pub fn compute_confirmation1(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        g_ra: &BigUint,
        g_rb: &BigUint,
    ) -> PakResult<CompactDigest> {
        validate_identities(initiator_id, responder_id)?;
        self.derive(ConfirmationOracle::H3, Some((initiator_id, responder_id)), g_ra, g_rb)
    }

    /// S2 = H4(A | B | PW | hex(g^Ra) | hex(g^Rb) | hex(AB)).
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if an identity is empty or a public
    /// value is zero.
    pub fn compute_confirmation2(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        g_ra: &BigUint,
        g_rb: &BigUint,
    ) -> PakResult<CompactDigest> {
        validate_identities(initiator_id, responder_id)?;
        self.derive(ConfirmationOracle::H4, Some((initiator_id, responder_id)), g_ra, g_rb)
    }

    /// K = H5(PW | hex(g^Ra) | hex(g^Rb) | hex(AB)).
    ///
    /// Identities are validated but, unlike S1 and S2, not hashed.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if an identity is empty or a public
    /// value is zero.
    pub fn compute_session_key(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        g_ra: &BigUint,
        g_rb: &BigUint,
    ) -> PakResult<CompactDigest> {
        validate_identities(initiator_id, responder_id)?;
        self.derive(ConfirmationOracle::H5, None, g_ra, g_rb)
    }

    /// AB = g^(g^Ra * g^Rb) mod N.
    pub fn combine(&self, g_ra: &BigUint, g_rb: &BigUint) -> BigUint {
        self.group.pow_generator(&group::multiply(g_ra, g_rb))
    }

    fn blinding_factor(
        &self,
        initiator_id: &[u8],
        responder_id: &[u8],
        oracle: BlindingOracle,
    ) -> PakResult<BigUint> {
        let mut message =
            Vec::with_capacity(initiator_id.len() + responder_id.len() + self.password.len());
        message.extend_from_slice(initiator_id);
        message.extend_from_slice(responder_id);
        message.extend_from_slice(&self.password);

        let digest = oracle.digest(&message);
        message.zeroize();

        let factor = digest?.to_biguint();
        if factor.is_zero() {
            return Err(PakError::InternalInvariant);
        }
        Ok(factor)
    }

    fn derive(
        &self,
        oracle: ConfirmationOracle,
        identities: Option<(&[u8], &[u8])>,
        g_ra: &BigUint,
        g_rb: &BigUint,
    ) -> PakResult<CompactDigest> {
        validate_value(g_ra)?;
        validate_value(g_rb)?;

        let ab = self.combine(g_ra, g_rb);
        let g_ra_hex = g_ra.to_str_radix(16);
        let g_rb_hex = g_rb.to_str_radix(16);
        let ab_hex = ab.to_str_radix(16);

        let identities_len = identities.map_or(0, |(a, b)| a.len() + b.len());
        let mut message = Vec::with_capacity(
            identities_len + self.password.len() + g_ra_hex.len() + g_rb_hex.len() + ab_hex.len(),
        );
        if let Some((initiator_id, responder_id)) = identities {
            message.extend_from_slice(initiator_id);
            message.extend_from_slice(responder_id);
        }
        message.extend_from_slice(&self.password);
        message.extend_from_slice(g_ra_hex.as_bytes());
        message.extend_from_slice(g_rb_hex.as_bytes());
        message.extend_from_slice(ab_hex.as_bytes());

        let result = oracle.digest(&message);
        message.zeroize();
        result
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("password", &self.password)
            .field("group", &self.group.id())
            .finish()
    }
}

fn validate_identities(initiator_id: &[u8], responder_id: &[u8]) -> PakResult<()> {
    if initiator_id.is_empty() || responder_id.is_empty() {
        return Err(PakError::InvalidInput);
    }
    Ok(())
}

fn validate_value(value: &BigUint) -> PakResult<()> {
    if value.is_zero() {
        return Err(PakError::InvalidInput);
    }
    Ok(())
}
