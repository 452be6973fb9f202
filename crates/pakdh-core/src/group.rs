// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

//! Fixed safe-prime groups and the integer arithmetic performed over them.

use std::sync::LazyLock;

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, U1024, U384};
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

use crate::types::{EphemeralSecret, PakError, PakResult};

const MODP_1024_LIMBS: usize = U1024::LIMBS;

/// TIA-683-D 1024-bit safe prime.
const MODP_1024_MODULUS: U1024 = U1024::from_be_hex(concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E08",
    "8A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B",
    "302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9",
    "A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE6",
    "49286651ECE65381FFFFFFFFFFFFFFFF",
));
const MODP_1024_GENERATOR: U1024 = U1024::from_u8(0x13);

static MODP_1024: LazyLock<GroupParameters> =
    LazyLock::new(|| GroupParameters::new(GroupId::Modp1024, MODP_1024_MODULUS, MODP_1024_GENERATOR));

/// Selector for one of the registered groups, keyed by modulus bit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupId {
    /// 1024-bit TIA-683-D group with generator 0x13.
    #[default]
    Modp1024,
}

impl GroupId {
    /// Maps a modulus bit length onto a registered group.
    ///
    /// # Errors
    ///
    /// Returns [`PakError::InvalidConfiguration`] for any length without a
    /// registered group.
    pub fn from_bits(bits: u32) -> PakResult<Self> {
        match bits {
            1024 => Ok(GroupId::Modp1024),
            _ => Err(PakError::InvalidConfiguration),
        }
    }

    /// Bit length of this group's modulus.
    pub fn bits(self) -> u32 {
        match self {
            GroupId::Modp1024 => 1024,
        }
    }
}

/// Immutable parameters `(N, g)` of a registered group.
pub struct GroupParameters {
    id: GroupId,
    modulus: BigUint,
    generator: BigUint,
    generator_fixed: U1024,
    montgomery: DynResidueParams<MODP_1024_LIMBS>,
}

impl GroupParameters {
    fn new(id: GroupId, modulus: U1024, generator: U1024) -> Self {
        Self {
            id,
            modulus: BigUint::from_bytes_be(&modulus.to_be_bytes()),
            generator: BigUint::from_bytes_be(&generator.to_be_bytes()),
            generator_fixed: generator,
            montgomery: DynResidueParams::new(&modulus),
        }
    }

    /// Returns the process-wide parameters for `id`.
    pub fn get(id: GroupId) -> &'static GroupParameters {
        match id {
            GroupId::Modp1024 => &MODP_1024,
        }
    }

    /// Registry key of this group.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// The safe prime `N`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Computes `g^R mod N` for a secret exponent in constant time.
    pub fn pow_generator_secret(&self, secret: &EphemeralSecret) -> BigUint {
        let mut exponent = U384::from_be_slice(secret.as_bytes());
        let base = DynResidue::new(&self.generator_fixed, self.montgomery);
        let result = base.pow(&exponent).retrieve();
        exponent.zeroize();
        BigUint::from_bytes_be(&result.to_be_bytes())
    }

    /// Computes `g^e mod N` for a public exponent of any width.
    pub fn pow_generator(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.modulus)
    }
}

impl std::fmt::Debug for GroupParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupParameters")
            .field("id", &self.id)
            .field("modulus_bits", &self.modulus.bits())
            .field("generator", &self.generator)
            .finish()
    }
}

/// Exact integer product, no modular reduction.
pub fn multiply(a: &BigUint, b: &BigUint) -> BigUint {
    a * b
}

/// Integer quotient `dividend / divisor`.
///
/// This is plain division, not multiplication by a modular inverse: it undoes
/// a prior [`multiply`] exactly when `divisor` is the factor that was applied.
///
/// # Errors
///
/// Returns [`PakError::InternalInvariant`] if `divisor` is zero.
pub fn divide(dividend: &BigUint, divisor: &BigUint) -> PakResult<BigUint> {
    if divisor.is_zero() {
        return Err(PakError::InternalInvariant);
    }
    Ok(dividend / divisor)
}
