// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

//! Core library for the PAK-DH password-authenticated key exchange (RFC 5683).
//!
//! Two parties sharing a low-entropy password run a Diffie-Hellman exchange in
//! which each public value is multiplied by a password-derived blinding factor.
//! Only a party knowing the password can remove the factor, so matching
//! confirmation values S1/S2 and session key K authenticate both sides
//! implicitly.
//!
//! # Crate layout
//!
//! * [`types`] -- shared constants, error types, and secure containers.
//! * [`crypto`] -- libsodium wrappers: initialization, secure random, SHA-256.
//! * [`group`] -- the fixed safe-prime group registry and integer arithmetic.
//! * [`oracle`] -- the extended (H1, H2) and compact (H3, H4, H5) random oracles.
//! * [`exchange`] -- the stateless exchange computations over a [`exchange::ClientContext`].
//! * [`protocol`] -- hex wire encoding of exchanged values and messages.

/// libsodium-backed primitives.
pub mod crypto;
/// Stateless PAK-DH computations.
pub mod exchange;
/// Safe-prime group parameters and arithmetic.
pub mod group;
/// Random-oracle hash constructions.
pub mod oracle;
/// Wire encoding and message containers.
pub mod protocol;
/// Shared constants, error types, and secure containers.
pub mod types;
