// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH Relay (Responder)
// Licensed under the MIT License

//! PAK-DH responder (party B).
//!
//! Recovers the initiator's `g^Ra` from X, answers with Y and S1, and
//! releases the session key K once the initiator's S2 verifies.

/// Key exchange flow for the responder.
mod authentication;
/// Protocol state types used by the responder.
mod state;

pub use authentication::{generate_reply, responder_finish};
pub use state::{PakResponder, ResponderPhase, ResponderState};
