// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH Agent (Initiator)
// Licensed under the MIT License

//! PAK-DH initiator (party A).
//!
//! Sequences the three-message exchange from the initiator side: send X,
//! verify the responder's S1 and send S2, then release the session key K.

mod authentication;
mod state;

pub use authentication::{generate_confirm, generate_hello, initiator_finish};
pub use state::{InitiatorPhase, InitiatorState, PakInitiator};
