// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use num_bigint::BigUint;
use pakdh_core::exchange::ClientContext;
use pakdh_core::oracle::CompactDigest;
use pakdh_core::types::{EphemeralSecret, PakError, PakResult};
use zeroize::Zeroize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiatorPhase {
    Created,
    HelloSent,
    Confirmed,
    Finished,
    Aborted,
}

/// Per-exchange initiator state. Holds Ra until the exchange completes.
#[derive(Debug)]
pub struct InitiatorState {
    pub(crate) phase: InitiatorPhase,
    pub(crate) ephemeral_secret: Option<EphemeralSecret>,
    pub(crate) initiator_public: Option<BigUint>,
    pub(crate) session_key: Option<CompactDigest>,
}

impl InitiatorState {
    pub fn new() -> Self {
        Self {
            phase: InitiatorPhase::Created,
            ephemeral_secret: None,
            initiator_public: None,
            session_key: None,
        }
    }

    pub fn phase(&self) -> InitiatorPhase {
        self.phase
    }

    /// Whether the ephemeral exponent is still held.
    pub fn holds_ephemeral(&self) -> bool {
        self.ephemeral_secret.is_some()
    }

    pub(crate) fn erase_ephemeral(&mut self) {
        if let Some(mut secret) = self.ephemeral_secret.take() {
            secret.zeroize();
        }
    }

    pub(crate) fn abort(&mut self) {
        self.erase_ephemeral();
        self.initiator_public = None;
        self.session_key = None;
        self.phase = InitiatorPhase::Aborted;
    }
}

impl Default for InitiatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Party A: a client context plus the ordered identity pair of the exchange.
#[derive(Debug)]
pub struct PakInitiator {
    context: ClientContext,
    initiator_id: Vec<u8>,
    responder_id: Vec<u8>,
}

impl PakInitiator {
    /// # Errors
    ///
    /// Returns [`PakError::InvalidInput`] if either identity is empty.
    pub fn new(context: ClientContext, initiator_id: &[u8], responder_id: &[u8]) -> PakResult<Self> {
        if initiator_id.is_empty() || responder_id.is_empty() {
            return Err(PakError::InvalidInput);
        }
        Ok(Self {
            context,
            initiator_id: initiator_id.to_vec(),
            responder_id: responder_id.to_vec(),
        })
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    pub fn initiator_id(&self) -> &[u8] {
        &self.initiator_id
    }

    pub fn responder_id(&self) -> &[u8] {
        &self.responder_id
    }
}
