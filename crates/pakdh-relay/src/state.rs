// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use pakdh_core::exchange::ClientContext;
use pakdh_core::oracle::CompactDigest;
use pakdh_core::types::{EphemeralSecret, PakError, PakResult};
use zeroize::Zeroize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderPhase {
    Created,
    ReplySent,
    Finished,
    Aborted,
}

/// Per-exchange responder state. Holds Rb, the expected S2 and K.
#[derive(Debug)]
pub struct ResponderState {
    pub(crate) phase: ResponderPhase,
    pub(crate) ephemeral_secret: Option<EphemeralSecret>,
    pub(crate) expected_confirmation: Option<CompactDigest>,
    pub(crate) session_key: Option<CompactDigest>,
}

impl ResponderState {
    pub fn new() -> Self {
        Self {
            phase: ResponderPhase::Created,
            ephemeral_secret: None,
            expected_confirmation: None,
            session_key: None,
        }
    }

    pub fn phase(&self) -> ResponderPhase {
        self.phase
    }

    /// Whether the ephemeral exponent is still held.
    pub fn holds_ephemeral(&self) -> bool {
        self.ephemeral_secret.is_some()
    }

    pub(crate) fn wipe(&mut self) {
        if let Some(mut secret) = self.ephemeral_secret.take() {
            secret.zeroize();
        }
        if let Some(mut expected) = self.expected_confirmation.take() {
            expected.zeroize();
        }
        if let Some(mut key) = self.session_key.take() {
            key.zeroize();
        }
    }
}

impl Default for ResponderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Party B: a client context plus the ordered identity pair of the exchange.
#[derive(Debug)]
pub struct PakResponder {
    context: ClientContext,
    initiator_id: Vec<u8>,
    responder_id: Vec<u8>,
}

impl PakResponder {
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
