// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use pakdh_core::oracle::{BlindingOracle, CompactDigest};
use pakdh_core::protocol::{InitiatorConfirm, InitiatorHello, ResponderReply};
use pakdh_core::types::{PakError, PakResult};

use crate::state::{InitiatorPhase, InitiatorState, PakInitiator};

/// Generates the first message: draws Ra and blinds `g^Ra` with H1.
///
/// Ra and `g^Ra` are kept in `state` for the remainder of the exchange.
///
/// # Errors
///
/// Returns [`PakError::ValidationError`] if `state` has already been used.
/// Returns [`PakError::CryptoError`] if the random source is unavailable.
pub fn generate_hello(
    initiator: &PakInitiator,
    state: &mut InitiatorState,
) -> PakResult<InitiatorHello> {
    if state.phase != InitiatorPhase::Created {
        return Err(PakError::ValidationError);
    }

    let context = initiator.context();
    let result = (|| -> PakResult<_> {
        let ephemeral = context.generate_ephemeral()?;
        let x = context.compute_blinded(
            initiator.initiator_id(),
            initiator.responder_id(),
            &ephemeral.public,
            BlindingOracle::H1,
        )?;
        Ok((ephemeral, x))
    })();
    let (ephemeral, x) = match result {
        Ok(values) => values,
        Err(e) => {
            state.abort();
            return Err(e);
        }
    };

    state.ephemeral_secret = Some(ephemeral.secret);
    state.initiator_public = Some(ephemeral.public);
    state.phase = InitiatorPhase::HelloSent;
    Ok(InitiatorHello { x })
}

/// Processes the responder reply and produces the S2 confirmation.
///
/// Recovers `g^Rb` from Y, checks S1 in constant time, derives S2 and K.
/// Ra is erased before returning, on success and on failure alike.
///
/// # Errors
///
/// Returns [`PakError::ValidationError`] if no hello has been generated.
/// Returns [`PakError::InvalidExchangeValue`] if Y is zero.
/// Returns [`PakError::AuthenticationError`] if S1 does not match, which is
/// the expected outcome when the passwords differ.
pub fn generate_confirm(
    initiator: &PakInitiator,
    reply: &ResponderReply,
    state: &mut InitiatorState,
) -> PakResult<InitiatorConfirm> {
    if state.phase != InitiatorPhase::HelloSent {
        return Err(PakError::ValidationError);
    }

    let result = confirm(initiator, reply, state);
    match result {
        Ok((message, session_key)) => {
            state.erase_ephemeral();
            state.session_key = Some(session_key);
            state.phase = InitiatorPhase::Confirmed;
            Ok(message)
        }
        Err(e) => {
            state.abort();
            Err(e)
        }
    }
}

fn confirm(
    initiator: &PakInitiator,
    reply: &ResponderReply,
    state: &InitiatorState,
) -> PakResult<(InitiatorConfirm, CompactDigest)> {
    let context = initiator.context();
    let a = initiator.initiator_id();
    let b = initiator.responder_id();
    let g_ra = state.initiator_public.as_ref().ok_or(PakError::ValidationError)?;

    let g_rb = context.recover_peer_public(a, b, &reply.y, BlindingOracle::H2)?;

    let expected_s1 = context.compute_confirmation1(a, b, g_ra, &g_rb)?;
    if expected_s1 != reply.s1 {
        return Err(PakError::AuthenticationError);
    }

    let s2 = context.compute_confirmation2(a, b, g_ra, &g_rb)?;
    let session_key = context.compute_session_key(a, b, g_ra, &g_rb)?;
    Ok((InitiatorConfirm { s2 }, session_key))
}

/// Releases the session key K after a successful [`generate_confirm`].
///
/// # Errors
///
/// Returns [`PakError::ValidationError`] if the exchange has not reached the
/// confirmed phase.
pub fn initiator_finish(state: &mut InitiatorState) -> PakResult<CompactDigest> {
    if state.phase != InitiatorPhase::Confirmed {
        return Err(PakError::ValidationError);
    }
    let session_key = state.session_key.take().ok_or(PakError::ValidationError)?;

    state.erase_ephemeral();
    state.initiator_public = None;
    state.phase = InitiatorPhase::Finished;
    Ok(session_key)
}
