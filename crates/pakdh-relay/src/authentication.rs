// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use pakdh_core::oracle::{BlindingOracle, CompactDigest};
use pakdh_core::protocol::{InitiatorConfirm, InitiatorHello, ResponderReply};
use pakdh_core::types::{EphemeralSecret, PakError, PakResult};

use crate::state::{PakResponder, ResponderPhase, ResponderState};

struct ReplyMaterial {
    reply: ResponderReply,
    ephemeral_secret: EphemeralSecret,
    expected_confirmation: CompactDigest,
    session_key: CompactDigest,
}

/// Processes the initiator hello and produces Y and S1.
///
/// Recovers `g^Ra` from X, draws Rb, blinds `g^Rb` with H2 and derives S1,
/// the expected S2 and K. Everything but the reply stays in `state`.
///
/// # Errors
///
/// Returns [`PakError::ValidationError`] if `state` has already been used.
/// Returns [`PakError::InvalidExchangeValue`] if X is zero.
/// Returns [`PakError::CryptoError`] if the random source is unavailable.
pub fn generate_reply(
    responder: &PakResponder,
    hello: &InitiatorHello,
    state: &mut ResponderState,
) -> PakResult<ResponderReply> {
    if state.phase != ResponderPhase::Created {
        return Err(PakError::ValidationError);
    }

    match reply(responder, hello) {
        Ok(material) => {
            state.ephemeral_secret = Some(material.ephemeral_secret);
            state.expected_confirmation = Some(material.expected_confirmation);
            state.session_key = Some(material.session_key);
            state.phase = ResponderPhase::ReplySent;
            Ok(material.reply)
        }
        Err(e) => {
            state.wipe();
            state.phase = ResponderPhase::Aborted;
            Err(e)
        }
    }
}

fn reply(responder: &PakResponder, hello: &InitiatorHello) -> PakResult<ReplyMaterial> {
    let context = responder.context();
    let a = responder.initiator_id();
    let b = responder.responder_id();

    let g_ra = context.recover_peer_public(a, b, &hello.x, BlindingOracle::H1)?;

    let ephemeral = context.generate_ephemeral()?;
    let y = context.compute_blinded(a, b, &ephemeral.public, BlindingOracle::H2)?;

    let s1 = context.compute_confirmation1(a, b, &g_ra, &ephemeral.public)?;
    let expected_confirmation = context.compute_confirmation2(a, b, &g_ra, &ephemeral.public)?;
    let session_key = context.compute_session_key(a, b, &g_ra, &ephemeral.public)?;

    Ok(ReplyMaterial {
        reply: ResponderReply { y, s1 },
        ephemeral_secret: ephemeral.secret,
        expected_confirmation,
        session_key,
    })
}

/// Verifies the initiator's S2 and releases the session key K.
///
/// Rb and the expected confirmation are erased whether or not S2 verifies.
///
/// # Errors
///
/// Returns [`PakError::ValidationError`] if no reply has been generated.
/// Returns [`PakError::AuthenticationError`] if S2 does not match.
pub fn responder_finish(
    confirm: &InitiatorConfirm,
    state: &mut ResponderState,
) -> PakResult<CompactDigest> {
    if state.phase != ResponderPhase::ReplySent {
        return Err(PakError::ValidationError);
    }

    let verified = state
        .expected_confirmation
        .as_ref()
        .is_some_and(|expected| *expected == confirm.s2);
    let session_key = state.session_key.take();
    state.wipe();

    match session_key {
        Some(key) if verified => {
            state.phase = ResponderPhase::Finished;
            Ok(key)
        }
        _ => {
            state.phase = ResponderPhase::Aborted;
            Err(PakError::AuthenticationError)
        }
    }
}
