// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use std::ptr;

use pakdh_core::protocol::{InitiatorConfirm, InitiatorHello};
use pakdh_core::types::{PakError, COMPACT_DIGEST_LENGTH};
use pakdh_relay::{generate_reply, responder_finish, PakResponder, ResponderState};

use crate::{build_context, input_slice, result_to_int, wire_str, write_wire};

struct RelayHandle {
    responder: PakResponder,
}

struct RelayStateHandle {
    state: ResponderState,
}

#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pakdh_relay_create(
    password: *const u8,
    password_length: usize,
    group_bits: u32,
    initiator_id: *const u8,
    initiator_id_length: usize,
    responder_id: *const u8,
    responder_id_length: usize,
    handle: *mut *mut std::ffi::c_void,
) -> i32 {
    if handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }
    let (Some(a), Some(b)) = (
        input_slice(initiator_id, initiator_id_length),
        input_slice(responder_id, responder_id_length),
    ) else {
        return PakError::InvalidInput.to_c_int();
    };
    let responder = match build_context(password, password_length, group_bits)
        .and_then(|context| PakResponder::new(context, a, b))
    {
        Ok(responder) => responder,
        Err(e) => return e.to_c_int(),
    };
    let boxed = Box::new(RelayHandle { responder });
    *handle = Box::into_raw(boxed) as *mut std::ffi::c_void;
    0
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_relay_destroy(handle: *mut std::ffi::c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut RelayHandle));
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_relay_state_create(handle: *mut *mut std::ffi::c_void) -> i32 {
    if handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }
    let boxed = Box::new(RelayStateHandle {
        state: ResponderState::new(),
    });
    *handle = Box::into_raw(boxed) as *mut std::ffi::c_void;
    0
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_relay_state_destroy(handle: *mut std::ffi::c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut RelayStateHandle));
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_relay_generate_reply(
    relay_handle: *mut std::ffi::c_void,
    hello: *const u8,
    hello_length: usize,
    state_handle: *mut std::ffi::c_void,
    reply_out: *mut u8,
    reply_capacity: usize,
    reply_written: *mut usize,
) -> i32 {
    if relay_handle.is_null() || state_handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }
    let Some(hello) = input_slice(hello, hello_length) else {
        return PakError::InvalidInput.to_c_int();
    };

    let relay = &*(relay_handle as *mut RelayHandle);
    let state = &mut (*(state_handle as *mut RelayStateHandle)).state;

    let hello = match wire_str(hello).and_then(InitiatorHello::from_wire) {
        Ok(hello) => hello,
        Err(e) => return e.to_c_int(),
    };
    match generate_reply(&relay.responder, &hello, state) {
        Ok(reply) => write_wire(&reply.to_wire(), reply_out, reply_capacity, reply_written),
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_relay_finish(
    confirm: *const u8,
    confirm_length: usize,
    state_handle: *mut std::ffi::c_void,
    session_key_out: *mut u8,
    session_key_length: usize,
) -> i32 {
    if state_handle.is_null()
        || session_key_out.is_null()
        || session_key_length < COMPACT_DIGEST_LENGTH
    {
        return PakError::InvalidInput.to_c_int();
    }
    let Some(confirm) = input_slice(confirm, confirm_length) else {
        return PakError::InvalidInput.to_c_int();
    };

    let state = &mut (*(state_handle as *mut RelayStateHandle)).state;
    let result = wire_str(confirm)
        .and_then(InitiatorConfirm::from_wire)
        .and_then(|confirm| responder_finish(&confirm, state))
        .map(|session_key| {
            ptr::copy_nonoverlapping(
                session_key.as_bytes().as_ptr(),
                session_key_out,
                COMPACT_DIGEST_LENGTH,
            );
        });
    result_to_int(result)
}
