// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use std::ptr;

use pakdh_agent::{generate_confirm, generate_hello, initiator_finish, InitiatorState, PakInitiator};
use pakdh_core::protocol::ResponderReply;
use pakdh_core::types::{PakError, COMPACT_DIGEST_LENGTH};

use crate::{build_context, input_slice, result_to_int, wire_str, write_wire};

struct AgentHandle {
    initiator: PakInitiator,
}

struct AgentStateHandle {
    state: InitiatorState,
}

#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pakdh_agent_create(
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
    let initiator = match build_context(password, password_length, group_bits)
        .and_then(|context| PakInitiator::new(context, a, b))
    {
        Ok(initiator) => initiator,
        Err(e) => return e.to_c_int(),
    };
    let boxed = Box::new(AgentHandle { initiator });
    *handle = Box::into_raw(boxed) as *mut std::ffi::c_void;
    0
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_destroy(handle: *mut std::ffi::c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut AgentHandle));
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_state_create(handle: *mut *mut std::ffi::c_void) -> i32 {
    if handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }
    let boxed = Box::new(AgentStateHandle {
        state: InitiatorState::new(),
    });
    *handle = Box::into_raw(boxed) as *mut std::ffi::c_void;
    0
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_state_destroy(handle: *mut std::ffi::c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut AgentStateHandle));
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_generate_hello(
    agent_handle: *mut std::ffi::c_void,
    state_handle: *mut std::ffi::c_void,
    hello_out: *mut u8,
    hello_capacity: usize,
    hello_written: *mut usize,
) -> i32 {
    if agent_handle.is_null() || state_handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }

    let agent = &*(agent_handle as *mut AgentHandle);
    let state = &mut (*(state_handle as *mut AgentStateHandle)).state;

    match generate_hello(&agent.initiator, state) {
        Ok(hello) => write_wire(&hello.to_wire(), hello_out, hello_capacity, hello_written),
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_generate_confirm(
    agent_handle: *mut std::ffi::c_void,
    reply: *const u8,
    reply_length: usize,
    state_handle: *mut std::ffi::c_void,
    confirm_out: *mut u8,
    confirm_capacity: usize,
    confirm_written: *mut usize,
) -> i32 {
    if agent_handle.is_null() || state_handle.is_null() {
        return PakError::InvalidInput.to_c_int();
    }
    let Some(reply) = input_slice(reply, reply_length) else {
        return PakError::InvalidInput.to_c_int();
    };

    let agent = &*(agent_handle as *mut AgentHandle);
    let state = &mut (*(state_handle as *mut AgentStateHandle)).state;

    let reply = match wire_str(reply).and_then(ResponderReply::from_wire) {
        Ok(reply) => reply,
        Err(e) => return e.to_c_int(),
    };
    match generate_confirm(&agent.initiator, &reply, state) {
        Ok(confirm) => write_wire(&confirm.to_wire(), confirm_out, confirm_capacity, confirm_written),
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pakdh_agent_finish(
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

    let state = &mut (*(state_handle as *mut AgentStateHandle)).state;
    let result = initiator_finish(state).map(|session_key| {
        ptr::copy_nonoverlapping(
            session_key.as_bytes().as_ptr(),
            session_key_out,
            COMPACT_DIGEST_LENGTH,
        );
    });
    result_to_int(result)
}
