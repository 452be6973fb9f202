// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH FFI Bindings
// Licensed under the MIT License

//! C-compatible FFI bindings for the PAK-DH key exchange.
//!
//! This crate exposes a flat, handle-based C API that wraps the safe Rust
//! implementation provided by `pakdh-core`, `pakdh-agent`, and `pakdh-relay`.
//! Exchange messages cross the boundary as ASCII hex byte strings with
//! explicit lengths (no NUL terminator).
//!
//! All functions return `0` on success or a negative error code on failure.
//! Callers should call [`pakdh_init`] once before any other function.

mod agent_ffi;
mod relay_ffi;

use pakdh_core::exchange::ClientContext;
use pakdh_core::types::{PakError, PakResult};

/// Converts a `PakResult<()>` into a C-friendly integer return code.
///
/// Returns `0` on `Ok(())` or a negative error code on `Err`.
pub(crate) fn result_to_int(r: PakResult<()>) -> i32 {
    match r {
        Ok(()) => 0,
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub extern "C" fn pakdh_init() -> i32 {
    result_to_int(pakdh_core::crypto::init())
}

/// Borrows a non-empty input buffer, or `None` for a null pointer or zero length.
pub(crate) unsafe fn input_slice<'a>(data: *const u8, length: usize) -> Option<&'a [u8]> {
    if data.is_null() || length == 0 {
        return None;
    }
    Some(std::slice::from_raw_parts(data, length))
}

pub(crate) fn wire_str(data: &[u8]) -> PakResult<&str> {
    std::str::from_utf8(data).map_err(|_| PakError::InvalidProtocolMessage)
}

pub(crate) unsafe fn build_context(
    password: *const u8,
    password_length: usize,
    group_bits: u32,
) -> PakResult<ClientContext> {
    let password = input_slice(password, password_length).ok_or(PakError::InvalidConfiguration)?;
    ClientContext::with_group_bits(password, group_bits)
}

/// Copies an encoded message into a caller buffer and reports its length.
pub(crate) unsafe fn write_wire(
    wire: &str,
    out: *mut u8,
    out_capacity: usize,
    written: *mut usize,
) -> i32 {
    if out.is_null() || written.is_null() || out_capacity < wire.len() {
        return PakError::InvalidInput.to_c_int();
    }
    std::ptr::copy_nonoverlapping(wire.as_ptr(), out, wire.len());
    *written = wire.len();
    0
}
