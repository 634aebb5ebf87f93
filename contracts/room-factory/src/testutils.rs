//! Test helpers for deploying the factory together with real rooms.

use soroban_sdk::{BytesN, Env};

/// Room contract WASM compiled by the build script, if a WASM target was
/// available on the host.
#[cfg(room_wasm)]
pub fn room_wasm() -> Option<&'static [u8]> {
    Some(include_bytes!(concat!(env!("OUT_DIR"), "/room.wasm")))
}

#[cfg(not(room_wasm))]
pub fn room_wasm() -> Option<&'static [u8]> {
    None
}

/// Uploads the room WASM into `env` and returns the hash `initialize` expects.
///
/// Panics when the build script could not produce the WASM.
pub fn upload_room_wasm(env: &Env) -> BytesN<32> {
    let wasm = room_wasm()
        .expect("room contract WASM unavailable: install the wasm32v1-none target and rebuild");
    env.deployer().upload_contract_wasm(wasm)
}
