//! Storage keys and record types for the room factory.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Account allowed to toggle the pause switch
    Owner,
    /// Token every room deposit is denominated in
    Token,
    /// Pause state (true = creation halted)
    Paused,
    /// Hash of the uploaded room contract WASM
    RoomWasm,
    /// Number of rooms created so far
    RoomCount,
}

/// Published once for every room the factory creates.
///
/// `deposited_value` is the amount the creator attached and the balance the
/// room holds right after creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationRecord {
    pub creator: Address,
    pub room: Address,
    pub deposited_value: i128,
}
