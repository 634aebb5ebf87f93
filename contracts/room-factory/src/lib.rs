//! # Room Factory Contract
//!
//! Creates fund-holding rooms on request. Each call deploys a `room` contract
//! and moves the attached deposit straight from the creator into it, so the
//! factory never holds value of its own. Every successful creation publishes
//! exactly one `CreationRecord`, and the owner can halt creation with a pause
//! switch.
//!
//! Rooms are deployed at a deterministic address derived from the factory and
//! the room's sequence number.

#![no_std]

mod events;
mod pause;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, BytesN, Env};

pub use crate::events::{
    FactoryEvents, FACTORY_TOPIC, TOPIC_CREATED, TOPIC_INIT, TOPIC_PAUSED, TOPIC_UNPAUSED,
};
pub use crate::types::{CreationRecord, DataKey};

/// Error codes for the room factory
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Factory not initialized
    NotInitialized = 1,
    /// Factory already initialized
    AlreadyInitialized = 2,
    /// Caller is not the owner
    Unauthorized = 3,
    /// Room creation is paused
    CreationHalted = 4,
    /// Deposit amount is negative
    InvalidAmount = 5,
}

#[contract]
pub struct RoomFactoryContract;

#[contractimpl]
impl RoomFactoryContract {
    /// Configures the factory.
    ///
    /// # Arguments
    /// * `owner` - The only account allowed to pause and unpause creation
    /// * `token` - The token room deposits are paid in
    /// * `room_wasm` - Hash of the uploaded room contract WASM
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        room_wasm: BytesN<32>,
    ) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(FactoryError::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::RoomWasm, &room_wasm);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::RoomCount, &0u64);

        FactoryEvents::initialized(&env, &owner);
        Ok(())
    }

    /// Deploys a new room and funds it with `amount` of the deposit token.
    ///
    /// The room is constructed first and the deposit is then transferred from
    /// `creator` directly to it. If either step fails the whole invocation is
    /// rolled back, so either the room exists with its full deposit or nothing
    /// happened.
    ///
    /// # Returns
    /// The address of the new room
    ///
    /// # Errors
    /// * `CreationHalted` - The factory is paused
    /// * `InvalidAmount` - `amount` is negative
    /// * `NotInitialized` - The factory has not been configured
    pub fn create_room(env: Env, creator: Address, amount: i128) -> Result<Address, FactoryError> {
        creator.require_auth();

        let token = Self::read_token(&env)?;
        let room_wasm: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::RoomWasm)
            .ok_or(FactoryError::NotInitialized)?;
        pause::require_not_paused(&env)?;

        if amount < 0 {
            return Err(FactoryError::InvalidAmount);
        }

        let room_id = Self::room_count(env.clone()) + 1;
        let room = env
            .deployer()
            .with_current_contract(Self::room_salt(&env, room_id))
            .deploy_v2(
                room_wasm,
                (env.current_contract_address(), creator.clone(), token.clone()),
            );

        if amount > 0 {
            token::Client::new(&env, &token).transfer(&creator, &room, &amount);
        }

        env.storage().instance().set(&DataKey::RoomCount, &room_id);

        log!(&env, "room created", room_id, creator.clone(), amount);

        FactoryEvents::room_created(
            &env,
            CreationRecord {
                creator,
                room: room.clone(),
                deposited_value: amount,
            },
        );

        Ok(room)
    }

    /// Sets the pause switch (owner only).
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), FactoryError> {
        pause::set_paused(&env, &caller, paused)
    }

    /// Halts room creation (owner only).
    pub fn pause(env: Env, caller: Address) -> Result<(), FactoryError> {
        pause::set_paused(&env, &caller, true)
    }

    /// Resumes room creation (owner only).
    pub fn unpause(env: Env, caller: Address) -> Result<(), FactoryError> {
        pause::set_paused(&env, &caller, false)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn owner(env: Env) -> Result<Address, FactoryError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(FactoryError::NotInitialized)
    }

    pub fn token(env: Env) -> Result<Address, FactoryError> {
        Self::read_token(&env)
    }

    /// Number of rooms created so far.
    pub fn room_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RoomCount)
            .unwrap_or(0)
    }

    /// Address the room with sequence number `room_id` has or will have.
    pub fn room_address(env: Env, room_id: u64) -> Address {
        env.deployer()
            .with_current_contract(Self::room_salt(&env, room_id))
            .deployed_address()
    }

    /// Deposit token held by the factory itself. Always zero between calls.
    pub fn factory_balance(env: Env) -> Result<i128, FactoryError> {
        let token = Self::read_token(&env)?;
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    /// Deposit token held by `room`.
    pub fn room_balance(env: Env, room: Address) -> Result<i128, FactoryError> {
        let token = Self::read_token(&env)?;
        Ok(token::Client::new(&env, &token).balance(&room))
    }

    // Private helpers

    fn read_token(env: &Env) -> Result<Address, FactoryError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(FactoryError::NotInitialized)
    }

    /// Big-endian room id in the low bytes of a 32-byte salt.
    fn room_salt(env: &Env, room_id: u64) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[24..].copy_from_slice(&room_id.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}
