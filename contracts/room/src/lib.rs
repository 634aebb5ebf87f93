//! # Room Contract
//!
//! A fund-holding room created by the room factory. The room is constructed
//! with the addresses of its factory, its creator and the deposit token, and
//! reports the token balance held at its own address.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};

/// Storage keys for the room contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Factory that instantiated this room
    Factory,
    /// Account that requested the room and funded it
    Creator,
    /// Token the room's deposit is denominated in
    Token,
}

/// Error codes for the room contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RoomError {
    /// Room storage was never written by the constructor
    NotConstructed = 1,
}

#[contract]
pub struct RoomContract;

#[contractimpl]
impl RoomContract {
    /// Runs once when the room is deployed.
    pub fn __constructor(env: Env, factory: Address, creator: Address, token: Address) {
        env.storage().instance().set(&DataKey::Factory, &factory);
        env.storage().instance().set(&DataKey::Creator, &creator);
        env.storage().instance().set(&DataKey::Token, &token);
    }

    /// Token balance currently held by this room.
    pub fn balance(env: Env) -> Result<i128, RoomError> {
        let token = Self::read(&env, &DataKey::Token)?;
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    pub fn factory(env: Env) -> Result<Address, RoomError> {
        Self::read(&env, &DataKey::Factory)
    }

    pub fn creator(env: Env) -> Result<Address, RoomError> {
        Self::read(&env, &DataKey::Creator)
    }

    pub fn token(env: Env) -> Result<Address, RoomError> {
        Self::read(&env, &DataKey::Token)
    }

    fn read(env: &Env, key: &DataKey) -> Result<Address, RoomError> {
        env.storage()
            .instance()
            .get(key)
            .ok_or(RoomError::NotConstructed)
    }
}

#[cfg(test)]
mod test;
