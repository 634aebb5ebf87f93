//! Event publishing for the room factory.
//!
//! Every event carries `FACTORY_TOPIC` first so indexers can select the
//! factory's stream before looking at the operation topic.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::CreationRecord;

pub const FACTORY_TOPIC: Symbol = symbol_short!("factory");

pub const TOPIC_INIT: Symbol = symbol_short!("init");
pub const TOPIC_CREATED: Symbol = symbol_short!("created");
pub const TOPIC_PAUSED: Symbol = symbol_short!("paused");
pub const TOPIC_UNPAUSED: Symbol = symbol_short!("unpaused");

/// Events emitted by the factory
pub struct FactoryEvents;

impl FactoryEvents {
    /// Emit event when the factory is configured
    pub fn initialized(env: &Env, owner: &Address) {
        env.events()
            .publish((FACTORY_TOPIC, TOPIC_INIT), owner.clone());
    }

    /// Emit the creation record for a new room
    pub fn room_created(env: &Env, record: CreationRecord) {
        env.events()
            .publish((FACTORY_TOPIC, TOPIC_CREATED), record);
    }

    /// Emit event when creation is halted
    pub fn paused(env: &Env, owner: &Address) {
        env.events()
            .publish((FACTORY_TOPIC, TOPIC_PAUSED), owner.clone());
    }

    /// Emit event when creation is resumed
    pub fn unpaused(env: &Env, owner: &Address) {
        env.events()
            .publish((FACTORY_TOPIC, TOPIC_UNPAUSED), owner.clone());
    }
}
