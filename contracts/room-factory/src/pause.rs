//! Owner-gated circuit breaker over room creation.
//!
//! The switch has two states, active and paused, and may cycle between them
//! any number of times. Only `create_room` consults it.

use soroban_sdk::{log, Address, Env};

use crate::events::FactoryEvents;
use crate::types::DataKey;
use crate::FactoryError;

/// Returns `true` while room creation is halted.
pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

/// Fails with `CreationHalted` while the factory is paused.
pub fn require_not_paused(env: &Env) -> Result<(), FactoryError> {
    if is_paused(env) {
        log!(env, "room creation rejected: factory paused");
        return Err(FactoryError::CreationHalted);
    }
    Ok(())
}

/// Fails with `Unauthorized` unless `caller` is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), FactoryError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(FactoryError::NotInitialized)?;

    if *caller != owner {
        return Err(FactoryError::Unauthorized);
    }
    Ok(())
}

/// Moves the switch to `paused` on behalf of `caller`.
///
/// Writing the current state again succeeds without emitting an event.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), FactoryError> {
    caller.require_auth();
    require_owner(env, caller)?;

    if is_paused(env) == paused {
        return Ok(());
    }

    env.storage().instance().set(&DataKey::Paused, &paused);

    if paused {
        log!(env, "factory paused", caller.clone());
        FactoryEvents::paused(env, caller);
    } else {
        log!(env, "factory unpaused", caller.clone());
        FactoryEvents::unpaused(env, caller);
    }
    Ok(())
}
