#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, token, Address, Env};

fn create_room<'a>(env: &Env) -> (RoomContractClient<'a>, Address, Address, Address) {
    let factory = Address::generate(env);
    let creator = Address::generate(env);
    let issuer = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(issuer).address();

    let room_id = env.register(RoomContract, (factory.clone(), creator.clone(), token_id.clone()));
    let client = RoomContractClient::new(env, &room_id);

    (client, factory, creator, token_id)
}

#[test]
fn test_constructor_stores_addresses() {
    let env = Env::default();

    let (client, factory, creator, token_id) = create_room(&env);

    assert_eq!(client.factory(), factory);
    assert_eq!(client.creator(), creator);
    assert_eq!(client.token(), token_id);
}

#[test]
fn test_new_room_is_empty() {
    let env = Env::default();

    let (client, _, _, _) = create_room(&env);

    assert_eq!(client.balance(), 0);
}

#[test]
fn test_balance_tracks_transfers_into_room() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, creator, token_id) = create_room(&env);
    token::StellarAssetClient::new(&env, &token_id).mint(&creator, &700);

    token::Client::new(&env, &token_id).transfer(&creator, &client.address, &250);

    assert_eq!(client.balance(), 250);
    assert_eq!(token::Client::new(&env, &token_id).balance(&creator), 450);
}

#[test]
fn test_missing_storage_reports_not_constructed() {
    let env = Env::default();

    let (client, _, _, _) = create_room(&env);
    env.as_contract(&client.address, || {
        env.storage().instance().remove(&DataKey::Token);
        env.storage().instance().remove(&DataKey::Creator);
    });

    assert_eq!(client.try_balance(), Err(Ok(RoomError::NotConstructed)));
    assert_eq!(client.try_creator(), Err(Ok(RoomError::NotConstructed)));
    assert!(client.try_factory().is_ok());
}
