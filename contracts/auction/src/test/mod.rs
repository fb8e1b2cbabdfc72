pub mod settlement_test;

use crate::{AuctionLedger, AuctionLedgerClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const STARTING_BALANCE: i128 = 1_000;
pub const MIN_PRICE: i128 = 10;
pub const DURATION: u64 = 86_400 + 1;
pub const ITEM_NAME: &str = "Chintendo Vii";
pub const ITEM_DESCRIPTION: &str = "250 games in 1 can play Super Mari and Sinoc";

pub fn setup_test() -> (
    Env,
    AuctionLedgerClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionLedger, ());
    let client = AuctionLedgerClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer1 = Address::generate(&env);
    let buyer2 = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&buyer1, &STARTING_BALANCE);
    token_admin_client.mint(&buyer2, &STARTING_BALANCE);

    client.initialize(&admin, &token_address);

    (env, client, seller, buyer1, buyer2, token_client)
}

/// Lists the "Chintendo Vii" with the default minimum price and duration.
pub fn create_default_auction(env: &Env, client: &AuctionLedgerClient, seller: &Address) -> u64 {
    client.create_auction(
        seller,
        &String::from_str(env, ITEM_NAME),
        &String::from_str(env, ITEM_DESCRIPTION),
        &MIN_PRICE,
        &DURATION,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn set_ledger_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}
