use crate::types::Config;
use soroban_sdk::{log, token, Address, Env};

/// Pulls an offer's funds from the buyer into the contract.
pub fn collect(env: &Env, config: &Config, buyer: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(buyer, &env.current_contract_address(), &amount);
}

/// Returns a displaced offer's funds to its buyer.
pub fn refund(env: &Env, config: &Config, buyer: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), buyer, &amount);
    log!(env, "refunded displaced offer", buyer.clone(), amount);
}

/// Pays the winning amount out to the seller.
pub fn pay_seller(env: &Env, config: &Config, seller: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), seller, &amount);
}
