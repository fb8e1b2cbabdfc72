use crate::types::{
    Auction, Config, DataKey, Offer, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// CONFIG
// ============================================================================

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// ============================================================================
// COUNTERS
// ============================================================================

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    counter
}

pub fn get_offer_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::OfferCounter)
        .unwrap_or(0)
}

pub fn increment_offer_counter(env: &Env) -> u64 {
    let counter = get_offer_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::OfferCounter, &counter);
    counter
}

// ============================================================================
// AUCTIONS
// ============================================================================

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        bump(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    bump(env, &key);
}

pub fn get_user_auction_count(env: &Env, user: &Address) -> u64 {
    get_count(env, &DataKey::UserAuctionCount(user.clone()))
}

pub fn get_user_auction(env: &Env, user: &Address, index: u64) -> Option<u64> {
    get_index(env, &DataKey::UserAuction(user.clone(), index))
}

pub fn add_user_auction(env: &Env, user: &Address, auction_id: u64) {
    let count_key = DataKey::UserAuctionCount(user.clone());
    let index = get_count(env, &count_key);
    set_index(env, &DataKey::UserAuction(user.clone(), index), auction_id);
    set_count(env, &count_key, index + 1);
}

// ============================================================================
// OFFERS
// ============================================================================

pub fn get_offer(env: &Env, offer_id: u64) -> Option<Offer> {
    let key = DataKey::Offer(offer_id);
    let offer = env.storage().persistent().get::<_, Offer>(&key);
    if offer.is_some() {
        bump(env, &key);
    }
    offer
}

pub fn save_offer(env: &Env, offer: &Offer) {
    let key = DataKey::Offer(offer.id);
    env.storage().persistent().set(&key, offer);
    bump(env, &key);
}

pub fn get_auction_offer(env: &Env, auction_id: u64, index: u64) -> Option<u64> {
    get_index(env, &DataKey::AuctionOffer(auction_id, index))
}

pub fn set_auction_offer(env: &Env, auction_id: u64, index: u64, offer_id: u64) {
    set_index(env, &DataKey::AuctionOffer(auction_id, index), offer_id);
}

pub fn get_user_offer_count(env: &Env, user: &Address) -> u64 {
    get_count(env, &DataKey::UserOfferCount(user.clone()))
}

pub fn get_user_offer(env: &Env, user: &Address, index: u64) -> Option<u64> {
    get_index(env, &DataKey::UserOffer(user.clone(), index))
}

pub fn add_user_offer(env: &Env, user: &Address, offer_id: u64) {
    let count_key = DataKey::UserOfferCount(user.clone());
    let index = get_count(env, &count_key);
    set_index(env, &DataKey::UserOffer(user.clone(), index), offer_id);
    set_count(env, &count_key, index + 1);
}

// ============================================================================
// CUSTODY
// ============================================================================

pub fn get_custody(env: &Env, auction_id: u64) -> i128 {
    let key = DataKey::Custody(auction_id);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_custody(env: &Env, auction_id: u64, amount: i128) {
    let key = DataKey::Custody(auction_id);
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}

pub fn remove_custody(env: &Env, auction_id: u64) {
    let key = DataKey::Custody(auction_id);
    env.storage().persistent().remove(&key);
}

// ============================================================================
// INDICES
// ============================================================================

fn get_count(env: &Env, key: &DataKey) -> u64 {
    match env.storage().persistent().get::<_, u64>(key) {
        Some(count) => {
            bump(env, key);
            count
        }
        None => 0,
    }
}

fn set_count(env: &Env, key: &DataKey, count: u64) {
    env.storage().persistent().set(key, &count);
    bump(env, key);
}

fn get_index(env: &Env, key: &DataKey) -> Option<u64> {
    let id = env.storage().persistent().get::<_, u64>(key);
    if id.is_some() {
        bump(env, key);
    }
    id
}

fn set_index(env: &Env, key: &DataKey, id: u64) {
    env.storage().persistent().set(key, &id);
    bump(env, key);
}
