#![no_std]

mod custody;
mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{Auction, AuctionStatus, BestOffer, Config, Offer};

use events::{
    AuctionCreatedEventData, AuctionEndedEventData, InitializedEventData, NewOfferEventData,
    OfferRefundedEventData,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use types::{DAY_IN_SECONDS, MAX_DURATION_DAYS, MAX_PAGE_SIZE, MIN_DURATION_DAYS};

/// Single-asset escrow auctions.
///
/// Sellers list an item with a minimum price and a deadline, buyers escrow
/// competing offers, and `trade` pays the best offer to the seller once the
/// deadline is reached. A displaced offer is refunded as soon as it is beaten,
/// so the contract only ever holds the current best offer per auction.
#[contract]
pub struct AuctionLedger;

#[contractimpl]
impl AuctionLedger {
    /// Set the admin and the token offers are escrowed in. The admin is
    /// recorded for reference only; no later call checks it.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_config(
            &env,
            &Config {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        storage::extend_instance_ttl(&env);

        InitializedEventData { admin, token }.publish(&env);
        Ok(())
    }

    /// List a new auction and return its id.
    ///
    /// `duration` is in seconds and must be more than one day and at most
    /// ten days.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If `initialize` has not run
    /// * `Error::InvalidMinPrice` - If `min_price` is negative
    /// * `Error::InvalidDuration` - If `duration` is out of bounds
    pub fn create_auction(
        env: Env,
        seller: Address,
        name: String,
        description: String,
        min_price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();
        require_config(&env)?;

        if min_price < 0 {
            return Err(Error::InvalidMinPrice);
        }
        if duration <= MIN_DURATION_DAYS * DAY_IN_SECONDS
            || duration > MAX_DURATION_DAYS * DAY_IN_SECONDS
        {
            return Err(Error::InvalidDuration);
        }

        let now = env.ledger().timestamp();
        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            name: name.clone(),
            description: description.clone(),
            min_price,
            duration,
            created_at: now,
            deadline: now + duration,
            best_offer: None,
            ended: false,
            offer_count: 0,
        };
        storage::save_auction(&env, &auction);
        storage::add_user_auction(&env, &seller, auction_id);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction created", auction_id, auction.deadline);
        AuctionCreatedEventData {
            auction_id,
            name,
            description,
            min_price,
            duration,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Escrow `amount` as the new best offer on an auction and return the
    /// offer id. The offer it displaces is refunded in full.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If `initialize` has not run
    /// * `Error::UnknownAuction` - If no auction has this id
    /// * `Error::AuctionExpired` - If the deadline has passed or the auction was traded
    /// * `Error::OfferTooLow` - If `amount` is below the minimum price or does not beat the best offer
    pub fn create_offer(
        env: Env,
        buyer: Address,
        auction_id: u64,
        amount: i128,
    ) -> Result<u64, Error> {
        buyer.require_auth();
        let config = require_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)?;

        let now = env.ledger().timestamp();
        if auction.ended || now > auction.deadline {
            return Err(Error::AuctionExpired);
        }
        if amount < auction.min_price || amount <= auction.best_amount() {
            return Err(Error::OfferTooLow);
        }

        let offer_id = storage::increment_offer_counter(&env);
        let displaced = auction.best_offer.replace(BestOffer {
            offer_id,
            buyer: buyer.clone(),
            amount,
        });
        let offer_index = auction.offer_count;
        auction.offer_count += 1;

        // State goes out before any token moves.
        storage::save_auction(&env, &auction);
        storage::set_custody(&env, auction_id, amount);
        storage::set_auction_offer(&env, auction_id, offer_index, offer_id);
        storage::save_offer(
            &env,
            &Offer {
                id: offer_id,
                auction_id,
                buyer: buyer.clone(),
                price: amount,
                created_at: now,
                refunded: false,
            },
        );
        storage::add_user_offer(&env, &buyer, offer_id);
        if let Some(prev) = &displaced {
            if let Some(mut offer) = storage::get_offer(&env, prev.offer_id) {
                offer.refunded = true;
                storage::save_offer(&env, &offer);
            }
        }
        storage::extend_instance_ttl(&env);

        custody::collect(&env, &config, &buyer, amount);
        if let Some(prev) = displaced {
            custody::refund(&env, &config, &prev.buyer, prev.amount);
            OfferRefundedEventData {
                auction_id,
                buyer: prev.buyer,
                amount: prev.amount,
            }
            .publish(&env);
        }

        log!(&env, "offer accepted", auction_id, offer_id, amount);
        NewOfferEventData {
            auction_id,
            buyer,
            price: amount,
        }
        .publish(&env);

        Ok(offer_id)
    }

    /// Close an auction whose deadline has been reached and pay the best
    /// offer to the seller. Anyone may call it; the payee is always the
    /// seller. An auction without offers still ends, with nothing paid.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If `initialize` has not run
    /// * `Error::UnknownAuction` - If no auction has this id
    /// * `Error::AlreadySettled` - If the auction was already traded
    /// * `Error::AuctionNotYetExpired` - If the deadline has not been reached
    pub fn trade(env: Env, auction_id: u64) -> Result<(), Error> {
        let config = require_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)?;

        if auction.ended {
            return Err(Error::AlreadySettled);
        }
        if env.ledger().timestamp() < auction.deadline {
            return Err(Error::AuctionNotYetExpired);
        }

        let price = storage::get_custody(&env, auction_id);
        auction.ended = true;
        storage::save_auction(&env, &auction);
        storage::remove_custody(&env, auction_id);
        storage::extend_instance_ttl(&env);

        custody::pay_seller(&env, &config, &auction.seller, price);

        log!(&env, "auction traded", auction_id, price);
        AuctionEndedEventData {
            auction_id,
            name: auction.name,
            description: auction.description,
            price,
            buyer: auction.best_offer.map(|best| best.buyer),
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_config(env: Env) -> Result<Config, Error> {
        require_config(&env)
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)
    }

    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Up to `limit` auctions starting at position `start`, oldest first.
    pub fn get_auctions(env: Env, start: u64, limit: u32) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for index in page(storage::get_auction_counter(&env), start, limit) {
            if let Some(auction) = storage::get_auction(&env, index + 1) {
                auctions.push_back(auction);
            }
        }
        auctions
    }

    pub fn get_user_auction_count(env: Env, user: Address) -> u64 {
        storage::get_user_auction_count(&env, &user)
    }

    /// Up to `limit` auctions listed by `user`, starting at position `start`.
    pub fn get_user_auctions(env: Env, user: Address, start: u64, limit: u32) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for index in page(storage::get_user_auction_count(&env, &user), start, limit) {
            let auction = storage::get_user_auction(&env, &user, index)
                .and_then(|auction_id| storage::get_auction(&env, auction_id));
            if let Some(auction) = auction {
                auctions.push_back(auction);
            }
        }
        auctions
    }

    pub fn get_offer(env: Env, offer_id: u64) -> Result<Offer, Error> {
        storage::get_offer(&env, offer_id).ok_or(Error::UnknownOffer)
    }

    /// Up to `limit` offers accepted on an auction, in arrival order,
    /// starting at position `start`.
    pub fn get_auction_offers(
        env: Env,
        auction_id: u64,
        start: u64,
        limit: u32,
    ) -> Result<Vec<Offer>, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)?;
        let mut offers = Vec::new(&env);
        for index in page(auction.offer_count, start, limit) {
            let offer = storage::get_auction_offer(&env, auction_id, index)
                .and_then(|offer_id| storage::get_offer(&env, offer_id));
            if let Some(offer) = offer {
                offers.push_back(offer);
            }
        }
        Ok(offers)
    }

    pub fn get_user_offer_count(env: Env, user: Address) -> u64 {
        storage::get_user_offer_count(&env, &user)
    }

    /// Up to `limit` offers placed by `user` across all auctions, starting at
    /// position `start`.
    pub fn get_user_offers(env: Env, user: Address, start: u64, limit: u32) -> Vec<Offer> {
        let mut offers = Vec::new(&env);
        for index in page(storage::get_user_offer_count(&env, &user), start, limit) {
            let offer = storage::get_user_offer(&env, &user, index)
                .and_then(|offer_id| storage::get_offer(&env, offer_id));
            if let Some(offer) = offer {
                offers.push_back(offer);
            }
        }
        offers
    }

    pub fn get_best_offer(env: Env, auction_id: u64) -> Result<Option<BestOffer>, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)?;
        Ok(auction.best_offer)
    }

    /// Funds the contract currently holds for an auction.
    pub fn get_custody(env: Env, auction_id: u64) -> Result<i128, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::UnknownAuction);
        }
        Ok(storage::get_custody(&env, auction_id))
    }

    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::UnknownAuction)?;
        Ok(auction.status(env.ledger().timestamp()))
    }
}

fn require_config(env: &Env) -> Result<Config, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

/// Positions `[start, start + limit)` clipped to `total`, with `limit` capped
/// at `MAX_PAGE_SIZE`.
fn page(total: u64, start: u64, limit: u32) -> core::ops::Range<u64> {
    let end = start
        .saturating_add(u64::from(limit.min(MAX_PAGE_SIZE)))
        .min(total);
    start.min(end)..end
}

#[cfg(test)]
mod test;
