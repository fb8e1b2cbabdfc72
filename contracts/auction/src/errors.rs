use soroban_sdk::contracterror;

/// Error codes for the auction ledger contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Duration must last more than 1 day and at most 10 days
    InvalidDuration = 3,
    /// Minimum price is negative
    InvalidMinPrice = 4,
    /// No auction with the given id
    UnknownAuction = 5,
    /// Auction deadline has passed or it was already traded
    AuctionExpired = 6,
    /// Auction deadline has not been reached yet
    AuctionNotYetExpired = 7,
    /// Offer must be >= the minimum price and > the best offer
    OfferTooLow = 8,
    /// Auction was already traded
    AlreadySettled = 9,
    /// No offer with the given id
    UnknownOffer = 10,
}
