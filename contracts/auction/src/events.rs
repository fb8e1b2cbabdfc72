use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the ledger is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
}

/// Event emitted when a seller lists an auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    pub name: String,
    pub description: String,
    pub min_price: i128,
    pub duration: u64,
}

/// Event emitted when an offer becomes the best offer
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewOfferEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub buyer: Address,
    pub price: i128,
}

/// Event emitted when a displaced bidder gets their funds back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferRefundedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub buyer: Address,
    pub amount: i128,
}

/// Event emitted when an auction is traded.
///
/// `price` is what the seller was paid; zero when nobody made an offer.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub name: String,
    pub description: String,
    pub price: i128,
    pub buyer: Option<Address>,
}
