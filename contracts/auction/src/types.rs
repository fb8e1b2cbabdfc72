use soroban_sdk::{contracttype, Address, String};

// ============================================================================
// Constants
// ============================================================================

pub const DAY_IN_SECONDS: u64 = 86_400;

/// Auctions must run for strictly more than this many days...
pub const MIN_DURATION_DAYS: u64 = 1;

/// ...and at most this many.
pub const MAX_DURATION_DAYS: u64 = 10;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Largest page any listing query returns
pub const MAX_PAGE_SIZE: u32 = 50;

// ============================================================================
// Records
// ============================================================================

/// Ledger-wide configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Account that initialized the ledger. Informational only: no
    /// operation is gated on it.
    pub admin: Address,
    /// The single asset every offer is escrowed in.
    pub token: Address,
}

/// The offer currently winning an auction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BestOffer {
    pub offer_id: u64,
    pub buyer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub name: String,
    pub description: String,
    pub min_price: i128,
    pub duration: u64,
    pub created_at: u64,
    pub deadline: u64,
    pub best_offer: Option<BestOffer>,
    pub ended: bool,
    /// Number of accepted offers; the ids live under `DataKey::AuctionOffer`.
    pub offer_count: u64,
}

impl Auction {
    /// Amount a new offer has to beat. Zero until the first offer lands.
    pub fn best_amount(&self) -> i128 {
        match &self.best_offer {
            Some(best) => best.amount,
            None => 0,
        }
    }

    pub fn status(&self, now: u64) -> AuctionStatus {
        if self.ended {
            AuctionStatus::Settled
        } else if now > self.deadline {
            AuctionStatus::Expired
        } else {
            AuctionStatus::Open
        }
    }
}

/// An accepted offer, kept as history after it is superseded or wins.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub id: u64,
    pub auction_id: u64,
    pub buyer: Address,
    pub price: i128,
    pub created_at: u64,
    pub refunded: bool,
}

/// Derived lifecycle stage of an auction.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Accepting offers. At exactly the deadline an auction is still open
    /// and can also be traded.
    Open = 0,
    /// Deadline passed, waiting for `trade`
    Expired = 1,
    /// Traded; terminal
    Settled = 2,
}

/// Storage keys for the auction ledger.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration (instance)
    Config,
    /// Last auction id handed out (instance)
    AuctionCounter,
    /// Last offer id handed out (instance)
    OfferCounter,
    /// Auction by id
    Auction(u64),
    /// Offer by id
    Offer(u64),
    /// Funds held for an auction's best offer
    Custody(u64),
    /// Offer id by (auction id, position)
    AuctionOffer(u64, u64),
    /// Number of auctions created by a seller
    UserAuctionCount(Address),
    /// Auction id by (seller, position)
    UserAuction(Address, u64),
    /// Number of offers placed by a buyer
    UserOfferCount(Address),
    /// Offer id by (buyer, position)
    UserOffer(Address, u64),
}
