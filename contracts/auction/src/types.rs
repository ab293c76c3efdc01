use soroban_sdk::{contracttype, Address};

/// Lifecycle of the single auction this instance hosts. `Closed` is terminal:
/// the record is kept for inspection but every mutating entry point rejects.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionPhase {
    AwaitingSetup = 0,
    Open = 1,
    Closed = 2,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub creator: Address,
    pub seller: Address,
    /// Token contract of the auctioned asset.
    pub nft: Address,
    /// Units escrowed at setup; zero until then.
    pub nft_amount: i128,
    /// Currency bids are placed and settled in.
    pub bid_token: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_amount: i128,
    pub min_bid_increment: i128,
    /// Whole percent (0-100) retained for the creator at a successful close.
    pub fee_percent: u32,
    pub lead_bid_amount: i128,
    /// None until the first accepted bid.
    pub lead_bidder: Option<Address>,
    pub num_bids: u64,
    pub phase: AuctionPhase,
}

#[contracttype]
pub enum DataKey {
    Auction,
}
