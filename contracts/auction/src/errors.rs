use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyCreated = 1,
    NotCreated = 2,
    Unauthorized = 3,
    InvalidFeePercent = 4,
    InvalidTimeWindow = 5,
    InvalidAmount = 6,
    AlreadySetup = 7,
    NotSetup = 8,
    SetupTooLate = 9,
    AuctionNotStarted = 10,
    AuctionEnded = 11,
    BidTooLow = 12,
    AuctionStillOpen = 13,
    AlreadyClosed = 14,
}
