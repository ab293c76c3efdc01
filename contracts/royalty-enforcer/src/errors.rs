use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    PolicyAlreadySet = 4,
    PolicyNotSet = 5,
    InvalidBasisPoints = 6,
    PaymentAssetNotAllowed = 7,
    OfferNotFound = 8,
    OfferMismatch = 9,
    InsufficientOffer = 10,
    InsufficientBalance = 11,
    InvalidAmount = 12,
    RoyaltyReceiverMismatch = 13,
}
