use soroban_sdk::{contracttype, Address};

/// A holder's standing authorization for `authorized` to settle transfers of
/// up to `amount` units of an asset they offered. Absence of the record is the
/// same logical state as a zero amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub authorized: Address,
    pub amount: i128,
}

/// Royalty terms, set once for the lifetime of the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyPolicy {
    /// Hundredths of a percent, 0-10000.
    pub basis_points: u32,
    pub receiver: Address,
}

#[contracttype]
pub enum DataKey {
    Administrator,
    Policy,
    /// Presence marks the token as an accepted settlement currency.
    PaymentAsset(Address),
    /// Keyed by (owner, asset).
    Offer(Address, Address),
}
