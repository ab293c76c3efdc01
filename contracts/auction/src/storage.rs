use crate::types::{Auction, DataKey};
use soroban_sdk::Env;

pub fn get_auction(env: &Env) -> Option<Auction> {
    env.storage().instance().get(&DataKey::Auction)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage().instance().set(&DataKey::Auction, auction);
}

pub fn has_auction(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Auction)
}
