use crate::types::{DataKey, Offer, RoyaltyPolicy};
use soroban_sdk::{Address, Env};

pub fn get_administrator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Administrator)
}

pub fn set_administrator(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Administrator, admin);
}

pub fn has_administrator(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Administrator)
}

pub fn get_policy(env: &Env) -> Option<RoyaltyPolicy> {
    env.storage().instance().get(&DataKey::Policy)
}

pub fn set_policy(env: &Env, policy: &RoyaltyPolicy) {
    env.storage().instance().set(&DataKey::Policy, policy);
}

pub fn has_policy(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Policy)
}

pub fn is_payment_asset(env: &Env, asset: &Address) -> bool {
    let key = DataKey::PaymentAsset(asset.clone());
    env.storage().persistent().has(&key)
}

pub fn allow_payment_asset(env: &Env, asset: &Address) {
    let key = DataKey::PaymentAsset(asset.clone());
    env.storage().persistent().set(&key, &true);
}

pub fn disallow_payment_asset(env: &Env, asset: &Address) {
    let key = DataKey::PaymentAsset(asset.clone());
    env.storage().persistent().remove(&key);
}

pub fn get_offer(env: &Env, owner: &Address, asset: &Address) -> Option<Offer> {
    let key = DataKey::Offer(owner.clone(), asset.clone());
    env.storage().persistent().get(&key)
}

pub fn set_offer(env: &Env, owner: &Address, asset: &Address, offer: &Offer) {
    let key = DataKey::Offer(owner.clone(), asset.clone());
    env.storage().persistent().set(&key, offer);
}

pub fn remove_offer(env: &Env, owner: &Address, asset: &Address) {
    let key = DataKey::Offer(owner.clone(), asset.clone());
    env.storage().persistent().remove(&key);
}
