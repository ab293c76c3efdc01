use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdministratorChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicySetEvent {
    pub basis_points: u32,
    pub receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentAssetUpdatedEvent {
    pub asset: Address,
    pub allowed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferUpdatedEvent {
    pub owner: Address,
    pub asset: Address,
    pub authorized: Address,
    /// Zero means the offer was consumed or withdrawn.
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferCompletedEvent {
    pub asset: Address,
    pub amount: i128,
    pub owner: Address,
    pub buyer: Address,
    pub payment_token: Address,
    pub payment_amount: i128,
    pub royalty_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoyaltyFreeMoveEvent {
    pub asset: Address,
    pub amount: i128,
    pub from: Address,
    pub to: Address,
}

pub fn emit_administrator_changed(env: &Env, old_admin: Address, new_admin: Address) {
    let event = AdministratorChangedEvent {
        old_admin: old_admin.clone(),
        new_admin,
    };
    env.events().publish(("administrator_changed", old_admin), event);
}

pub fn emit_policy_set(env: &Env, basis_points: u32, receiver: Address) {
    let event = PolicySetEvent {
        basis_points,
        receiver: receiver.clone(),
    };
    env.events().publish(("policy_set", receiver), event);
}

pub fn emit_payment_asset_updated(env: &Env, asset: Address, allowed: bool) {
    let event = PaymentAssetUpdatedEvent {
        asset: asset.clone(),
        allowed,
    };
    env.events().publish(("payment_asset_updated", asset), event);
}

pub fn emit_offer_updated(
    env: &Env,
    owner: Address,
    asset: Address,
    authorized: Address,
    amount: i128,
) {
    let event = OfferUpdatedEvent {
        owner: owner.clone(),
        asset: asset.clone(),
        authorized,
        amount,
    };
    env.events().publish(("offer_updated", owner, asset), event);
}

pub fn emit_transfer_completed(
    env: &Env,
    asset: Address,
    amount: i128,
    owner: Address,
    buyer: Address,
    payment_token: Address,
    payment_amount: i128,
    royalty_amount: i128,
) {
    let event = TransferCompletedEvent {
        asset: asset.clone(),
        amount,
        owner: owner.clone(),
        buyer: buyer.clone(),
        payment_token,
        payment_amount,
        royalty_amount,
    };
    env.events().publish(("transfer_completed", asset, owner, buyer), event);
}

pub fn emit_royalty_free_move(env: &Env, asset: Address, amount: i128, from: Address, to: Address) {
    let event = RoyaltyFreeMoveEvent {
        asset: asset.clone(),
        amount,
        from: from.clone(),
        to,
    };
    env.events().publish(("royalty_free_move", asset, from), event);
}
