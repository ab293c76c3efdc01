#![no_std]

mod admin;
mod errors;
mod events;
mod offers;
mod storage;
mod types;

pub use errors::Error;

use escrow_lib::router::{self, Transfer};
use soroban_sdk::{contract, contractimpl, token, vec, Address, Env};
use types::{Offer, RoyaltyPolicy};

/// 100% in basis points.
const ROYALTY_BASIS_MAX: u32 = 10_000;

/// Royalty cut of a payment, floored. The remainder goes to the owner, so
/// owner share + royalty == payment for every input.
fn royalty_share(payment: i128, basis_points: u32) -> i128 {
    payment * basis_points as i128 / ROYALTY_BASIS_MAX as i128
}

#[contract]
pub struct RoyaltyEnforcerContract;

#[contractimpl]
impl RoyaltyEnforcerContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_administrator(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_administrator(&env, &admin);
        Ok(())
    }

    pub fn set_administrator(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        let old_admin = admin::require_administrator(&env, &caller)?;
        storage::set_administrator(&env, &new_admin);
        events::emit_administrator_changed(&env, old_admin, new_admin);
        Ok(())
    }

    pub fn get_administrator(env: Env) -> Result<Address, Error> {
        storage::get_administrator(&env).ok_or(Error::NotInitialized)
    }

    /// Fix the royalty terms. One-time: once a policy is stored it can never
    /// be replaced, so holders can rely on the rate they offered under.
    pub fn set_policy(
        env: Env,
        caller: Address,
        basis_points: u32,
        receiver: Address,
    ) -> Result<(), Error> {
        admin::require_administrator(&env, &caller)?;
        if storage::has_policy(&env) {
            return Err(Error::PolicyAlreadySet);
        }
        if basis_points > ROYALTY_BASIS_MAX {
            return Err(Error::InvalidBasisPoints);
        }
        let policy = RoyaltyPolicy {
            basis_points,
            receiver: receiver.clone(),
        };
        storage::set_policy(&env, &policy);
        events::emit_policy_set(&env, basis_points, receiver);
        Ok(())
    }

    pub fn get_policy(env: Env) -> Result<RoyaltyPolicy, Error> {
        storage::get_policy(&env).ok_or(Error::PolicyNotSet)
    }

    /// Admit or retire a settlement currency. Retiring a token sweeps any
    /// residual contract balance of it to the administrator for recovery.
    /// Repeating the current state is a no-op.
    pub fn set_payment_asset(
        env: Env,
        caller: Address,
        asset: Address,
        allow: bool,
    ) -> Result<(), Error> {
        admin::require_administrator(&env, &caller)?;

        let allowed = storage::is_payment_asset(&env, &asset);
        if allow && !allowed {
            storage::allow_payment_asset(&env, &asset);
        } else if !allow && allowed {
            storage::disallow_payment_asset(&env, &asset);
            let held = token::TokenClient::new(&env, &asset)
                .balance(&env.current_contract_address());
            if held > 0 {
                router::route(&env, &vec![&env, Transfer::new(&asset, &caller, held)]);
            }
        } else {
            return Ok(());
        }

        events::emit_payment_asset_updated(&env, asset, allow);
        Ok(())
    }

    pub fn is_payment_asset(env: Env, asset: Address) -> bool {
        storage::is_payment_asset(&env, &asset)
    }

    /// Create, update or withdraw an offer. Guarded by compare-and-swap: the
    /// caller must restate the currently stored `(prev_amount,
    /// prev_authorized)` pair, with `(0, None)` standing for no offer. The
    /// offered units are held in contract custody, so raising an offer pulls
    /// the difference from the owner and lowering one refunds it; a zero
    /// amount deletes the record and returns everything.
    pub fn offer(
        env: Env,
        owner: Address,
        asset: Address,
        amount: i128,
        authorized: Address,
        prev_amount: i128,
        prev_authorized: Option<Address>,
    ) -> Result<(), Error> {
        owner.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let stored = storage::get_offer(&env, &owner, &asset);
        offers::check_previous(&stored, prev_amount, &prev_authorized)?;

        let held = stored.map(|o| o.amount).unwrap_or(0);
        let client = token::TokenClient::new(&env, &asset);
        if amount > held {
            let delta = amount - held;
            if client.balance(&owner) < delta {
                return Err(Error::InsufficientBalance);
            }
            client.transfer(&owner, &env.current_contract_address(), &delta);
        } else if amount < held {
            router::route(
                &env,
                &vec![&env, Transfer::new(&asset, &owner, held - amount)],
            );
        }

        offers::write(&env, &owner, &asset, &authorized, amount);
        events::emit_offer_updated(&env, owner, asset, authorized, amount);
        Ok(())
    }

    pub fn get_offer(env: Env, owner: Address, asset: Address) -> Result<Offer, Error> {
        storage::get_offer(&env, &owner, &asset).ok_or(Error::OfferNotFound)
    }

    /// Settle a regulated purchase. The caller must be the address the owner
    /// authorized; the payment is pulled from the caller, split between the
    /// owner and the royalty receiver by the policy rate, and the offered
    /// units move from custody to the buyer. The stored offer is decremented
    /// through the same compare-and-swap write used by `offer`.
    pub fn transfer(
        env: Env,
        authorized: Address,
        asset: Address,
        amount: i128,
        owner: Address,
        buyer: Address,
        royalty_account: Address,
        payment_token: Address,
        payment_amount: i128,
        prev_offered_amount: i128,
    ) -> Result<(), Error> {
        authorized.require_auth();
        if amount <= 0 || payment_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let policy = storage::get_policy(&env).ok_or(Error::PolicyNotSet)?;
        if !storage::is_payment_asset(&env, &payment_token) {
            return Err(Error::PaymentAssetNotAllowed);
        }

        let stored = storage::get_offer(&env, &owner, &asset).ok_or(Error::OfferNotFound)?;
        if stored.authorized != authorized {
            return Err(Error::Unauthorized);
        }
        if stored.amount != prev_offered_amount {
            return Err(Error::OfferMismatch);
        }
        if amount > stored.amount {
            return Err(Error::InsufficientOffer);
        }
        if royalty_account != policy.receiver {
            return Err(Error::RoyaltyReceiverMismatch);
        }

        // Incoming payment leg: the full price lands in custody first, then
        // the split and the asset move are routed out of it.
        if payment_amount > 0 {
            token::TokenClient::new(&env, &payment_token).transfer(
                &authorized,
                &env.current_contract_address(),
                &payment_amount,
            );
        }

        let royalty = royalty_share(payment_amount, policy.basis_points);
        let intents = vec![
            &env,
            Transfer::new(&payment_token, &owner, payment_amount - royalty),
            Transfer::new(&payment_token, &royalty_account, royalty),
            Transfer::new(&asset, &buyer, amount),
        ];
        router::route(&env, &intents);

        offers::write(&env, &owner, &asset, &stored.authorized, stored.amount - amount);
        events::emit_transfer_completed(
            &env,
            asset,
            amount,
            owner,
            buyer,
            payment_token,
            payment_amount,
            royalty,
        );
        Ok(())
    }

    /// Administrative recovery path: moves offered units with no payment and
    /// no royalty. Only usable when the owner explicitly authorized the
    /// current administrator in the offer itself.
    pub fn royalty_free_move(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        from: Address,
        to: Address,
        prev_offered_amount: i128,
    ) -> Result<(), Error> {
        let admin = admin::require_administrator(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let stored = storage::get_offer(&env, &from, &asset).ok_or(Error::OfferNotFound)?;
        if stored.authorized != admin {
            return Err(Error::Unauthorized);
        }
        if stored.amount != prev_offered_amount {
            return Err(Error::OfferMismatch);
        }
        if amount > stored.amount {
            return Err(Error::InsufficientOffer);
        }

        router::route(&env, &vec![&env, Transfer::new(&asset, &to, amount)]);

        offers::write(&env, &from, &asset, &stored.authorized, stored.amount - amount);
        events::emit_royalty_free_move(&env, asset, amount, from, to);
        Ok(())
    }
}

#[cfg(test)]
mod test;
