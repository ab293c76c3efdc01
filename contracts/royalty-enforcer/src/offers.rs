use crate::errors::Error;
use crate::storage;
use crate::types::Offer;
use soroban_sdk::{Address, Env};

/// Compare-and-swap guard on an offer record: the caller must restate the
/// offer exactly as currently stored. A missing record and a zero offer are
/// the same logical state, so absence matches `(0, None)`. A mismatch means
/// the offer changed under the caller, who must re-read and retry.
pub fn check_previous(
    stored: &Option<Offer>,
    prev_amount: i128,
    prev_authorized: &Option<Address>,
) -> Result<(), Error> {
    match stored {
        Some(offer) => {
            if offer.amount == prev_amount && prev_authorized.as_ref() == Some(&offer.authorized) {
                Ok(())
            } else {
                Err(Error::OfferMismatch)
            }
        }
        None => {
            if prev_amount == 0 && prev_authorized.is_none() {
                Ok(())
            } else {
                Err(Error::OfferMismatch)
            }
        }
    }
}

/// Persist the post-update offer, keeping the absent and zero encodings
/// interchangeable: a zero amount deletes the record.
pub fn write(env: &Env, owner: &Address, asset: &Address, authorized: &Address, amount: i128) {
    if amount > 0 {
        storage::set_offer(
            env,
            owner,
            asset,
            &Offer {
                authorized: authorized.clone(),
                amount,
            },
        );
    } else {
        storage::remove_offer(env, owner, asset);
    }
}
