use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

/// Authenticate `caller` and check it against the stored administrator.
/// Returns the administrator address for further comparisons.
pub fn require_administrator(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let admin = storage::get_administrator(env).ok_or(Error::NotInitialized)?;
    if caller != &admin {
        return Err(Error::Unauthorized);
    }
    Ok(admin)
}
