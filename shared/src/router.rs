use soroban_sdk::{contracttype, token, Address, Env, Vec};

/// One outbound movement from the contract's own custodial balance.
///
/// Contract logic validates an operation first, accumulates the resulting
/// payouts as intents, and only then hands the whole batch to [`route`]. The
/// decision step stays free of token calls and can be inspected before any
/// balance moves.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

impl Transfer {
    pub fn new(token: &Address, to: &Address, amount: i128) -> Self {
        Transfer {
            token: token.clone(),
            to: to.clone(),
            amount,
        }
    }
}

/// Execute a batch of transfer intents from the current contract's balance.
///
/// Zero-amount intents are skipped, so callers may push conditional shares
/// (royalty cuts, residual sweeps) without special-casing emptiness. Must be
/// called from within a contract invocation; the host aborts the whole
/// invocation if any leg cannot be paid, which keeps the batch atomic.
pub fn route(env: &Env, intents: &Vec<Transfer>) {
    let from = env.current_contract_address();
    for intent in intents.iter() {
        if intent.amount > 0 {
            token::TokenClient::new(env, &intent.token).transfer(&from, &intent.to, &intent.amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{contract, contractimpl, vec};

    #[contract]
    struct RouterHarness;

    #[contractimpl]
    impl RouterHarness {}

    #[test]
    fn routes_batch_and_skips_zero_amounts() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, RouterHarness);

        let issuer = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(issuer.clone());
        let token_address = sac.address();
        let token_admin = token::StellarAssetClient::new(&env, &token_address);
        let token_client = token::TokenClient::new(&env, &token_address);

        token_admin.mint(&contract_id, &1_000);

        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        let intents = vec![
            &env,
            Transfer::new(&token_address, &alice, 600),
            Transfer::new(&token_address, &bob, 0),
            Transfer::new(&token_address, &bob, 400),
        ];

        env.as_contract(&contract_id, || {
            route(&env, &intents);
        });

        assert_eq!(token_client.balance(&alice), 600);
        assert_eq!(token_client.balance(&bob), 400);
        assert_eq!(token_client.balance(&contract_id), 0);
    }
}
