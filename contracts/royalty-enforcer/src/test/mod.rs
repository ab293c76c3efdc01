
use crate::{RoyaltyEnforcerContract, RoyaltyEnforcerContractClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

pub struct EnforcerFixture {
    pub env: Env,
    pub client: RoyaltyEnforcerContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub royalty_receiver: Address,
    pub nft: token::TokenClient<'static>,
    pub nft_admin: token::StellarAssetClient<'static>,
    pub pay: token::TokenClient<'static>,
    pub pay_admin: token::StellarAssetClient<'static>,
}

pub fn setup_test() -> EnforcerFixture {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, RoyaltyEnforcerContract);
    let client = RoyaltyEnforcerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let royalty_receiver = Address::generate(&env);

    let nft_issuer = Address::generate(&env);
    let nft_contract = env.register_stellar_asset_contract_v2(nft_issuer);
    let nft_address = nft_contract.address();
    let nft = token::TokenClient::new(&env, &nft_address);
    let nft_admin = token::StellarAssetClient::new(&env, &nft_address);

    let pay_issuer = Address::generate(&env);
    let pay_contract = env.register_stellar_asset_contract_v2(pay_issuer);
    let pay_address = pay_contract.address();
    let pay = token::TokenClient::new(&env, &pay_address);
    let pay_admin = token::StellarAssetClient::new(&env, &pay_address);

    client.initialize(&admin);

    EnforcerFixture {
        env,
        client,
        contract_id,
        admin,
        royalty_receiver,
        nft,
        nft_admin,
        pay,
        pay_admin,
    }
}

/// Fixture with a royalty policy in place and the payment token admitted.
pub fn setup_with_policy(basis_points: u32) -> EnforcerFixture {
    let f = setup_test();
    f.client
        .set_policy(&f.admin, &basis_points, &f.royalty_receiver);
    f.client.set_payment_asset(&f.admin, &f.pay.address, &true);
    f
}

/// An owner holding `minted` units of the NFT token.
pub fn funded_owner(f: &EnforcerFixture, minted: i128) -> Address {
    let owner = Address::generate(&f.env);
    f.nft_admin.mint(&owner, &minted);
    owner
}
