
use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const START_TIME: u64 = 100;
pub const END_TIME: u64 = 1_000;
pub const RESERVE: i128 = 1_000_000;
pub const MIN_INCREMENT: i128 = 100_000;
pub const FEE_PERCENT: u32 = 5;

pub struct AuctionFixture {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub contract_id: Address,
    pub creator: Address,
    pub seller: Address,
    pub nft: token::TokenClient<'static>,
    pub nft_admin: token::StellarAssetClient<'static>,
    pub bid_token: token::TokenClient<'static>,
    pub bid_token_admin: token::StellarAssetClient<'static>,
}

pub fn setup_test() -> AuctionFixture {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, AuctionContract);
    let client = AuctionContractClient::new(&env, &contract_id);

    let creator = Address::generate(&env);
    let seller = Address::generate(&env);

    let nft_issuer = Address::generate(&env);
    let nft_contract = env.register_stellar_asset_contract_v2(nft_issuer);
    let nft_address = nft_contract.address();
    let nft = token::TokenClient::new(&env, &nft_address);
    let nft_admin = token::StellarAssetClient::new(&env, &nft_address);
    nft_admin.mint(&seller, &1);

    let bid_issuer = Address::generate(&env);
    let bid_contract = env.register_stellar_asset_contract_v2(bid_issuer);
    let bid_address = bid_contract.address();
    let bid_token = token::TokenClient::new(&env, &bid_address);
    let bid_token_admin = token::StellarAssetClient::new(&env, &bid_address);

    AuctionFixture {
        env,
        client,
        contract_id,
        creator,
        seller,
        nft,
        nft_admin,
        bid_token,
        bid_token_admin,
    }
}

pub fn create_auction(f: &AuctionFixture) {
    f.client.create(
        &f.creator,
        &f.seller,
        &f.nft.address,
        &f.bid_token.address,
        &START_TIME,
        &END_TIME,
        &RESERVE,
        &MIN_INCREMENT,
        &FEE_PERCENT,
    );
}

pub fn open_auction(f: &AuctionFixture) {
    create_auction(f);
    f.client.setup(&f.seller, &1);
}

pub fn funded_bidder(f: &AuctionFixture, amount: i128) -> Address {
    let bidder = Address::generate(&f.env);
    f.bid_token_admin.mint(&bidder, &amount);
    bidder
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|l| l.timestamp += seconds);
}
