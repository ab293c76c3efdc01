#![no_std]

mod errors;
mod storage;
mod types;

pub use errors::Error;

use escrow_lib::clock;
use escrow_lib::router::{self, Transfer};
use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, Vec};
use types::{Auction, AuctionPhase};

/// Creator's cut of a winning bid, floored.
fn fee_share(amount: i128, fee_percent: u32) -> i128 {
    amount * fee_percent as i128 / 100
}

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// Fix the auction parameters for this instance. One-shot; everything but
    /// the lead bid, escrowed amount and phase is immutable afterwards. No
    /// funds move here.
    pub fn create(
        env: Env,
        creator: Address,
        seller: Address,
        nft: Address,
        bid_token: Address,
        start_time: u64,
        end_time: u64,
        reserve_amount: i128,
        min_bid_increment: i128,
        fee_percent: u32,
    ) -> Result<(), Error> {
        creator.require_auth();

        if storage::has_auction(&env) {
            return Err(Error::AlreadyCreated);
        }
        if fee_percent > 100 {
            return Err(Error::InvalidFeePercent);
        }
        if !clock::is_before(&env, start_time) || start_time >= end_time {
            return Err(Error::InvalidTimeWindow);
        }
        if reserve_amount < 0 || min_bid_increment < 0 {
            return Err(Error::InvalidAmount);
        }

        let auction = Auction {
            creator,
            seller,
            nft,
            nft_amount: 0,
            bid_token,
            start_time,
            end_time,
            reserve_amount,
            min_bid_increment,
            fee_percent,
            lead_bid_amount: 0,
            lead_bidder: None,
            num_bids: 0,
            phase: AuctionPhase::AwaitingSetup,
        };
        storage::save_auction(&env, &auction);

        Ok(())
    }

    /// Escrow the auctioned asset and open the auction for bidding. Must
    /// happen before the start of the bidding window, and only the seller or
    /// the creator may supply the asset. The explicit phase flip makes a
    /// second setup attempt fail deterministically.
    pub fn setup(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        let mut auction = storage::get_auction(&env).ok_or(Error::NotCreated)?;
        match auction.phase {
            AuctionPhase::AwaitingSetup => {}
            AuctionPhase::Open => return Err(Error::AlreadySetup),
            AuctionPhase::Closed => return Err(Error::AlreadyClosed),
        }
        if from != auction.seller && from != auction.creator {
            return Err(Error::Unauthorized);
        }
        if !clock::is_before(&env, auction.start_time) {
            return Err(Error::SetupTooLate);
        }
        if amount < 1 {
            return Err(Error::InvalidAmount);
        }

        token::TokenClient::new(&env, &auction.nft).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        auction.nft_amount = amount;
        auction.phase = AuctionPhase::Open;
        storage::save_auction(&env, &auction);

        Ok(())
    }

    /// Place a bid. The bid amount is escrowed with the contract; the
    /// displaced lead bidder, if any, is refunded in full. A bid that does not
    /// beat the current lead by at least the minimum increment is declined
    /// with `BidTooLow`; the first bid competes against a lead of zero.
    pub fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = storage::get_auction(&env).ok_or(Error::NotCreated)?;
        match auction.phase {
            AuctionPhase::AwaitingSetup => return Err(Error::NotSetup),
            AuctionPhase::Open => {}
            AuctionPhase::Closed => return Err(Error::AlreadyClosed),
        }
        if clock::is_before(&env, auction.start_time) {
            return Err(Error::AuctionNotStarted);
        }
        if clock::has_reached(&env, auction.end_time) {
            return Err(Error::AuctionEnded);
        }
        if amount < auction.lead_bid_amount + auction.min_bid_increment {
            return Err(Error::BidTooLow);
        }

        token::TokenClient::new(&env, &auction.bid_token).transfer(
            &bidder,
            &env.current_contract_address(),
            &amount,
        );

        if let Some(previous) = auction.lead_bidder.clone() {
            router::route(
                &env,
                &vec![
                    &env,
                    Transfer::new(&auction.bid_token, &previous, auction.lead_bid_amount),
                ],
            );
        }

        auction.lead_bid_amount = amount;
        auction.lead_bidder = Some(bidder);
        auction.num_bids += 1;
        storage::save_auction(&env, &auction);

        Ok(())
    }

    /// Terminate the auction and release everything held in escrow.
    ///
    /// Before the start of the window, only the seller or the creator may
    /// close; the asset goes back to the seller. At or after the end, anyone
    /// may close: with the reserve met the asset goes to the lead bidder and
    /// the bid, less the fee share, to the seller; with the reserve missed the
    /// asset returns to the seller and the bid is refunded. Any residual bid
    /// currency is swept to the creator, draining the escrow. Closing during
    /// the open window is rejected.
    pub fn close(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction = storage::get_auction(&env).ok_or(Error::NotCreated)?;
        if auction.phase == AuctionPhase::Closed {
            return Err(Error::AlreadyClosed);
        }

        let mut intents: Vec<Transfer> = Vec::new(&env);

        if clock::is_before(&env, auction.start_time) {
            if caller != auction.seller && caller != auction.creator {
                return Err(Error::Unauthorized);
            }
            if auction.phase == AuctionPhase::Open {
                intents.push_back(Transfer::new(
                    &auction.nft,
                    &auction.seller,
                    auction.nft_amount,
                ));
            }
        } else if clock::has_reached(&env, auction.end_time) {
            if auction.phase == AuctionPhase::Open {
                match auction.lead_bidder.clone() {
                    Some(bidder) if auction.lead_bid_amount >= auction.reserve_amount => {
                        intents.push_back(Transfer::new(
                            &auction.nft,
                            &bidder,
                            auction.nft_amount,
                        ));
                        let fee = fee_share(auction.lead_bid_amount, auction.fee_percent);
                        intents.push_back(Transfer::new(
                            &auction.bid_token,
                            &auction.seller,
                            auction.lead_bid_amount - fee,
                        ));
                    }
                    Some(bidder) => {
                        intents.push_back(Transfer::new(
                            &auction.nft,
                            &auction.seller,
                            auction.nft_amount,
                        ));
                        intents.push_back(Transfer::new(
                            &auction.bid_token,
                            &bidder,
                            auction.lead_bid_amount,
                        ));
                    }
                    None => {
                        intents.push_back(Transfer::new(
                            &auction.nft,
                            &auction.seller,
                            auction.nft_amount,
                        ));
                    }
                }
            }
        } else {
            return Err(Error::AuctionStillOpen);
        }

        // Whatever bid currency remains after the payouts above (the fee
        // share, or stray deposits) is swept to the creator.
        let held = token::TokenClient::new(&env, &auction.bid_token)
            .balance(&env.current_contract_address());
        let mut paid: i128 = 0;
        for intent in intents.iter() {
            if intent.token == auction.bid_token {
                paid += intent.amount;
            }
        }
        let residual = held - paid;
        if residual > 0 {
            intents.push_back(Transfer::new(
                &auction.bid_token,
                &auction.creator,
                residual,
            ));
        }

        router::route(&env, &intents);

        auction.phase = AuctionPhase::Closed;
        storage::save_auction(&env, &auction);

        Ok(())
    }

    pub fn get_auction(env: Env) -> Result<Auction, Error> {
        storage::get_auction(&env).ok_or(Error::NotCreated)
    }

    pub fn get_lead_bid(env: Env) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env).ok_or(Error::NotCreated)?;
        Ok((auction.lead_bidder, auction.lead_bid_amount))
    }

    pub fn get_num_bids(env: Env) -> Result<u64, Error> {
        let auction = storage::get_auction(&env).ok_or(Error::NotCreated)?;
        Ok(auction.num_bids)
    }
}

#[cfg(test)]
mod test;
