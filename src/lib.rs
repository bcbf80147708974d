#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod constants;
pub mod emission;
pub mod errors;
pub mod escrow;
pub mod events;
pub mod gauges;
pub mod reward_stream_proxy;
pub mod supply;
pub mod types;
pub mod vote_weights;

use constants::{MAX_LOCK_DURATION, WEEK};
use errors::ERR_INVALID_CONFIG;
use types::{EpochCursor, SupplyPoint};

// ============================================================
// Contract
//
// Vote-escrow ledger, aggregate supply tracker, gauge weights and
// epoch emission split, each in its own module.
// ============================================================

#[multiversx_sc::contract]
pub trait VeEmissions:
    config::ConfigModule
    + escrow::EscrowModule
    + supply::SupplyModule
    + gauges::GaugeModule
    + emission::EmissionModule
    + vote_weights::VoteWeightsModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        locked_token_id: TokenIdentifier,
        reward_token_id: TokenIdentifier,
        epoch_length: u64,
        first_epoch_at: u64,
        vote_cooldown: u64,
    ) {
        self.require_valid_token(&locked_token_id);
        self.require_valid_token(&reward_token_id);
        require!(epoch_length > 0 && first_epoch_at > 0, ERR_INVALID_CONFIG);

        self.locked_token_id().set(&locked_token_id);
        self.reward_token_id().set(&reward_token_id);
        self.vote_cooldown().set(vote_cooldown);

        self.epoch_cursor().set(EpochCursor {
            epoch_length,
            next_epoch_at: first_epoch_at,
            epoch_index: 0,
        });

        let now = self.blockchain().get_block_timestamp();
        self.supply_point().set(SupplyPoint::new(now));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// (locked token, reward token, vote cooldown, week, max lock duration)
    #[view(getContractConfig)]
    fn get_contract_config(
        &self,
    ) -> MultiValue5<TokenIdentifier, TokenIdentifier, u64, u64, u64> {
        (
            self.locked_token_id().get(),
            self.reward_token_id().get(),
            self.vote_cooldown().get(),
            WEEK,
            MAX_LOCK_DURATION,
        )
            .into()
    }
}
