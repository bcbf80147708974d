multiversx_sc::imports!();

use crate::constants::BPS_DENOMINATOR;
use crate::errors::*;
use crate::reward_stream_proxy;
use crate::types::{share_of, DistributionShare, EpochCursor};

#[multiversx_sc::module]
pub trait EmissionModule:
    crate::config::ConfigModule
    + crate::escrow::EscrowModule
    + crate::supply::SupplyModule
    + crate::gauges::GaugeModule
    + crate::vote_weights::VoteWeightsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: distribute
    // Once per epoch: splits the paid reward tokens plus the carried
    // rounding residue across destinations by weight share.
    // ========================================================

    #[payable("*")]
    #[endpoint(distribute)]
    fn distribute(&self) {
        let now = self.blockchain().get_block_timestamp();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.reward_token_id().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_FUNDING);

        let mut cursor = self.epoch_cursor().get();
        require!(cursor.is_ready(now), ERR_EPOCH_NOT_READY);
        require!(!self.destinations().is_empty(), ERR_NO_DESTINATIONS);

        let available = &payment.amount + &self.carried_balance().get();
        let plan = self.distribution_plan(&available);

        let mut distributed = BigUint::zero();
        for share in plan.iter() {
            distributed += &share.amount;
        }
        let carried = &available - &distributed;

        let epoch_index = cursor.epoch_index;
        cursor.advance();
        self.epoch_cursor().set(&cursor);
        self.carried_balance().set(&carried);

        let token_id = self.reward_token_id().get();
        for share in plan.iter() {
            if share.amount == 0u64 {
                continue;
            }
            self.tx()
                .to(&share.destination)
                .typed(reward_stream_proxy::RewardStreamProxy)
                .notify_reward_amount()
                .single_esdt(&token_id, 0, &share.amount)
                .sync_call();
            self.emission_distributed_event(epoch_index, &share.destination, &share.amount);
        }

        self.epoch_advanced_event(cursor.epoch_index, cursor.next_epoch_at, &carried);
    }

    #[only_owner]
    #[endpoint(setEpochLength)]
    fn set_epoch_length(&self, epoch_length: u64) {
        require!(epoch_length > 0, ERR_INVALID_CONFIG);
        self.epoch_cursor()
            .update(|cursor| cursor.epoch_length = epoch_length);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn distribution_plan(&self, available: &BigUint) -> ManagedVec<DistributionShare<Self::Api>> {
        let mut plan = ManagedVec::new();
        let mut total_bps = 0u64;

        for destination in self.destinations().iter() {
            let share_bps = self.destination_share_bps(&destination);
            total_bps += share_bps;
            plan.push(DistributionShare {
                amount: share_of(available, share_bps),
                destination,
                share_bps,
            });
        }

        require!(total_bps <= BPS_DENOMINATOR, ERR_SHARES_EXCEED_100_PERCENT);
        plan
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Split `amount` plus the carried residue would receive right now.
    #[view(previewDistribution)]
    fn preview_distribution(
        &self,
        amount: BigUint,
    ) -> MultiValueEncoded<DistributionShare<Self::Api>> {
        let available = &amount + &self.carried_balance().get();
        let mut result = MultiValueEncoded::new();
        for share in self.distribution_plan(&available).iter() {
            result.push(share);
        }
        result
    }

    #[view(getEpochCursor)]
    fn get_epoch_cursor(&self) -> EpochCursor {
        self.epoch_cursor().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("epochCursor")]
    fn epoch_cursor(&self) -> SingleValueMapper<EpochCursor>;

    /// Rounding residue and unallocated share kept for the next epoch
    #[view(getCarriedBalance)]
    #[storage_mapper("carriedBalance")]
    fn carried_balance(&self) -> SingleValueMapper<BigUint>;
}
