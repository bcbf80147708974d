multiversx_sc::imports!();

use crate::constants::{BPS_DENOMINATOR, MAX_DESTINATIONS};
use crate::errors::*;
use crate::types::{allocated_weight, saturating_sub, weight_share_bps, VoteRecord};

/// Turns participants' voting power into per-destination weight shares.
///
/// A vote commits `power * bps / 10000` of the caller's current voting power
/// to a destination. A destination's share is its committed weight over the
/// total committed to registered destinations, truncated at its cap.
#[multiversx_sc::module]
pub trait GaugeModule:
    crate::config::ConfigModule
    + crate::escrow::EscrowModule
    + crate::supply::SupplyModule
    + crate::vote_weights::VoteWeightsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: vote
    // Sets the caller's allocation on one destination, replacing any
    // previous allocation there once the cooldown has elapsed.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, destination: ManagedAddress, bps: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        require!(bps > 0 && bps <= BPS_DENOMINATOR, ERR_INVALID_BPS);
        require!(
            self.destinations().contains(&destination),
            ERR_DESTINATION_NOT_REGISTERED
        );

        let power = self.weight_of_at(&caller, now);
        require!(power > 0u64, ERR_ZERO_VOTING_POWER);

        let record_mapper = self.vote_records(&caller, &destination);
        let previous = if record_mapper.is_empty() {
            None
        } else {
            Some(record_mapper.get())
        };

        let mut previous_bps = 0u64;
        if let Some(record) = &previous {
            require!(
                now >= record.last_vote_time + self.vote_cooldown().get(),
                ERR_COOLDOWN_ACTIVE
            );
            previous_bps = record.allocated_bps;
        }

        let new_allocated = self.allocated_bps(&caller).get() - previous_bps + bps;
        require!(
            new_allocated <= BPS_DENOMINATOR,
            ERR_ALLOCATION_EXCEEDS_100_PERCENT
        );

        if let Some(record) = &previous {
            self.unweigh(&destination, &record.weight);
        }
        let weight = allocated_weight(&power, bps);
        self.weigh(&destination, &weight);

        record_mapper.set(VoteRecord {
            allocated_bps: bps,
            weight,
            last_vote_time: now,
        });
        self.allocated_bps(&caller).set(new_allocated);
        self.voted_destinations(&caller).insert(destination.clone());

        let share = self.destination_share_bps(&destination);
        self.vote_cast_event(&caller, &destination, bps, share);
    }

    // ========================================================
    // ENDPOINT: clearVote
    // Frees the allocation immediately, ignoring the cooldown.
    // Also works on unregistered destinations.
    // ========================================================

    #[endpoint(clearVote)]
    fn clear_vote(&self, destination: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let record_mapper = self.vote_records(&caller, &destination);
        require!(!record_mapper.is_empty(), ERR_NO_VOTE);

        let record = record_mapper.get();
        self.unweigh(&destination, &record.weight);
        record_mapper.clear();
        self.allocated_bps(&caller)
            .update(|allocated| *allocated -= record.allocated_bps);
        self.voted_destinations(&caller).swap_remove(&destination);

        let share = self.destination_share_bps(&destination);
        self.vote_cleared_event(&caller, &destination, share);
    }

    // ========================================================
    // ENDPOINT: poke
    // Re-weighs every allocation of `participant` at their current
    // voting power, which keeps decaying between lock mutations.
    // ========================================================

    #[endpoint(poke)]
    fn poke(&self, participant: ManagedAddress) {
        let now = self.blockchain().get_block_timestamp();
        let power = self.weight_of_at(&participant, now);
        self.reweigh_votes(&participant, &power);
        self.votes_poked_event(&participant, &power);
    }

    // ========================================================
    // ADMIN
    // ========================================================

    #[only_owner]
    #[endpoint(registerDestination)]
    fn register_destination(&self, destination: ManagedAddress) {
        require!(!destination.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            !self.destinations().contains(&destination),
            ERR_DESTINATION_ALREADY_REGISTERED
        );
        require!(
            self.destinations().len() < MAX_DESTINATIONS,
            ERR_TOO_MANY_DESTINATIONS
        );

        self.destinations().insert(destination.clone());
        // votes kept while unregistered count again
        let weight = self.destination_weight(&destination).get();
        self.total_destination_weight()
            .update(|total| *total += &weight);

        self.destination_registered_event(&destination);
    }

    #[only_owner]
    #[endpoint(unregisterDestination)]
    fn unregister_destination(&self, destination: ManagedAddress) {
        require!(
            self.destinations().swap_remove(&destination),
            ERR_DESTINATION_NOT_REGISTERED
        );

        let weight = self.destination_weight(&destination).get();
        self.total_destination_weight().update(|total| {
            let remaining = saturating_sub(total, &weight);
            *total = remaining;
        });

        self.destination_unregistered_event(&destination);
    }

    #[only_owner]
    #[endpoint(setCap)]
    fn set_cap(&self, destination: ManagedAddress, cap_bps: u64) {
        require!(cap_bps <= BPS_DENOMINATOR, ERR_INVALID_CAP);
        require!(
            self.destinations().contains(&destination),
            ERR_DESTINATION_NOT_REGISTERED
        );

        self.destination_cap(&destination).set(cap_bps);
        self.cap_set_event(&destination, cap_bps);
    }

    #[only_owner]
    #[endpoint(removeCap)]
    fn remove_cap(&self, destination: ManagedAddress) {
        self.destination_cap(&destination).clear();
        self.cap_removed_event(&destination);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn destination_share_bps(&self, destination: &ManagedAddress) -> u64 {
        if !self.destinations().contains(destination) {
            return 0;
        }
        let cap_mapper = self.destination_cap(destination);
        let cap = if cap_mapper.is_empty() {
            None
        } else {
            Some(cap_mapper.get())
        };
        weight_share_bps(
            &self.destination_weight(destination).get(),
            &self.total_destination_weight().get(),
            cap,
        )
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getWeightShareBps)]
    fn get_weight_share_bps(&self, destination: &ManagedAddress) -> u64 {
        self.destination_share_bps(destination)
    }

    #[view(getDestinations)]
    fn get_destinations(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for destination in self.destinations().iter() {
            result.push(destination);
        }
        result
    }

    #[view(getCap)]
    fn get_cap(&self, destination: &ManagedAddress) -> OptionalValue<u64> {
        let cap_mapper = self.destination_cap(destination);
        if cap_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(cap_mapper.get())
        }
    }

    #[view(getVoteRecord)]
    fn get_vote_record(
        &self,
        participant: &ManagedAddress,
        destination: &ManagedAddress,
    ) -> OptionalValue<VoteRecord<Self::Api>> {
        let record_mapper = self.vote_records(participant, destination);
        if record_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(record_mapper.get())
        }
    }

    #[view(getVotedDestinations)]
    fn get_voted_destinations(
        &self,
        participant: &ManagedAddress,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for destination in self.voted_destinations(participant).iter() {
            result.push(destination);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("destinationCap")]
    fn destination_cap(&self, destination: &ManagedAddress) -> SingleValueMapper<u64>;
}
