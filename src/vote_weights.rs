multiversx_sc::imports!();

use crate::types::{allocated_weight, saturating_sub, VoteRecord};

/// Per-destination vote weight bookkeeping shared by the escrow and the
/// gauges. Every lock mutation re-weighs the owner's allocations so that
/// destination weights follow voting power.
#[multiversx_sc::module]
pub trait VoteWeightsModule {
    /// Recomputes every allocation of `participant` from `power`.
    /// Allocations and cooldowns are left as they are.
    fn reweigh_votes(&self, participant: &ManagedAddress, power: &BigUint) {
        for destination in self.voted_destinations(participant).iter() {
            let record_mapper = self.vote_records(participant, &destination);
            let mut record = record_mapper.get();

            self.unweigh(&destination, &record.weight);
            record.weight = allocated_weight(power, record.allocated_bps);
            self.weigh(&destination, &record.weight);
            record_mapper.set(&record);
        }
    }

    fn weigh(&self, destination: &ManagedAddress, weight: &BigUint) {
        self.destination_weight(destination)
            .update(|current| *current += weight);
        if self.destinations().contains(destination) {
            self.total_destination_weight()
                .update(|total| *total += weight);
        }
    }

    fn unweigh(&self, destination: &ManagedAddress, weight: &BigUint) {
        self.destination_weight(destination).update(|current| {
            let remaining = saturating_sub(current, weight);
            *current = remaining;
        });
        if self.destinations().contains(destination) {
            self.total_destination_weight().update(|total| {
                let remaining = saturating_sub(total, weight);
                *total = remaining;
            });
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("destinations")]
    fn destinations(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getDestinationWeight)]
    #[storage_mapper("destinationWeight")]
    fn destination_weight(&self, destination: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Sum of `destinationWeight` over registered destinations only
    #[view(getTotalDestinationWeight)]
    #[storage_mapper("totalDestinationWeight")]
    fn total_destination_weight(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        participant: &ManagedAddress,
        destination: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[view(getAllocatedBps)]
    #[storage_mapper("allocatedBps")]
    fn allocated_bps(&self, participant: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("votedDestinations")]
    fn voted_destinations(&self, participant: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
