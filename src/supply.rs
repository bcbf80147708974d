multiversx_sc::imports!();

use crate::types::{saturating_sub, LockedBalance, SupplyPoint};

/// Aggregate decaying weight of all locks, checkpointed lazily.
///
/// Lock mutations go through `apply_lock_change`, which always brings the
/// point current before touching bias, slope or the schedule.
#[multiversx_sc::module]
pub trait SupplyModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: checkpoint
    // Anyone can bring the aggregate point up to the current block.
    // ========================================================

    #[endpoint(checkpoint)]
    fn checkpoint(&self) {
        let point = self.advanced_supply_point();
        self.store_supply_point(&point);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Stored point replayed up to the current block. Does not write.
    fn advanced_supply_point(&self) -> SupplyPoint<Self::Api> {
        let now = self.blockchain().get_block_timestamp();
        self.supply_point_at(now)
    }

    fn supply_point_at(&self, timestamp: u64) -> SupplyPoint<Self::Api> {
        let mut point = self.supply_point().get();
        point.advance_to(timestamp, |week| self.slope_changes(week).get());
        point
    }

    /// Swaps a participant's contribution from `old` to `new` (either may be
    /// absent) and reschedules the slope decrements at their expiries.
    fn apply_lock_change(
        &self,
        old: Option<&LockedBalance<Self::Api>>,
        new: Option<&LockedBalance<Self::Api>>,
    ) {
        let mut point = self.advanced_supply_point();

        if let Some(old_lock) = old {
            let cancelled = point.remove_lock(old_lock);
            if cancelled > 0u64 {
                self.slope_changes(old_lock.expiry).update(|decrement| {
                    let remaining = saturating_sub(decrement, &cancelled);
                    *decrement = remaining;
                });
            }
        }

        if let Some(new_lock) = new {
            let scheduled = point.add_lock(new_lock);
            if scheduled > 0u64 {
                self.slope_changes(new_lock.expiry)
                    .update(|decrement| *decrement += &scheduled);
            }
        }

        self.store_supply_point(&point);
    }

    fn store_supply_point(&self, point: &SupplyPoint<Self::Api>) {
        self.supply_point().set(point);
        self.supply_checkpoint_event(point.timestamp, &point.bias, &point.slope);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalWeight)]
    fn get_total_weight(&self) -> BigUint {
        self.advanced_supply_point().bias
    }

    /// Timestamps before the last checkpoint are answered with the
    /// checkpoint value; no earlier history is kept.
    #[view(getTotalWeightAtTime)]
    fn get_total_weight_at_time(&self, timestamp: u64) -> BigUint {
        self.supply_point_at(timestamp).bias
    }

    #[view(getSupplyPoint)]
    fn get_supply_point(&self) -> SupplyPoint<Self::Api> {
        self.supply_point().get()
    }

    #[view(getSlopeChange)]
    fn get_slope_change(&self, week: u64) -> BigUint {
        self.slope_changes(week).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("supplyPoint")]
    fn supply_point(&self) -> SingleValueMapper<SupplyPoint<Self::Api>>;

    /// Week boundary -> scaled slope leaving the aggregate at that boundary.
    /// Never pruned.
    #[storage_mapper("slopeChanges")]
    fn slope_changes(&self, week: u64) -> SingleValueMapper<BigUint>;
}
