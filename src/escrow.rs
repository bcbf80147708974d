multiversx_sc::imports!();

use crate::constants::MAX_LOCK_DURATION;
use crate::errors::*;
use crate::types::{round_up_to_week, LockedBalance};

#[multiversx_sc::module]
pub trait EscrowModule:
    crate::config::ConfigModule
    + crate::supply::SupplyModule
    + crate::vote_weights::VoteWeightsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createLock
    // Locks the paid amount until `unlock_time`, rounded up to a week.
    // ========================================================

    #[payable("*")]
    #[endpoint(createLock)]
    fn create_lock(&self, unlock_time: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let amount = self.locked_token_payment();
        let expiry = self.validated_expiry(unlock_time, now);
        require!(self.locks(&caller).is_empty(), ERR_LOCK_ALREADY_EXISTS);

        let lock = LockedBalance::new(amount, expiry);
        self.apply_lock_change(None, Some(&lock));
        self.locks(&caller).set(&lock);
        self.total_locked().update(|total| *total += &lock.amount);

        self.lock_created_event(&caller, lock.expiry, &lock.amount);
    }

    // ========================================================
    // ENDPOINT: increaseAmount / depositFor
    // Adds principal to an unexpired lock, keeping its expiry.
    // ========================================================

    #[payable("*")]
    #[endpoint(increaseAmount)]
    fn increase_amount(&self) {
        let caller = self.blockchain().get_caller();
        let added = self.locked_token_payment();
        self.add_to_lock(&caller, added);
    }

    #[payable("*")]
    #[endpoint(depositFor)]
    fn deposit_for(&self, participant: ManagedAddress) {
        require!(!participant.is_zero(), ERR_ZERO_ADDRESS);
        let added = self.locked_token_payment();
        self.add_to_lock(&participant, added);
    }

    // ========================================================
    // ENDPOINT: extendExpiry
    // ========================================================

    #[endpoint(extendExpiry)]
    fn extend_expiry(&self, new_unlock_time: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        require!(!self.locks(&caller).is_empty(), ERR_NO_ACTIVE_LOCK);
        let old_lock = self.locks(&caller).get();
        require!(!old_lock.is_expired_at(now), ERR_LOCK_EXPIRED);

        let new_expiry = round_up_to_week(new_unlock_time);
        require!(new_expiry > old_lock.expiry, ERR_NOT_AN_EXTENSION);
        require!(
            new_expiry <= now + MAX_LOCK_DURATION,
            ERR_EXPIRY_OUT_OF_RANGE
        );

        let new_lock = LockedBalance::new(old_lock.amount.clone(), new_expiry);
        self.apply_lock_change(Some(&old_lock), Some(&new_lock));
        self.locks(&caller).set(&new_lock);
        self.reweigh_votes(&caller, &new_lock.weight_at(now));

        self.lock_extended_event(&caller, new_lock.expiry, &new_lock.amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Returns the whole principal once the lock has expired.
    // Standing allocations stay but carry no weight.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        require!(!self.locks(&caller).is_empty(), ERR_NOTHING_TO_WITHDRAW);
        let lock = self.locks(&caller).get();
        require!(lock.is_expired_at(now), ERR_LOCK_NOT_EXPIRED);

        // an expired lock has already left the aggregate; this only checkpoints
        self.apply_lock_change(Some(&lock), None);
        self.locks(&caller).clear();
        self.total_locked().update(|total| *total -= &lock.amount);
        self.reweigh_votes(&caller, &BigUint::zero());

        let token_id = self.locked_token_id().get();
        self.send().direct_esdt(&caller, &token_id, 0, &lock.amount);

        self.lock_withdrawn_event(&caller, lock.expiry, &lock.amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn locked_token_payment(&self) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.locked_token_id().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_INVALID_AMOUNT);
        payment.amount.clone()
    }

    fn validated_expiry(&self, unlock_time: u64, now: u64) -> u64 {
        let expiry = round_up_to_week(unlock_time);
        require!(
            expiry > now && expiry <= now + MAX_LOCK_DURATION,
            ERR_EXPIRY_OUT_OF_RANGE
        );
        expiry
    }

    fn add_to_lock(&self, participant: &ManagedAddress, added: BigUint) {
        let now = self.blockchain().get_block_timestamp();

        require!(!self.locks(participant).is_empty(), ERR_NO_ACTIVE_LOCK);
        let old_lock = self.locks(participant).get();
        require!(!old_lock.is_expired_at(now), ERR_LOCK_EXPIRED);

        let new_lock = LockedBalance::new(&old_lock.amount + &added, old_lock.expiry);
        self.apply_lock_change(Some(&old_lock), Some(&new_lock));
        self.locks(participant).set(&new_lock);
        self.total_locked().update(|total| *total += &added);
        self.reweigh_votes(participant, &new_lock.weight_at(now));

        self.lock_increased_event(participant, new_lock.expiry, &new_lock.amount);
    }

    fn weight_of_at(&self, participant: &ManagedAddress, timestamp: u64) -> BigUint {
        let lock_mapper = self.locks(participant);
        if lock_mapper.is_empty() {
            return BigUint::zero();
        }
        lock_mapper.get().weight_at(timestamp)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCurrentWeight)]
    fn get_current_weight(&self, participant: &ManagedAddress) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        self.weight_of_at(participant, now)
    }

    /// Exact weight at any past or future timestamp; not clamped to now.
    #[view(getWeightAtTime)]
    fn get_weight_at_time(&self, participant: &ManagedAddress, timestamp: u64) -> BigUint {
        self.weight_of_at(participant, timestamp)
    }

    #[view(getLock)]
    fn get_lock(&self, participant: &ManagedAddress) -> OptionalValue<LockedBalance<Self::Api>> {
        let lock_mapper = self.locks(participant);
        if lock_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(lock_mapper.get())
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("locks")]
    fn locks(&self, participant: &ManagedAddress) -> SingleValueMapper<LockedBalance<Self::Api>>;

    #[view(getTotalLocked)]
    #[storage_mapper("totalLocked")]
    fn total_locked(&self) -> SingleValueMapper<BigUint>;
}
