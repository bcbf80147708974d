multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Escrow ──

    #[event("lockCreated")]
    fn lock_created_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] expiry: u64,
        amount: &BigUint,
    );

    #[event("lockIncreased")]
    fn lock_increased_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] expiry: u64,
        amount: &BigUint,
    );

    #[event("lockExtended")]
    fn lock_extended_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] expiry: u64,
        amount: &BigUint,
    );

    #[event("lockWithdrawn")]
    fn lock_withdrawn_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] expiry: u64,
        amount: &BigUint,
    );

    // ── Supply ──

    #[event("supplyCheckpoint")]
    fn supply_checkpoint_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] bias: &BigUint,
        slope: &BigUint,
    );

    // ── Gauges ──

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] destination: &ManagedAddress,
        #[indexed] bps: u64,
        destination_share_bps: u64,
    );

    #[event("voteCleared")]
    fn vote_cleared_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] destination: &ManagedAddress,
        destination_share_bps: u64,
    );

    #[event("votesPoked")]
    fn votes_poked_event(&self, #[indexed] participant: &ManagedAddress, power: &BigUint);

    #[event("destinationRegistered")]
    fn destination_registered_event(&self, #[indexed] destination: &ManagedAddress);

    #[event("destinationUnregistered")]
    fn destination_unregistered_event(&self, #[indexed] destination: &ManagedAddress);

    #[event("capSet")]
    fn cap_set_event(&self, #[indexed] destination: &ManagedAddress, cap_bps: u64);

    #[event("capRemoved")]
    fn cap_removed_event(&self, #[indexed] destination: &ManagedAddress);

    // ── Emission ──

    #[event("emissionDistributed")]
    fn emission_distributed_event(
        &self,
        #[indexed] epoch_index: u64,
        #[indexed] destination: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("epochAdvanced")]
    fn epoch_advanced_event(
        &self,
        #[indexed] epoch_index: u64,
        #[indexed] next_epoch_at: u64,
        carried: &BigUint,
    );
}
