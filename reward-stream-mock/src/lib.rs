#![no_std]

multiversx_sc::imports!();

/// Stand-in for a destination's reward stream. Accepts emission shares and
/// records how much arrived from each distributor.
#[multiversx_sc::contract]
pub trait RewardStreamMock {
    #[init]
    fn init(&self) {}

    #[payable("*")]
    #[endpoint(notifyRewardAmount)]
    fn notify_reward_amount(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        self.received(&caller)
            .update(|total| *total += &payment.amount);
        self.notify_count().update(|count| *count += 1);
    }

    #[view(getReceived)]
    #[storage_mapper("received")]
    fn received(&self, distributor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getNotifyCount)]
    #[storage_mapper("notifyCount")]
    fn notify_count(&self) -> SingleValueMapper<u64>;
}
