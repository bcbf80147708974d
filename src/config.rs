multiversx_sc::imports!();

use crate::errors::ERR_INVALID_CONFIG;

#[multiversx_sc::module]
pub trait ConfigModule {
    #[only_owner]
    #[endpoint(setVoteCooldown)]
    fn set_vote_cooldown(&self, cooldown: u64) {
        self.vote_cooldown().set(cooldown);
    }

    fn require_valid_token(&self, token_id: &TokenIdentifier) {
        require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_CONFIG);
    }

    // ── Configuration ──

    #[view(getLockedTokenId)]
    #[storage_mapper("lockedTokenId")]
    fn locked_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRewardTokenId)]
    #[storage_mapper("rewardTokenId")]
    fn reward_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getVoteCooldown)]
    #[storage_mapper("voteCooldown")]
    fn vote_cooldown(&self) -> SingleValueMapper<u64>;
}
