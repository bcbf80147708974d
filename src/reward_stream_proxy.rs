use multiversx_sc::proxy_imports::*;

/// Reward stream contract that receives a destination's emission share.
pub struct RewardStreamProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RewardStreamProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RewardStreamProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RewardStreamProxyMethods { wrapped_tx: tx }
    }
}

pub struct RewardStreamProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> RewardStreamProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: the attached ESDT is the amount being streamed.
    pub fn notify_reward_amount(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("notifyRewardAmount")
            .original_result()
    }
}
