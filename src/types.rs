multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::constants::{BPS_DENOMINATOR, MAX_LOCK_DURATION, SLOPE_PRECISION, WEEK};

// ============================================================
// Time helpers
// ============================================================

/// Rounds a timestamp up to the nearest week boundary.
pub fn round_up_to_week(timestamp: u64) -> u64 {
    timestamp.saturating_add(WEEK - 1) / WEEK * WEEK
}

/// First week boundary strictly after `timestamp`.
pub fn next_week_boundary(timestamp: u64) -> u64 {
    (timestamp / WEEK + 1) * WEEK
}

pub fn saturating_sub<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a > b {
        a - b
    } else {
        BigUint::zero()
    }
}

// ============================================================
// Locked Balance: one per participant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LockedBalance<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    /// Always a week boundary
    pub expiry: u64,
}

impl<M: ManagedTypeApi> LockedBalance<M> {
    pub fn new(amount: BigUint<M>, expiry: u64) -> Self {
        LockedBalance { amount, expiry }
    }

    pub fn is_expired_at(&self, timestamp: u64) -> bool {
        timestamp >= self.expiry
    }

    /// `amount * (expiry - t) / MAX_LOCK_DURATION`, zero from `expiry` on.
    /// Works for past and future timestamps alike.
    pub fn weight_at(&self, timestamp: u64) -> BigUint<M> {
        if self.is_expired_at(timestamp) {
            return BigUint::zero();
        }
        (&self.amount * (self.expiry - timestamp)) / MAX_LOCK_DURATION
    }

    /// Decay rate of this lock, scaled by `SLOPE_PRECISION`.
    pub fn slope(&self) -> BigUint<M> {
        (&self.amount * SLOPE_PRECISION) / MAX_LOCK_DURATION
    }
}

// ============================================================
// Supply Point: aggregate bias/slope of all active locks
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SupplyPoint<M: ManagedTypeApi> {
    pub bias: BigUint<M>,
    /// Scaled by `SLOPE_PRECISION`
    pub slope: BigUint<M>,
    pub timestamp: u64,
}

impl<M: ManagedTypeApi> SupplyPoint<M> {
    pub fn new(timestamp: u64) -> Self {
        SupplyPoint {
            bias: BigUint::zero(),
            slope: BigUint::zero(),
            timestamp,
        }
    }

    /// Replays linear decay from `self.timestamp` up to `target`, applying the
    /// scheduled slope decrement found at every week boundary crossed.
    ///
    /// Targets at or before the current timestamp leave the point untouched.
    /// Every lock is created at or before the last checkpoint, so no schedule
    /// entry lies past `timestamp + MAX_LOCK_DURATION + WEEK`; the week walk
    /// stops there and the rest is a single linear step. A replay therefore
    /// costs one storage read per week elapsed, never more than 210.
    pub fn advance_to<F>(&mut self, target: u64, mut scheduled_decrement: F)
    where
        F: FnMut(u64) -> BigUint<M>,
    {
        if target <= self.timestamp {
            return;
        }

        let horizon = self
            .timestamp
            .saturating_add(MAX_LOCK_DURATION + WEEK);
        let replay_end = core::cmp::min(target, horizon);

        let mut ts = self.timestamp;
        while ts < replay_end {
            let next = core::cmp::min(next_week_boundary(ts), replay_end);
            self.decay(next - ts);
            if next % WEEK == 0 {
                let decrement = scheduled_decrement(next);
                self.apply_decrement(&decrement);
            }
            ts = next;
        }

        if target > ts {
            self.decay(target - ts);
        }
        self.timestamp = target;
    }

    /// Adds a lock's contribution as of `self.timestamp`.
    /// Returns the slope that must be scheduled for removal at `lock.expiry`.
    pub fn add_lock(&mut self, lock: &LockedBalance<M>) -> BigUint<M> {
        if lock.is_expired_at(self.timestamp) {
            return BigUint::zero();
        }
        let slope = lock.slope();
        self.bias += lock.weight_at(self.timestamp);
        self.slope += &slope;
        slope
    }

    /// Takes a lock's contribution out as of `self.timestamp`.
    /// Returns the slope whose scheduled removal at `lock.expiry` must be
    /// cancelled. Expired locks were already removed by replay.
    pub fn remove_lock(&mut self, lock: &LockedBalance<M>) -> BigUint<M> {
        if lock.is_expired_at(self.timestamp) {
            return BigUint::zero();
        }
        let slope = lock.slope();
        self.bias = saturating_sub(&self.bias, &lock.weight_at(self.timestamp));
        self.slope = saturating_sub(&self.slope, &slope);
        slope
    }

    fn decay(&mut self, dt: u64) {
        if dt == 0 || self.slope == 0u64 {
            return;
        }
        let decayed = (&self.slope * dt) / SLOPE_PRECISION;
        self.bias = saturating_sub(&self.bias, &decayed);
    }

    fn apply_decrement(&mut self, decrement: &BigUint<M>) {
        if *decrement == 0u64 {
            return;
        }
        self.slope = saturating_sub(&self.slope, decrement);
        // no active lock left: drop accumulated floor-rounding residue
        if self.slope == 0u64 {
            self.bias = BigUint::zero();
        }
    }
}

// ============================================================
// Vote Record: one per (participant, destination)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub allocated_bps: u64,
    /// Voting power committed to the destination when last (re)weighed
    pub weight: BigUint<M>,
    pub last_vote_time: u64,
}

/// Voting power a participant commits by allocating `bps` of `power`.
pub fn allocated_weight<M: ManagedTypeApi>(power: &BigUint<M>, bps: u64) -> BigUint<M> {
    (power * bps) / BPS_DENOMINATOR
}

/// Share of the total allocation in basis points, truncated at `cap`.
/// Excess above the cap is not redistributed.
pub fn weight_share_bps<M: ManagedTypeApi>(
    weight: &BigUint<M>,
    total: &BigUint<M>,
    cap: Option<u64>,
) -> u64 {
    if *total == 0u64 {
        return 0;
    }
    let share = ((weight * BPS_DENOMINATOR) / total)
        .to_u64()
        .unwrap_or(BPS_DENOMINATOR)
        .min(BPS_DENOMINATOR);
    match cap {
        Some(cap) => share.min(cap),
        None => share,
    }
}

// ============================================================
// Epoch Cursor: distribution cadence
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EpochCursor {
    pub epoch_length: u64,
    pub next_epoch_at: u64,
    /// Number of distributions executed so far
    pub epoch_index: u64,
}

impl EpochCursor {
    pub fn is_ready(&self, now: u64) -> bool {
        now >= self.next_epoch_at
    }

    pub fn advance(&mut self) {
        self.next_epoch_at += self.epoch_length;
        self.epoch_index += 1;
    }
}

/// Floor of `amount * share_bps / 10000`.
pub fn share_of<M: ManagedTypeApi>(amount: &BigUint<M>, share_bps: u64) -> BigUint<M> {
    (amount * share_bps) / BPS_DENOMINATOR
}

// ============================================================
// Distribution Share: one destination's cut of an epoch
// ============================================================

#[type_abi]
#[derive(
    ManagedVecItem, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug,
)]
pub struct DistributionShare<M: ManagedTypeApi> {
    pub destination: ManagedAddress<M>,
    pub share_bps: u64,
    pub amount: BigUint<M>,
}
