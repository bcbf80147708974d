// Arithmetic of locks, the aggregate supply point and the emission split,
// exercised on standalone managed types.

use std::collections::BTreeMap;

use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;
use ve_emissions::constants::{BPS_DENOMINATOR, MAX_LOCK_DURATION, WEEK};
use ve_emissions::types::{
    allocated_weight, next_week_boundary, round_up_to_week, share_of, weight_share_bps,
    EpochCursor, LockedBalance, SupplyPoint,
};

type Big = BigUint<StaticApi>;

const START: u64 = 2_000 * WEEK;

fn big(value: u64) -> Big {
    BigUint::from(value)
}

fn abs_diff(a: &Big, b: &Big) -> Big {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Minimal stand-in for the contract's lock bookkeeping: one supply point and
/// its schedule of slope decrements.
struct Ledger {
    point: SupplyPoint<StaticApi>,
    schedule: BTreeMap<u64, Big>,
}

impl Ledger {
    fn new(timestamp: u64) -> Self {
        Ledger {
            point: SupplyPoint::new(timestamp),
            schedule: BTreeMap::new(),
        }
    }

    fn advance(&mut self, timestamp: u64) {
        let schedule = &self.schedule;
        self.point.advance_to(timestamp, |week| {
            schedule.get(&week).cloned().unwrap_or_else(BigUint::zero)
        });
    }

    fn change(
        &mut self,
        now: u64,
        old: Option<&LockedBalance<StaticApi>>,
        new: Option<&LockedBalance<StaticApi>>,
    ) {
        self.advance(now);
        if let Some(old_lock) = old {
            let cancelled = self.point.remove_lock(old_lock);
            let entry = self.schedule.entry(old_lock.expiry).or_insert_with(BigUint::zero);
            *entry = if *entry > cancelled {
                &*entry - &cancelled
            } else {
                BigUint::zero()
            };
        }
        if let Some(new_lock) = new {
            let scheduled = self.point.add_lock(new_lock);
            *self.schedule.entry(new_lock.expiry).or_insert_with(BigUint::zero) += &scheduled;
        }
    }
}

#[test]
fn test_week_rounding() {
    assert_eq!(round_up_to_week(3 * WEEK), 3 * WEEK);
    assert_eq!(round_up_to_week(3 * WEEK + 1), 4 * WEEK);
    assert_eq!(round_up_to_week(4 * WEEK - 1), 4 * WEEK);
    assert_eq!(next_week_boundary(3 * WEEK), 4 * WEEK);
    assert_eq!(next_week_boundary(3 * WEEK + 5), 4 * WEEK);
}

#[test]
fn test_eight_week_lock_weight() {
    let lock = LockedBalance::new(big(1_000), START + 8 * WEEK);

    // 1000 * 8 / 208 and 1000 * 4 / 208, floored
    assert_eq!(lock.weight_at(START), big(38));
    assert_eq!(lock.weight_at(START + 4 * WEEK), big(19));
    assert_eq!(lock.weight_at(START + 8 * WEEK), big(0));
    assert_eq!(lock.weight_at(START + 9 * WEEK), big(0));
}

#[test]
fn test_full_duration_lock_weight_equals_principal() {
    let lock = LockedBalance::new(big(5_000_000), START + MAX_LOCK_DURATION);
    assert_eq!(lock.weight_at(START), big(5_000_000));
    // no clamping: earlier timestamps give more than the principal
    assert!(lock.weight_at(START - WEEK) > big(5_000_000));
}

#[test]
fn test_weight_decay_is_monotonic() {
    let lock = LockedBalance::new(big(7_777_777_777), START + 52 * WEEK);
    let mut previous = lock.weight_at(START);
    let mut t = START;
    while t <= START + 53 * WEEK {
        let current = lock.weight_at(t);
        assert!(current <= previous);
        previous = current;
        t += 86_399;
    }
    assert_eq!(previous, big(0));
}

#[test]
fn test_single_lock_supply_tracks_weight() {
    let lock = LockedBalance::new(big(1_000_000_000_000), START + 10 * WEEK);
    let mut ledger = Ledger::new(START);
    ledger.change(START, None, Some(&lock));

    assert_eq!(ledger.point.bias, lock.weight_at(START));
    assert_eq!(ledger.schedule.get(&(START + 10 * WEEK)), Some(&lock.slope()));

    for step in 1..=9u64 {
        let t = START + step * WEEK + 3_600;
        ledger.advance(t);
        let diff = abs_diff(&ledger.point.bias, &lock.weight_at(t));
        // one floor per decay segment, two segments per step
        assert!(diff <= big(2 * step + 2), "step {step}: diff {diff:?}");
    }

    ledger.advance(START + 10 * WEEK);
    assert_eq!(ledger.point.bias, big(0));
    assert_eq!(ledger.point.slope, big(0));
}

#[test]
fn test_aggregate_conservation_across_lock_operations() {
    let mut ledger = Ledger::new(START);
    let mut locks: Vec<LockedBalance<StaticApi>> = Vec::new();

    let alice = LockedBalance::new(big(3_000_000_000_000), START + 20 * WEEK);
    ledger.change(START, None, Some(&alice));
    locks.push(alice);

    let t1 = START + WEEK + 1_234;
    let bob = LockedBalance::new(big(9_000_000_000), round_up_to_week(t1 + 6 * WEEK));
    ledger.change(t1, None, Some(&bob));
    locks.push(bob);

    // alice tops up
    let t2 = START + 3 * WEEK + 77;
    let topped = LockedBalance::new(&locks[0].amount + &big(1_000_000_000_000), locks[0].expiry);
    ledger.change(t2, Some(&locks[0]), Some(&topped));
    locks[0] = topped;

    // bob extends
    let t3 = START + 5 * WEEK + 9_000;
    let extended = LockedBalance::new(locks[1].amount.clone(), START + 40 * WEEK);
    ledger.change(t3, Some(&locks[1]), Some(&extended));
    locks[1] = extended;

    let mut t = t3;
    let mut steps = 0u64;
    while t < START + 42 * WEEK {
        t += 2 * 86_400 + 17;
        steps += 1;
        ledger.advance(t);

        let mut expected = BigUint::zero();
        for lock in &locks {
            expected += lock.weight_at(t);
        }
        let tolerance = big(4 * steps + 32);
        let diff = abs_diff(&ledger.point.bias, &expected);
        assert!(diff <= tolerance, "t {t}: diff {diff:?}");
    }

    assert_eq!(ledger.point.bias, big(0));
    assert_eq!(ledger.point.slope, big(0));
}

#[test]
fn test_extension_moves_scheduled_decrement() {
    let mut ledger = Ledger::new(START);
    let lock = LockedBalance::new(big(500_000_000), START + 4 * WEEK);
    ledger.change(START, None, Some(&lock));

    let extended = LockedBalance::new(big(500_000_000), START + 12 * WEEK);
    ledger.change(START + WEEK, Some(&lock), Some(&extended));

    assert_eq!(ledger.schedule.get(&(START + 4 * WEEK)), Some(&big(0)));
    assert_eq!(ledger.schedule.get(&(START + 12 * WEEK)), Some(&extended.slope()));

    ledger.advance(START + 4 * WEEK);
    assert_eq!(ledger.point.slope, extended.slope());
}

#[test]
fn test_advance_never_goes_backwards() {
    let lock = LockedBalance::new(big(1_000_000), START + 10 * WEEK);
    let mut ledger = Ledger::new(START);
    ledger.change(START + WEEK, None, Some(&lock));
    let snapshot = ledger.point.clone();

    ledger.advance(START);
    assert_eq!(ledger.point, snapshot);
}

#[test]
fn test_oversized_decrement_clamps_to_zero() {
    let lock = LockedBalance::new(big(1_000_000), START + 2 * WEEK);
    let mut point = SupplyPoint::<StaticApi>::new(START);
    point.add_lock(&lock);

    point.advance_to(START + WEEK, |_| lock.slope() * 3u64);
    assert_eq!(point.slope, big(0));
    assert_eq!(point.bias, big(0));
    assert_eq!(point.timestamp, START + WEEK);
}

#[test]
fn test_replay_beyond_lock_horizon() {
    let lock = LockedBalance::new(big(1_000_000_000), START + MAX_LOCK_DURATION);
    let mut ledger = Ledger::new(START);
    ledger.change(START, None, Some(&lock));

    ledger.advance(START + 10 * MAX_LOCK_DURATION);
    assert_eq!(ledger.point.bias, big(0));
    assert_eq!(ledger.point.slope, big(0));
    assert_eq!(ledger.point.timestamp, START + 10 * MAX_LOCK_DURATION);
}

#[test]
fn test_expired_lock_contributes_nothing() {
    let lock = LockedBalance::new(big(1_000_000), START + WEEK);
    let mut point = SupplyPoint::<StaticApi>::new(START + WEEK);
    assert_eq!(point.add_lock(&lock), big(0));
    assert_eq!(point.remove_lock(&lock), big(0));
    assert_eq!(point.bias, big(0));
}

#[test]
fn test_weight_share_bps_with_cap() {
    assert_eq!(weight_share_bps(&big(3), &big(4), None), 7_500);
    assert_eq!(weight_share_bps(&big(3), &big(4), Some(5_000)), 5_000);
    assert_eq!(weight_share_bps(&big(1), &big(4), Some(5_000)), 2_500);
    assert_eq!(weight_share_bps(&big(0), &big(0), None), 0);
    assert_eq!(weight_share_bps(&big(1), &big(3), None), 3_333);
}

#[test]
fn test_allocated_weight() {
    assert_eq!(allocated_weight(&big(104_000_000), 6_000), big(62_400_000));
    assert_eq!(allocated_weight(&big(7), BPS_DENOMINATOR), big(7));
}

#[test]
fn test_full_allocation_leaves_less_than_one_unit_per_destination() {
    let funding = big(999_999);
    let shares = [2_500u64, 2_500, 5_000];

    let mut sent = BigUint::zero();
    for share in shares {
        sent += share_of(&funding, share);
    }

    assert!(sent <= funding);
    assert!(&funding - &sent < big(shares.len() as u64));
}

#[test]
fn test_epoch_cursor_advances_once() {
    let mut cursor = EpochCursor {
        epoch_length: WEEK,
        next_epoch_at: START,
        epoch_index: 0,
    };
    assert!(!cursor.is_ready(START - 1));
    assert!(cursor.is_ready(START));

    cursor.advance();
    assert_eq!(cursor.next_epoch_at, START + WEEK);
    assert_eq!(cursor.epoch_index, 1);
    assert!(!cursor.is_ready(START));
}
