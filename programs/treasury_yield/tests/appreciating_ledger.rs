mod common;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use common::*;
use ::treasury_yield::*;

#[test]
fn one_year_of_accrual_at_four_percent() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    let mut alice = world.holder(true);

    let units = ledger
        .mint(&mut world.admin_env(START), &mut alice, 10_000_000_000)
        .unwrap();
    assert_eq!(units, 10_000_000_000);
    assert_eq!(alice.balance, 10_000_000_000);
    assert_eq!(ledger.total_supply(START).unwrap(), 10_000_000_000);

    let price = ledger.sync_yield(&mut world.admin_env(START + YEAR)).unwrap();
    assert_eq!(price, 1_040_000_000_000_000_000);
    assert_eq!(world.price(), price);

    // Units are fixed; their value grows with the price.
    let value = ledger
        .value_of(&world.oracle, &world.ledger_key, &alice, START + YEAR)
        .unwrap();
    assert_eq!(alice.balance, 10_000_000_000);
    assert_eq!(value, 10_400_000_000);
}

#[test]
fn update_with_no_elapsed_time_changes_nothing() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    world.events.clear();

    let price = ledger.sync_yield(&mut world.admin_env(START)).unwrap();
    assert_eq!(price, SCALE);
    assert!(world.events.is_empty());

    // A clock that runs backwards is treated as no time passing.
    let price = ledger.sync_yield(&mut world.admin_env(START - 100)).unwrap();
    assert_eq!(price, SCALE);
    assert!(world.events.is_empty());
}

#[test]
fn update_price_requires_rate_capability() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    let stranger = Pubkey::new_unique();

    let err = ledger
        .sync_yield(&mut world.env(stranger, START + DAY))
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::Unauthorized));
    assert_eq!(world.price(), SCALE);
}

#[test]
fn mint_below_minimum_leaves_balances_unchanged() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    let mut alice = world.holder(true);

    let err = ledger
        .mint(&mut world.admin_env(START), &mut alice, 999_999)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::AmountBelowMinimum));
    assert_eq!(LedgerError::AmountBelowMinimum.kind(), ErrorKind::InvalidArgument);
    assert_eq!(alice.balance, 0);
    assert_eq!(ledger.total_supply(START).unwrap(), 0);
}

#[test]
fn mint_at_a_raised_price_floors_units() {
    let mut world = World::new(vec![]);
    let mut p = params(StrategyKind::Appreciating);
    p.initial_price = Some(3 * SCALE);
    let mut ledger = world.create_ledger(p);
    let mut alice = world.holder(true);

    let units = ledger
        .mint(&mut world.admin_env(START), &mut alice, 10_000_000)
        .unwrap();
    assert_eq!(units, 3_333_333);

    let external = ledger
        .redeem(&mut world.admin_env(START), &mut alice, 3_333_333)
        .unwrap();
    assert_eq!(external, 9_999_999);
    assert_eq!(alice.balance, 0);
    assert_eq!(ledger.total_supply(START).unwrap(), 0);
}

#[test]
fn yield_rate_bounds() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));

    let err = ledger
        .set_yield_rate(&mut world.admin_env(START), 10_001)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::InvalidYieldRate));
    assert_eq!(ledger.state.yield_rate_bps, 400);

    ledger
        .set_yield_rate(&mut world.admin_env(START + DAY), 10_000)
        .unwrap();
    assert_eq!(ledger.state.yield_rate_bps, 10_000);
    assert_eq!(world.oracle.get_rate(&world.ledger_key).unwrap(), 10_000);
    assert_eq!(ledger.appreciating().unwrap().last_yield_update, START + DAY);
    // The price only moves on the next update.
    assert_eq!(world.price(), SCALE);
}

#[test]
fn transfer_moves_units_and_conserves_supply() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    let mut alice = world.holder(true);
    let mut bob = world.holder(true);

    ledger
        .mint(&mut world.admin_env(START), &mut alice, 5_000_000)
        .unwrap();
    let alice_key = alice.owner;
    ledger
        .transfer(&mut world.env(alice_key, START), &mut alice, &mut bob, 2_000_000)
        .unwrap();

    assert_eq!(alice.balance, 3_000_000);
    assert_eq!(bob.balance, 2_000_000);
    assert_eq!(ledger.total_supply(START).unwrap(), 5_000_000);
    assert!(matches!(world.events.last(), Some(LedgerEvent::Transferred(_))));
}

#[test]
fn transfer_must_be_signed_by_the_sender() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Appreciating));
    let mut alice = world.holder(true);
    let mut bob = world.holder(true);
    ledger
        .mint(&mut world.admin_env(START), &mut alice, 5_000_000)
        .unwrap();

    let bob_key = bob.owner;
    let err = ledger
        .transfer(&mut world.env(bob_key, START), &mut alice, &mut bob, 1)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::Unauthorized));
}

#[test]
fn rebasing_only_operations_fail_on_appreciating_ledger() {
    let mut world = World::new(vec![]);
    let ledger = world.create_ledger(params(StrategyKind::Appreciating));

    assert_eq!(
        ledger.rebasing().unwrap_err(),
        Error::from(LedgerError::StrategyMismatch)
    );
    assert_eq!(ledger.current_index(START + YEAR).unwrap(), SCALE);
}
