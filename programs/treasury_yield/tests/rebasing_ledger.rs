mod common;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use common::*;
use ::treasury_yield::*;

#[test]
fn one_interval_applies_the_daily_multiplier() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);

    ledger
        .mint(&mut world.admin_env(START), &mut alice, 10_000_000_000)
        .unwrap();
    assert_eq!(ledger.balance_of(&alice, START).unwrap(), 10_000_000_000);

    let pending = ledger.current_index(START + DAY).unwrap();
    let multiplier = per_period_multiplier(400, DAY).unwrap();
    assert_eq!(pending, multiplier);

    let index = ledger.sync_yield(&mut world.admin_env(START + DAY)).unwrap();
    assert_eq!(index, pending);
    assert_eq!(ledger.rebasing().unwrap().last_rebase, START + DAY);

    let expected = mul_div_floor(10_000_000_000, index, SCALE).unwrap() as u64;
    assert_eq!(ledger.balance_of(&alice, START + DAY).unwrap(), expected);
    assert!(expected > 10_000_000_000);
    assert!(matches!(
        world.events.last(),
        Some(LedgerEvent::Rebased(RebasedEvent { periods: 1, .. }))
    ));
}

#[test]
fn views_see_pending_rebases_without_persisting_them() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);
    ledger
        .mint(&mut world.admin_env(START), &mut alice, 10_000_000_000)
        .unwrap();

    let later = START + 10 * DAY + 5;
    let before = ledger.balance_of(&alice, later).unwrap();
    assert!(before > 10_000_000_000);
    assert_eq!(ledger.rebasing().unwrap().rebase_index, SCALE);
    assert_eq!(ledger.total_supply(later).unwrap(), before);

    // The poke is permissionless.
    let stranger = Pubkey::new_unique();
    ledger.sync_yield(&mut world.env(stranger, later)).unwrap();
    assert_eq!(ledger.balance_of(&alice, later).unwrap(), before);
    assert_eq!(ledger.rebasing().unwrap().last_rebase, START + 10 * DAY);
}

#[test]
fn mint_after_compounding_differs_from_external_amount() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);

    let now = START + 30 * DAY;
    let units = ledger
        .mint(&mut world.admin_env(now), &mut alice, 10_000_000_000)
        .unwrap();
    let index = ledger.rebasing().unwrap().rebase_index;
    assert!(index > SCALE);
    assert!(units <= 10_000_000_000);
    assert!(10_000_000_000 - units <= 1);
    assert_eq!(
        alice.balance,
        mul_div_floor(10_000_000_000, SCALE, index).unwrap() as u64
    );
}

#[test]
fn rate_change_commits_pending_rebase_at_old_rate() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));

    let at_old_rate = ledger.current_index(START + 2 * DAY).unwrap();
    ledger
        .set_yield_rate(&mut world.admin_env(START + 2 * DAY), 0)
        .unwrap();
    assert_eq!(ledger.rebasing().unwrap().rebase_index, at_old_rate);
    assert_eq!(ledger.state.yield_rate_bps, 0);
    assert_eq!(world.oracle.get_rate(&world.ledger_key).unwrap(), 0);

    // Zero rate: intervals still pass, the index does not move.
    assert_eq!(ledger.current_index(START + 9 * DAY).unwrap(), at_old_rate);
}

#[test]
fn redeem_more_than_balance_fails() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);
    ledger
        .mint(&mut world.admin_env(START), &mut alice, 2_000_000)
        .unwrap();

    let err = ledger
        .redeem(&mut world.admin_env(START), &mut alice, 2_000_001)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::InsufficientBalance));

    let external = ledger
        .redeem(&mut world.admin_env(START), &mut alice, 2_000_000)
        .unwrap();
    assert_eq!(external, 2_000_000);
    assert_eq!(alice.balance, 0);
    assert_eq!(ledger.rebasing().unwrap().scaled_total_supply, 0);
}

#[test]
fn long_dormancy_is_capped() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));

    let now = START + 400 * DAY;
    ledger.sync_yield(&mut world.admin_env(now)).unwrap();
    let book = ledger.rebasing().unwrap();
    let m = per_period_multiplier(400, DAY).unwrap();
    assert_eq!(book.rebase_index, compound(SCALE, m, MAX_REBASE_PERIODS).unwrap());
    assert_eq!(book.last_rebase, now);
}

#[test]
fn grants_limit_what_a_principal_may_do() {
    let minter = Pubkey::new_unique();
    let mut world = World::new(vec![RoleGrant {
        principal: minter,
        capabilities: Capability::mask(&[Capability::Mint]),
    }]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);

    ledger
        .mint(&mut world.env(minter, START), &mut alice, 1_000_000)
        .unwrap();
    let err = ledger
        .redeem(&mut world.env(minter, START), &mut alice, 1)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::Unauthorized));
    let err = ledger
        .set_paused(&mut world.env(minter, START), true)
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::Unauthorized));
}

#[test]
fn preview_matches_mint() {
    let mut world = World::new(vec![]);
    let mut ledger = world.create_ledger(params(StrategyKind::Rebasing));
    let mut alice = world.holder(true);
    let now = START + 3 * DAY;

    let preview = ledger
        .preview_exchange(
            &world.oracle,
            &world.ledger_key,
            now,
            PreviewExchangeArgs {
                external_amount: Some(7_000_000),
                unit_amount: None,
            },
        )
        .unwrap();
    let units = ledger
        .mint(&mut world.admin_env(now), &mut alice, 7_000_000)
        .unwrap();
    assert_eq!(preview.unit_amount, units);

    let err = ledger
        .preview_exchange(
            &world.oracle,
            &world.ledger_key,
            now,
            PreviewExchangeArgs {
                external_amount: Some(1),
                unit_amount: Some(1),
            },
        )
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::InvalidPreviewInput));

    let err = ledger
        .preview_exchange(
            &world.oracle,
            &world.ledger_key,
            now,
            PreviewExchangeArgs::default(),
        )
        .unwrap_err();
    assert_eq!(err, Error::from(LedgerError::InvalidPreviewInput));
}
