use anchor_lang::prelude::Pubkey;

use eventflux::errors::EventFluxError;
use eventflux::state::{Event, VaultState, YieldStrategy};

const START_TS: i64 = 1_700_000_000;
const END_TS: i64 = START_TS + 86_400;

fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

fn mock_vault() -> VaultState {
    VaultState {
        event: test_pubkey(4),
        strategy: YieldStrategy::Kamino,
        total_deposited: 0,
        total_withdrawn: 0,
        total_yield_harvested: 0,
        last_harvest_ts: 0,
        vault_treasury_bump: 253,
        bump: 252,
    }
}

fn mock_event() -> Event {
    Event {
        organizer: test_pubkey(1),
        event_id: 42,
        name: "Demo Day".to_string(),
        venue: "Hall B".to_string(),
        start_ts: START_TS,
        end_ts: END_TS,
        settlement_treasury: test_pubkey(9),
        yield_strategy: YieldStrategy::Kamino,
        tiers: vec![],
        authorized_verifiers: vec![],
        total_passes: 0,
        vault_state: test_pubkey(3),
        settled: false,
        bump: 255,
    }
}

// -----------------------------
// Counters
// -----------------------------

#[test]
fn deposits_accumulate() {
    let mut vault = mock_vault();

    vault.record_deposit(50_000_000).unwrap();
    vault.record_deposit(150_000_000).unwrap();

    assert_eq!(vault.total_deposited, 200_000_000);
    assert!(vault.is_solvent());
}

#[test]
fn deposit_overflow_guarded() {
    let mut vault = mock_vault();
    vault.total_deposited = u64::MAX;

    assert!(matches!(
        vault.record_deposit(1),
        Err(EventFluxError::MathOverflow)
    ));
}

#[test]
fn harvest_updates_counter_and_timestamp() {
    let mut vault = mock_vault();

    vault.record_harvest(25_000, END_TS - 100).unwrap();

    assert_eq!(vault.total_yield_harvested, 25_000);
    assert_eq!(vault.last_harvest_ts, END_TS - 100);
}

#[test]
fn harvest_overflow_guarded() {
    let mut vault = mock_vault();
    vault.total_yield_harvested = u64::MAX;

    assert!(matches!(
        vault.record_harvest(1, END_TS),
        Err(EventFluxError::MathOverflow)
    ));
    assert_eq!(vault.last_harvest_ts, 0);
}

#[test]
fn withdrawal_overflow_guarded() {
    let mut vault = mock_vault();
    vault.total_withdrawn = u64::MAX;

    assert!(matches!(
        vault.record_withdrawal(1),
        Err(EventFluxError::MathOverflow)
    ));
}

#[test]
fn solvency_holds_over_full_lifecycle() {
    let mut vault = mock_vault();

    vault.record_deposit(100_000).unwrap();
    vault.record_harvest(50_000, END_TS - 10).unwrap();
    vault.record_withdrawal(150_000).unwrap();

    assert_eq!(vault.total_deposited, 100_000);
    assert_eq!(vault.total_yield_harvested, 50_000);
    assert_eq!(vault.total_withdrawn, 150_000);
    assert!(vault.is_solvent());
}

#[test]
fn solvency_check_survives_saturated_counters() {
    let mut vault = mock_vault();
    vault.total_deposited = u64::MAX;
    vault.total_yield_harvested = u64::MAX;
    vault.total_withdrawn = u64::MAX;

    assert!(vault.is_solvent());
}

// -----------------------------
// Settlement
// -----------------------------

#[test]
fn settlement_before_end_rejected() {
    let mut event = mock_event();

    let result = event.mark_settled(END_TS - 1);

    assert!(matches!(result, Err(EventFluxError::EventNotEnded)));
    assert!(!event.settled);
}

#[test]
fn settlement_at_end_succeeds() {
    let mut event = mock_event();

    event.mark_settled(END_TS).unwrap();

    assert!(event.settled);
}

#[test]
fn settlement_is_one_shot() {
    let mut event = mock_event();
    event.mark_settled(END_TS).unwrap();

    let result = event.mark_settled(END_TS + 100);

    assert!(matches!(result, Err(EventFluxError::AlreadySettled)));
}

// The program deliberately leaves harvesting open after settlement; this
// pins that behavior.

#[test]
fn harvest_permitted_after_settlement() {
    let mut event = mock_event();
    let mut vault = mock_vault();
    event.mark_settled(END_TS).unwrap();

    vault.record_harvest(10_000, END_TS + 50).unwrap();

    assert_eq!(vault.total_yield_harvested, 10_000);
}
