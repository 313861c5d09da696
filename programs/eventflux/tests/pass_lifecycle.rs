use anchor_lang::prelude::Pubkey;

use eventflux::errors::EventFluxError;
use eventflux::state::{Event, EventPass, TierConfig, YieldStrategy};

const START_TS: i64 = 1_700_000_000;
const END_TS: i64 = START_TS + 86_400;

fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

fn organizer() -> Pubkey {
    test_pubkey(1)
}

fn listed_verifier() -> Pubkey {
    test_pubkey(2)
}

fn attendee() -> Pubkey {
    test_pubkey(7)
}

fn mock_event() -> Event {
    Event {
        organizer: organizer(),
        event_id: 42,
        name: "Demo Day".to_string(),
        venue: "Hall B".to_string(),
        start_ts: START_TS,
        end_ts: END_TS,
        settlement_treasury: test_pubkey(9),
        yield_strategy: YieldStrategy::None,
        tiers: vec![
            TierConfig {
                tier_id: 0,
                label: "general".to_string(),
                price_lamports: 50_000_000,
                max_supply: 2,
                sold: 0,
            },
            TierConfig {
                tier_id: 1,
                label: "vip".to_string(),
                price_lamports: 150_000_000,
                max_supply: 1,
                sold: 0,
            },
        ],
        authorized_verifiers: vec![listed_verifier()],
        total_passes: 0,
        vault_state: test_pubkey(3),
        settled: false,
        bump: 255,
    }
}

fn mock_pass() -> EventPass {
    EventPass {
        event: test_pubkey(4),
        owner: attendee(),
        tier_id: 0,
        price_paid: 50_000_000,
        minted_at: START_TS,
        checked_in: false,
        checked_in_at: None,
        loyalty_mint: None,
        bump: 254,
    }
}

// -----------------------------
// Tier supply
// -----------------------------

#[test]
fn sale_returns_tier_price_and_counts() {
    let mut event = mock_event();

    let price = event.register_sale(1).unwrap();

    assert_eq!(price, 150_000_000);
    assert_eq!(event.tier(1).unwrap().sold, 1);
    assert_eq!(event.total_passes, 1);
}

#[test]
fn sale_beyond_supply_rejected_and_leaves_state_unchanged() {
    let mut event = mock_event();
    event.register_sale(1).unwrap();

    let result = event.register_sale(1);

    assert!(matches!(result, Err(EventFluxError::TierSoldOut)));
    assert_eq!(event.tier(1).unwrap().sold, 1);
    assert_eq!(event.total_passes, 1);
}

#[test]
fn sold_never_exceeds_max_supply() {
    let mut event = mock_event();
    event.register_sale(0).unwrap();
    event.register_sale(0).unwrap();

    assert!(matches!(
        event.register_sale(0),
        Err(EventFluxError::TierSoldOut)
    ));
    let tier = event.tier(0).unwrap();
    assert_eq!(tier.sold, tier.max_supply);
}

#[test]
fn unknown_tier_rejected() {
    let mut event = mock_event();

    let result = event.register_sale(9);

    assert!(matches!(result, Err(EventFluxError::TierNotFound)));
    assert_eq!(event.total_passes, 0);
}

#[test]
fn total_passes_counts_across_tiers() {
    let mut event = mock_event();
    event.register_sale(0).unwrap();
    event.register_sale(1).unwrap();

    assert_eq!(event.total_passes, 2);
    assert_eq!(event.tier(0).unwrap().sold, 1);
    assert_eq!(event.tier(1).unwrap().sold, 1);
}

#[test]
fn total_passes_overflow_guarded() {
    let mut event = mock_event();
    event.total_passes = u64::MAX;

    assert!(matches!(
        event.register_sale(0),
        Err(EventFluxError::MathOverflow)
    ));
}

// The program deliberately leaves minting open outside the advertised
// window and after settlement; these pin that behavior.

#[test]
fn sale_permitted_after_event_window() {
    let mut event = mock_event();
    event.start_ts = START_TS - 200_000;
    event.end_ts = START_TS - 100_000;

    assert!(event.register_sale(0).is_ok());
}

#[test]
fn sale_permitted_after_settlement() {
    let mut event = mock_event();
    event.settled = true;

    assert!(event.register_sale(0).is_ok());
    assert_eq!(event.total_passes, 1);
}

// -----------------------------
// Check-in authorization
// -----------------------------

#[test]
fn organizer_may_verify() {
    let event = mock_event();
    assert!(event.is_authorized_verifier(&organizer(), &attendee()));
}

#[test]
fn listed_verifier_may_verify() {
    let event = mock_event();
    assert!(event.is_authorized_verifier(&listed_verifier(), &attendee()));
}

#[test]
fn pass_owner_may_self_verify() {
    let event = mock_event();
    assert!(event.is_authorized_verifier(&attendee(), &attendee()));
}

#[test]
fn stranger_may_not_verify() {
    let event = mock_event();
    assert!(!event.is_authorized_verifier(&test_pubkey(200), &attendee()));
}

#[test]
fn stranger_rejected_even_for_checked_in_pass() {
    let event = mock_event();
    let mut pass = mock_pass();
    pass.mark_checked_in(START_TS + 10).unwrap();

    assert!(!event.is_authorized_verifier(&test_pubkey(200), &pass.owner));
}

// -----------------------------
// Check-in transition
// -----------------------------

#[test]
fn first_check_in_succeeds() {
    let mut pass = mock_pass();

    pass.mark_checked_in(START_TS + 60).unwrap();

    assert!(pass.checked_in);
    assert_eq!(pass.checked_in_at, Some(START_TS + 60));
}

#[test]
fn second_check_in_rejected_and_timestamp_preserved() {
    let mut pass = mock_pass();
    pass.mark_checked_in(START_TS + 60).unwrap();

    let result = pass.mark_checked_in(START_TS + 120);

    assert!(matches!(result, Err(EventFluxError::AlreadyCheckedIn)));
    assert_eq!(pass.checked_in_at, Some(START_TS + 60));
}

// -----------------------------
// Loyalty issuance
// -----------------------------

#[test]
fn loyalty_before_check_in_rejected() {
    let mut pass = mock_pass();

    let result = pass.attach_loyalty_mint(test_pubkey(11));

    assert!(matches!(result, Err(EventFluxError::PassNotCheckedIn)));
    assert_eq!(pass.loyalty_mint, None);
}

#[test]
fn loyalty_issued_once_after_check_in() {
    let mut pass = mock_pass();
    pass.mark_checked_in(START_TS + 60).unwrap();

    pass.attach_loyalty_mint(test_pubkey(11)).unwrap();

    assert_eq!(pass.loyalty_mint, Some(test_pubkey(11)));
}

#[test]
fn second_loyalty_issuance_rejected_and_mint_preserved() {
    let mut pass = mock_pass();
    pass.mark_checked_in(START_TS + 60).unwrap();
    pass.attach_loyalty_mint(test_pubkey(11)).unwrap();

    let result = pass.attach_loyalty_mint(test_pubkey(12));

    assert!(matches!(result, Err(EventFluxError::LoyaltyAlreadyIssued)));
    assert_eq!(pass.loyalty_mint, Some(test_pubkey(11)));
}
