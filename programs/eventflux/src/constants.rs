use anchor_lang::constant;

pub const DISCRIMINATOR_LENGTH: usize = 8;

#[constant]
pub const EVENT_SEED: &[u8] = "event".as_bytes();

#[constant]
pub const VAULT_STATE_SEED: &[u8] = "vault-state".as_bytes();

#[constant]
pub const VAULT_TREASURY_SEED: &[u8] = "vault-treasury".as_bytes();

#[constant]
pub const EVENT_PASS_SEED: &[u8] = "event-pass".as_bytes();

#[constant]
pub const LOYALTY_MINT_SEED: &[u8] = "loyalty-mint".as_bytes();

/// Capacity limits baked into the fixed account sizes.
pub const MAX_TIER_COUNT: usize = 4;
pub const MAX_VERIFIER_COUNT: usize = 5;
pub const MAX_NAME_LEN: usize = 64;
pub const MAX_VENUE_LEN: usize = 64;
pub const MAX_TIER_LABEL_LEN: usize = 32;
