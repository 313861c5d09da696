use anchor_lang::prelude::*;

use crate::{
    constants::{
        DISCRIMINATOR_LENGTH, EVENT_SEED, MAX_NAME_LEN, MAX_TIER_COUNT, MAX_TIER_LABEL_LEN,
        MAX_VENUE_LEN, MAX_VERIFIER_COUNT, VAULT_STATE_SEED, VAULT_TREASURY_SEED,
    },
    errors::EventFluxError,
    events::EventCreated,
    state::{Event, TierConfig, VaultState, YieldStrategy},
};

/// Tier configuration supplied by the organizer. The on-chain `sold`
/// counter always starts at zero, so it is not part of the input.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TierInput {
    pub tier_id: u8,
    pub label: String,
    pub price_lamports: u64,
    pub max_supply: u32,
}

impl From<TierInput> for TierConfig {
    fn from(input: TierInput) -> Self {
        Self {
            tier_id: input.tier_id,
            label: input.label,
            price_lamports: input.price_lamports,
            max_supply: input.max_supply,
            sold: 0,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateEventArgs {
    pub event_id: u64,
    pub name: String,
    pub venue: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub settlement_treasury: Pubkey,
    pub yield_strategy: YieldStrategy,
    pub authorized_verifiers: Vec<Pubkey>,
    pub tiers: Vec<TierInput>,
}

impl CreateEventArgs {
    /// Validates the schedule, metadata lengths, and tier set before any
    /// account is written.
    pub fn validate(&self) -> core::result::Result<(), EventFluxError> {
        if self.name.is_empty() || self.venue.is_empty() {
            return Err(EventFluxError::InvalidMetadata);
        }
        if self.name.len() > MAX_NAME_LEN || self.venue.len() > MAX_VENUE_LEN {
            return Err(EventFluxError::MetadataTooLong);
        }
        if self.end_ts <= self.start_ts {
            return Err(EventFluxError::InvalidSchedule);
        }
        if self.tiers.is_empty() {
            return Err(EventFluxError::InvalidTierSet);
        }
        if self.tiers.len() > MAX_TIER_COUNT {
            return Err(EventFluxError::TooManyTiers);
        }
        if self.authorized_verifiers.len() > MAX_VERIFIER_COUNT {
            return Err(EventFluxError::TooManyVerifiers);
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            if tier.label.len() > MAX_TIER_LABEL_LEN {
                return Err(EventFluxError::TierLabelTooLong);
            }
            if self.tiers[..i].iter().any(|t| t.tier_id == tier.tier_id) {
                return Err(EventFluxError::InvalidMetadata);
            }
        }
        Ok(())
    }
}

/// Contextual accounts required to create a new event.
#[derive(Accounts)]
#[instruction(args: CreateEventArgs)]
pub struct CreateEvent<'info> {
    /// The new event account, initialized by this instruction.
    /// The PDA is derived from the organizer's key and the caller-chosen event id.
    #[account(
        init,
        payer = organizer,
        space = DISCRIMINATOR_LENGTH + Event::INIT_SPACE,
        seeds = [EVENT_SEED, organizer.key().as_ref(), args.event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    /// The vault ledger for the event, tracking deposits, withdrawals, and
    /// harvested yield.
    #[account(
        init,
        payer = organizer,
        space = DISCRIMINATOR_LENGTH + VaultState::INIT_SPACE,
        seeds = [VAULT_STATE_SEED, event.key().as_ref()],
        bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport purse that will hold ticket proceeds and harvested yield.
    /// This is a PDA initialized and owned by the program.
    #[account(
        init,
        payer = organizer,
        space = DISCRIMINATOR_LENGTH,
        seeds = [VAULT_TREASURY_SEED, event.key().as_ref()],
        bump,
    )]
    /// CHECK: This is a PDA purse. No data is ever read from it, so no ownership check is required.
    pub vault_treasury: AccountInfo<'info>,

    /// The organizer creating the event. Must be a signer.
    #[account(mut)]
    pub organizer: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for creating a new event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `args` - The full event configuration: identity, schedule, settlement
///   destination, yield strategy, verifier list, and tier list.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn create_event_handler(ctx: Context<CreateEvent>, args: CreateEventArgs) -> Result<()> {
    args.validate()?;

    let CreateEventArgs {
        event_id,
        name,
        venue,
        start_ts,
        end_ts,
        settlement_treasury,
        yield_strategy,
        authorized_verifiers,
        tiers,
    } = args;

    // Initialize Event Account
    let event = &mut ctx.accounts.event;
    event.organizer = ctx.accounts.organizer.key();
    event.event_id = event_id;
    event.name = name;
    event.venue = venue;
    event.start_ts = start_ts;
    event.end_ts = end_ts;
    event.settlement_treasury = settlement_treasury;
    event.yield_strategy = yield_strategy.clone();
    event.tiers = tiers.into_iter().map(TierConfig::from).collect();
    event.authorized_verifiers = authorized_verifiers;
    event.total_passes = 0;
    event.vault_state = ctx.accounts.vault_state.key();
    event.settled = false;
    event.bump = ctx.bumps.event;

    let event_key = event.key();

    // Initialize Vault Ledger
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.event = event_key;
    vault_state.strategy = yield_strategy;
    vault_state.total_deposited = 0;
    vault_state.total_withdrawn = 0;
    vault_state.total_yield_harvested = 0;
    vault_state.last_harvest_ts = 0;
    vault_state.vault_treasury_bump = ctx.bumps.vault_treasury;
    vault_state.bump = ctx.bumps.vault_state;

    let event = &ctx.accounts.event;
    emit!(EventCreated {
        event: event_key,
        organizer: event.organizer,
        event_id: event.event_id,
        name: event.name.clone(),
        start_ts: event.start_ts,
        end_ts: event.end_ts,
    });

    Ok(())
}
