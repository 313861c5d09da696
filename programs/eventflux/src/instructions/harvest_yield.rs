use anchor_lang::prelude::*;

use vault_adapter::{program::VaultAdapter, AdapterReserve, ADAPTER_RESERVE_SEED};

use crate::{
    constants::{EVENT_SEED, VAULT_STATE_SEED, VAULT_TREASURY_SEED},
    errors::EventFluxError,
    events::YieldHarvested,
    state::{Event, VaultState, YieldStrategy},
};

/// Contextual accounts required to pull harvested yield into the treasury.
#[derive(Accounts)]
pub struct HarvestYield<'info> {
    /// The event whose strategy is being harvested.
    #[account(
        seeds = [EVENT_SEED, event.organizer.as_ref(), event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's vault ledger, credited with the harvested amount.
    #[account(
        mut,
        seeds = [VAULT_STATE_SEED, event.key().as_ref()],
        bump = vault_state.bump,
        has_one = event,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// The lamport purse receiving the harvested amount.
    #[account(
        mut,
        seeds = [VAULT_TREASURY_SEED, event.key().as_ref()],
        bump = vault_state.vault_treasury_bump,
    )]
    /// CHECK: lamports-only PDA controlled by this program.
    pub vault_treasury: AccountInfo<'info>,

    /// The adapter's reserve, debited by the harvest CPI.
    #[account(
        mut,
        seeds = [ADAPTER_RESERVE_SEED],
        seeds::program = vault_adapter::ID,
        bump = adapter_reserve.bump,
    )]
    pub adapter_reserve: Account<'info, AdapterReserve>,

    pub vault_adapter_program: Program<'info, VaultAdapter>,

    /// The event organizer. Their signature is required to harvest.
    #[account(address = event.organizer @ EventFluxError::UnauthorizedOrganizer)]
    pub organizer: Signer<'info>,
}

/// Handles the logic for harvesting yield from the external adapter.
///
/// The adapter either moves exactly `amount` lamports from its reserve into
/// the vault treasury or fails, in which case the whole transaction aborts
/// and no bookkeeping is recorded.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `amount` - The number of lamports to pull from the adapter reserve.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn harvest_yield_handler(ctx: Context<HarvestYield>, amount: u64) -> Result<()> {
    require!(amount > 0, EventFluxError::InvalidHarvestAmount);
    require!(
        ctx.accounts.event.yield_strategy != YieldStrategy::None,
        EventFluxError::NoYieldStrategy
    );

    vault_adapter::cpi::harvest(
        CpiContext::new(
            ctx.accounts.vault_adapter_program.to_account_info(),
            vault_adapter::cpi::accounts::Harvest {
                adapter: ctx.accounts.adapter_reserve.to_account_info(),
                destination: ctx.accounts.vault_treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    let clock = Clock::get()?;
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.record_harvest(amount, clock.unix_timestamp)?;

    emit!(YieldHarvested {
        event: ctx.accounts.event.key(),
        amount,
        total_yield_harvested: vault_state.total_yield_harvested,
    });

    Ok(())
}
