use anchor_lang::prelude::*;
use std::result::Result;

use crate::errors::EventFluxError;

/// Routing tag for the external yield adapter. The program only ever
/// distinguishes `None` from the rest; the strategy-specific logic lives in
/// the adapter program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub enum YieldStrategy {
    None,
    Kamino,
    Sanctum,
}

/// A priced pass category with its own supply cap and sold counter.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct TierConfig {
    pub tier_id: u8,
    #[max_len(32)]
    pub label: String,
    pub price_lamports: u64,
    pub max_supply: u32,
    pub sold: u32,
}

impl TierConfig {
    pub fn has_available_supply(&self) -> bool {
        self.sold < self.max_supply
    }
}

#[account]
#[derive(InitSpace)]
pub struct Event {
    pub organizer: Pubkey,
    pub event_id: u64,
    #[max_len(64)]
    pub name: String,
    #[max_len(64)]
    pub venue: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub settlement_treasury: Pubkey,
    pub yield_strategy: YieldStrategy,
    #[max_len(4)]
    pub tiers: Vec<TierConfig>,
    #[max_len(5)]
    pub authorized_verifiers: Vec<Pubkey>,
    pub total_passes: u64,
    pub vault_state: Pubkey,
    pub settled: bool,
    pub bump: u8,
}

impl Event {
    pub fn tier(&self, tier_id: u8) -> Option<&TierConfig> {
        self.tiers.iter().find(|t| t.tier_id == tier_id)
    }

    /// Reserves one slot in the given tier and returns the price to collect.
    ///
    /// The supply check happens before any counter moves, so a rejected sale
    /// leaves the event untouched.
    pub fn register_sale(&mut self, tier_id: u8) -> Result<u64, EventFluxError> {
        let tier = self
            .tiers
            .iter_mut()
            .find(|t| t.tier_id == tier_id)
            .ok_or(EventFluxError::TierNotFound)?;

        if !tier.has_available_supply() {
            return Err(EventFluxError::TierSoldOut);
        }

        tier.sold = tier.sold.checked_add(1).ok_or(EventFluxError::MathOverflow)?;
        let price = tier.price_lamports;

        self.total_passes = self
            .total_passes
            .checked_add(1)
            .ok_or(EventFluxError::MathOverflow)?;

        Ok(price)
    }

    /// A pass may be verified by the organizer, any listed verifier, or the
    /// pass owner themselves.
    pub fn is_authorized_verifier(&self, signer: &Pubkey, pass_owner: &Pubkey) -> bool {
        *signer == self.organizer
            || self.authorized_verifiers.iter().any(|v| v == signer)
            || signer == pass_owner
    }

    /// One-way transition into the settled state, allowed only once the
    /// event has ended.
    pub fn mark_settled(&mut self, now: i64) -> Result<(), EventFluxError> {
        if self.settled {
            return Err(EventFluxError::AlreadySettled);
        }
        if now < self.end_ts {
            return Err(EventFluxError::EventNotEnded);
        }
        self.settled = true;
        Ok(())
    }
}

/// Ledger record of everything that flowed through the event's treasury.
/// The lamports themselves live in the separate vault-treasury purse.
#[account]
#[derive(InitSpace)]
pub struct VaultState {
    pub event: Pubkey,
    pub strategy: YieldStrategy,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub total_yield_harvested: u64,
    pub last_harvest_ts: i64,
    pub vault_treasury_bump: u8,
    pub bump: u8,
}

impl VaultState {
    pub fn record_deposit(&mut self, amount: u64) -> Result<(), EventFluxError> {
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(EventFluxError::MathOverflow)?;
        Ok(())
    }

    pub fn record_harvest(&mut self, amount: u64, now: i64) -> Result<(), EventFluxError> {
        self.total_yield_harvested = self
            .total_yield_harvested
            .checked_add(amount)
            .ok_or(EventFluxError::MathOverflow)?;
        self.last_harvest_ts = now;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<(), EventFluxError> {
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(EventFluxError::MathOverflow)?;
        Ok(())
    }

    /// The vault never pays out more than it has received.
    pub fn is_solvent(&self) -> bool {
        self.total_deposited as u128 + self.total_yield_harvested as u128
            >= self.total_withdrawn as u128
    }
}

#[account]
#[derive(InitSpace)]
pub struct EventPass {
    pub event: Pubkey,
    pub owner: Pubkey,
    pub tier_id: u8,
    pub price_paid: u64,
    pub minted_at: i64,
    pub checked_in: bool,
    pub checked_in_at: Option<i64>,
    pub loyalty_mint: Option<Pubkey>,
    pub bump: u8,
}

impl EventPass {
    /// One-way transition from minted to checked-in. `checked_in_at` is set
    /// exactly once.
    pub fn mark_checked_in(&mut self, now: i64) -> Result<(), EventFluxError> {
        if self.checked_in {
            return Err(EventFluxError::AlreadyCheckedIn);
        }
        self.checked_in = true;
        self.checked_in_at = Some(now);
        Ok(())
    }

    /// Records the loyalty mint on the pass. Requires a prior check-in and
    /// rejects a second issuance.
    pub fn attach_loyalty_mint(&mut self, mint: Pubkey) -> Result<(), EventFluxError> {
        if !self.checked_in {
            return Err(EventFluxError::PassNotCheckedIn);
        }
        if self.loyalty_mint.is_some() {
            return Err(EventFluxError::LoyaltyAlreadyIssued);
        }
        self.loyalty_mint = Some(mint);
        Ok(())
    }
}
