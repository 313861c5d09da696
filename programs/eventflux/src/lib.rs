pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

use instructions::*;

declare_id!("Akk9YtTtkqG9K8PdbqtKd2k6zDF2egc8xnkdMWD2nvaU");

#[program]
pub mod eventflux {
    use super::*;

    /// Creates a new event.
    ///
    /// This instruction initializes the `Event` account, the `VaultState`
    /// ledger, and the `VaultTreasury` purse that will hold ticket proceeds.
    /// The tier list and verifier list are fixed at creation.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `args` - The event configuration: id, metadata, schedule, settlement
    ///   destination, yield strategy, verifiers, and tiers.
    pub fn create_event(ctx: Context<CreateEvent>, args: CreateEventArgs) -> Result<()> {
        create_event_handler(ctx, args)
    }

    /// Mints an event pass for the signing attendee.
    ///
    /// This instruction reserves a slot in the requested tier, transfers the
    /// tier price from the attendee to the event's vault treasury, and writes
    /// the pass record.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `tier_id` - The tier to mint from.
    pub fn mint_pass(ctx: Context<MintPass>, tier_id: u8) -> Result<()> {
        mint_pass_handler(ctx, tier_id)
    }

    /// Marks a pass as checked in. May be signed by the organizer, a listed
    /// verifier, or the pass owner.
    pub fn check_in(ctx: Context<CheckIn>) -> Result<()> {
        check_in_handler(ctx)
    }

    /// Drains the vault treasury to the settlement destination once the
    /// event has ended. Succeeds at most once per event.
    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>) -> Result<()> {
        withdraw_treasury_handler(ctx)
    }

    /// Pulls `amount` lamports of yield from the external adapter's reserve
    /// into the vault treasury.
    pub fn harvest_yield(ctx: Context<HarvestYield>, amount: u64) -> Result<()> {
        harvest_yield_handler(ctx, amount)
    }

    /// Issues the one-time loyalty NFT for a checked-in pass.
    pub fn issue_loyalty_nft(ctx: Context<IssueLoyaltyNft>) -> Result<()> {
        issue_loyalty_nft_handler(ctx)
    }
}
