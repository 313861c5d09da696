use anchor_lang::prelude::*;
use anchor_lang::system_program;

declare_id!("9zDeQgUTkwW1X2xW9ZZcACToGt9Lzoz1nAm88PtMu912");

pub const DISCRIMINATOR_LENGTH: usize = 8;

pub const ADAPTER_RESERVE_SEED: &[u8] = b"adapter-reserve";

#[program]
pub mod vault_adapter {
    use super::*;

    /// Creates the singleton reserve account that harvests are paid from.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.adapter.bump = ctx.bumps.adapter;
        Ok(())
    }

    /// Tops up the reserve with lamports from the funder.
    pub fn fund_reserve(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
        require!(amount > 0, VaultAdapterError::InvalidAmount);

        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.funder.to_account_info(),
                    to: ctx.accounts.adapter.to_account_info(),
                },
            ),
            amount,
        )?;

        Ok(())
    }

    /// Moves exactly `amount` lamports from the reserve into the destination
    /// chosen by the calling program, or fails without a partial transfer.
    pub fn harvest(ctx: Context<Harvest>, amount: u64) -> Result<()> {
        require!(amount > 0, VaultAdapterError::InvalidAmount);

        let adapter_info = ctx.accounts.adapter.to_account_info();
        require!(
            adapter_info.lamports() >= amount,
            VaultAdapterError::InsufficientReserve
        );

        **adapter_info.try_borrow_mut_lamports()? -= amount;
        **ctx.accounts.destination.try_borrow_mut_lamports()? += amount;

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + AdapterReserve::INIT_SPACE,
        seeds = [ADAPTER_RESERVE_SEED],
        bump,
    )]
    pub adapter: Account<'info, AdapterReserve>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct FundReserve<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [ADAPTER_RESERVE_SEED],
        bump = adapter.bump,
    )]
    pub adapter: Account<'info, AdapterReserve>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Harvest<'info> {
    #[account(
        mut,
        seeds = [ADAPTER_RESERVE_SEED],
        bump = adapter.bump,
    )]
    pub adapter: Account<'info, AdapterReserve>,

    /// CHECK: the destination is validated by the calling program.
    #[account(mut)]
    pub destination: AccountInfo<'info>,
}

#[account]
#[derive(InitSpace)]
pub struct AdapterReserve {
    pub bump: u8,
}

#[error_code]
pub enum VaultAdapterError {
    #[msg("Provided amount must be greater than zero")]
    InvalidAmount,
    #[msg("Not enough funds in the adapter reserve")]
    InsufficientReserve,
}
