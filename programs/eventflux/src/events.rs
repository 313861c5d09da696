use anchor_lang::prelude::*;

#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub organizer: Pubkey,
    pub event_id: u64,
    pub name: String,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[event]
pub struct PassMinted {
    pub event: Pubkey,
    pub event_pass: Pubkey,
    pub owner: Pubkey,
    pub tier_id: u8,
    pub price_paid: u64,
}

#[event]
pub struct PassCheckedIn {
    pub event: Pubkey,
    pub event_pass: Pubkey,
    pub verifier: Pubkey,
    pub checked_in_at: i64,
}

#[event]
pub struct YieldHarvested {
    pub event: Pubkey,
    pub amount: u64,
    pub total_yield_harvested: u64,
}

#[event]
pub struct TreasurySettled {
    pub event: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LoyaltyNftIssued {
    pub event: Pubkey,
    pub event_pass: Pubkey,
    pub loyalty_mint: Pubkey,
    pub owner: Pubkey,
}
