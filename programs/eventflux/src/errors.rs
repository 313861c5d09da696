use anchor_lang::prelude::*;

#[error_code]
pub enum EventFluxError {
    #[msg("Event end time must be after start time")]
    InvalidSchedule,
    #[msg("Event name, venue, or tier set is malformed")]
    InvalidMetadata,
    #[msg("Event name or venue is too long")]
    MetadataTooLong,
    #[msg("At least one tier is required")]
    InvalidTierSet,
    #[msg("Too many tiers supplied")]
    TooManyTiers,
    #[msg("Too many verifiers supplied")]
    TooManyVerifiers,
    #[msg("Tier label is too long")]
    TierLabelTooLong,

    #[msg("Tier not found")]
    TierNotFound,
    #[msg("Tier sold out")]
    TierSoldOut,
    #[msg("Numeric overflow")]
    MathOverflow,

    #[msg("Signer is not allowed to verify this pass")]
    UnauthorizedVerifier,
    #[msg("Signer is not the event organizer")]
    UnauthorizedOrganizer,
    #[msg("Pass already checked in")]
    AlreadyCheckedIn,

    #[msg("Event has not ended yet")]
    EventNotEnded,
    #[msg("Event already settled")]
    AlreadySettled,
    #[msg("No funds to withdraw")]
    NothingToWithdraw,

    #[msg("Event has no yield strategy configured")]
    NoYieldStrategy,
    #[msg("Harvest amount must be greater than zero")]
    InvalidHarvestAmount,

    #[msg("Pass must be checked in before loyalty rewards")]
    PassNotCheckedIn,
    #[msg("Loyalty NFT already issued for this pass")]
    LoyaltyAlreadyIssued,
}
