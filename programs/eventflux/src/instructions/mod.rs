pub mod check_in;
pub mod create_event;
pub mod harvest_yield;
pub mod issue_loyalty_nft;
pub mod mint_pass;
pub mod withdraw_treasury;

pub use check_in::*;
pub use create_event::*;
pub use harvest_yield::*;
pub use issue_loyalty_nft::*;
pub use mint_pass::*;
pub use withdraw_treasury::*;
