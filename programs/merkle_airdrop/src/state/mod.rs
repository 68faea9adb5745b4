pub mod airdrop_state;
pub mod claim_state;
pub mod creator_nonce;

pub use airdrop_state::*;
pub use claim_state::*;
pub use creator_nonce::*;
