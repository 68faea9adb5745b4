pub mod initialize;
pub mod fund;
pub mod claim;
pub mod has_claimed;

pub use initialize::*;
pub use fund::*;
pub use claim::*;
pub use has_claimed::*;
