pub mod depositor;
pub mod incentive_claims;
pub mod share_withdrawal;
pub mod space;

pub use depositor::*;
pub use incentive_claims::*;
pub use share_withdrawal::*;
pub use space::*;
