// Instructions module
// - create_space (create_space_dao, create_space_incentive)
// - deposit
// - propose_share_withdrawal / approve_share_withdrawal
// - distribute (distribute_withdrawal, distribute)
// - configure (withdrawal amount, incentive config)
// - select_incentive_recipients / claim_incentive
// - views

pub mod approve_share_withdrawal;
pub mod claim_incentive;
pub mod configure;
pub mod create_space;
pub mod deposit;
pub mod distribute;
pub mod propose_share_withdrawal;
pub mod select_incentive_recipients;
pub mod views;

pub use approve_share_withdrawal::*;
pub use claim_incentive::*;
pub use configure::*;
pub use create_space::*;
pub use deposit::*;
pub use distribute::*;
pub use propose_share_withdrawal::*;
pub use select_incentive_recipients::*;
pub use views::*;
