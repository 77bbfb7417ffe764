// Instructions module
// - create_team_dao
// - propose_batch
// - approve_and_execute (executes on reaching the majority)
// - views (get_proposal_info, get_required_approvals, is_admin, ...)

pub mod approve_and_execute;
pub mod create_team_dao;
pub mod propose_batch;
pub mod views;

pub use approve_and_execute::*;
pub use create_team_dao::*;
pub use propose_batch::*;
pub use views::*;
