pub mod dao;
pub mod proposal;

pub use dao::*;
pub use proposal::*;
