pub mod contract;
pub mod github;
pub mod operator;
pub mod poap;
pub mod reputation;
pub mod team;

pub use contract::*;
pub use github::*;
pub use operator::*;
pub use poap::*;
pub use reputation::*;
pub use team::*;
