pub mod reputation;
pub mod teams;



pub use reputation::configure_reputation_routes;
pub use teams::configure_team_routes;
