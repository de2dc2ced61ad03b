pub mod matching;
pub mod reputation;
pub mod scoring;

pub use matching::{MatchError, TeamMatcher};
pub use reputation::{ReputationError, ReputationService};
