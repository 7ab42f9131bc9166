pub mod error;
pub mod handicap;
pub mod model;
pub mod score;
pub mod settlement;
pub mod wager;

pub use error::WagerError;
pub use score::RoundContext;
pub use settlement::{Settlement, settle, settle_event};
pub use wager::{WagerResults, run_wagers};

/// Holes in a regulation round.
pub const HOLES: usize = 18;
