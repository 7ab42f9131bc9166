pub mod course;
pub mod event;
pub mod golfer;
pub mod scorecard;
pub mod wager;

pub use course::*;
pub use event::*;
pub use golfer::*;
pub use scorecard::*;
pub use wager::*;
