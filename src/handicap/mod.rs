pub mod allocation;
pub mod course_handicap;
pub mod whs;

pub use allocation::*;
pub use course_handicap::*;
pub use whs::*;
