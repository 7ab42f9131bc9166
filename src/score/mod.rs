pub mod context;
pub mod net;

pub use context::*;
pub use net::*;
