//! Error types

mod backend;
mod period;
mod retry;
mod table;

pub use backend::*;
pub use period::*;
pub use retry::*;
pub use table::*;
