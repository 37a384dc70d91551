//! Subcommand implementations.

mod view;
mod week;

pub use view::ViewArgs;
pub use view::run as view;
pub use week::WeekArgs;
pub use week::run as week;
