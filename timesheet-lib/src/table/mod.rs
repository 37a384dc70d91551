//! Tabular views over dynamic rows.
//!
//! A [`TabularView`] derives what a table should show (filtered, sorted,
//! paginated, with only visible columns) from rows, [`ColumnDef`]s and a
//! [`ViewState`]. It performs no I/O and knows nothing about rendering.

mod column;
mod config;
mod page;
mod sort;
mod state;
mod view;

pub use column::*;
pub use config::TableConfig;
pub use page::*;
pub use sort::*;
pub use state::ViewState;
pub use view::TabularView;
