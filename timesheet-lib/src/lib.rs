//! Timesheet core library
//!
//! Rendering-independent building blocks for the timesheet application:
//! retry with backoff for backend calls, a sortable/filterable/paginated
//! table view over dynamic rows, and week/date-range helpers.

pub mod error;
pub mod model;
pub mod palette;
pub mod period;
pub mod retry;
pub mod table;

pub use error::*;
pub use model::Row;
pub use model::Value;
pub use retry::RetryPolicy;
pub use retry::run_with_retry;
pub use table::ColumnDef;
pub use table::TableConfig;
pub use table::TabularView;
