//! Database models module
//!
//! All entity structs, their update patches and the display/report
//! types are consolidated in models.rs; table.rs holds the generic
//! per-table handle.

mod models;
mod table;

pub use models::*;
pub use table::Table;
