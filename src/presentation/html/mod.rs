//! Server-rendered HTML views for the admin console, built with `maud`.

pub mod data_table;
pub mod layout;
pub mod no_permission;
pub mod suspense;

pub use data_table::BlogDataTable;
pub use no_permission::NoPermission;
pub use suspense::{BoundaryState, SuspenseBoundary};
