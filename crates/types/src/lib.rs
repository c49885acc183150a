//! Validated value types shared across the gateway workspace.
//!
//! Contains:
//! - [`NonEmptyText`]: a string guaranteed to hold at least one
//!   non-whitespace character
//! - [`HierarchyPath`]: a materialized organisation-tree path supporting
//!   ancestor/descendant tests

mod path;
mod text;

pub use path::{HierarchyPath, HierarchyPathError};
pub use text::{NonEmptyText, TextError};
