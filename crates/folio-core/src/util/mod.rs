//! Utility modules.
//!
//! - [`ids`]: ID computation from document paths

pub mod ids;
