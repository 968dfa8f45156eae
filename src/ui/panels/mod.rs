//! Page panels.
//!
//! - [`detail`] - transaction detail page
//! - [`history`] - address history table

pub mod detail;
pub mod history;
