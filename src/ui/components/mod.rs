//! Stateless overlay components.
//!
//! - [`toast`] - transient notification in the bottom-right corner

pub mod toast;

pub use toast::render_toast;
