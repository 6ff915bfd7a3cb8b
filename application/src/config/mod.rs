//! Application-level configuration.
//!
//! - [`ChatParams`]: per-turn controller parameters (window, sampling, limits)

pub mod chat_params;

pub use chat_params::ChatParams;
