//! Progress display while a turn runs

pub mod reporter;
