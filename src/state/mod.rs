//! Shared client state provided to the view tree via context.

pub mod strategies;
