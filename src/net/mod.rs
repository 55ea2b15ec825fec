//! Networking modules for the quant REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `quant_api` performs the raw HTTP calls, `actions` pairs each call with
//! its state transition, and `types` defines the shared wire schema.

pub mod actions;
pub mod quant_api;
pub mod types;
