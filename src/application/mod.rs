//! Application layer - command and query handlers.
//!
//! Orchestrates provider operations for the HTTP adapters. The signup flow
//! keeps no state of its own, so handlers are pure coordination.

pub mod handlers;
