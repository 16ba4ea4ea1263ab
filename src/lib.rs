//! Signup Broker - Subscription Signup Backend
//!
//! This crate brokers a subscription-signup flow between a browser client
//! and the payments provider: widget bootstrap configuration, customer and
//! setup-intent creation, subscription creation, and a signature-verified
//! webhook receiver. The service is stateless; the provider is the source
//! of truth for every entity it touches.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
