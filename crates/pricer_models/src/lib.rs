//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes valuation of European vanilla options.
//!
//! This crate provides:
//! - Validated instrument inputs (option, underlying, market context)
//! - The [`analytical::PricingModel`] snapshot: d1, d2, price, delta,
//!   theta and implied volatility computed once at construction
//! - A standalone implied-volatility solver
//!
//! ## Design Principles
//!
//! - **Validate at construction**: invalid inputs never reach the formulas
//! - **Immutable results**: no setters, no partially built models
//! - **Explicit option type dispatch**: every formula matches on call/put

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
