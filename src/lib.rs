//! Oddsmith - odds conversion, parlay valuation, and alternate-line analysis.
//!
//! This crate is the computational core of a sports-prop analysis tool: a
//! pure, synchronous math kernel with validated odds types, a
//! normal-distribution probability model, expected-value and parlay
//! aggregation, and deterministic alternate-line synthesis.
//!
//! # Architecture
//!
//! - **`domain`** - validated odds types and the valuation kernel
//!   - American <-> decimal odds conversion on validated newtypes
//!   - normal CDF probability model for projected outcomes
//!   - single-leg EV, parlay odds/EV/confidence aggregation
//!   - alternate-line ladder synthesis per prop-type configuration
//! - **`analysis`** - collaborators built on the kernel
//!   - line sweeps scoring a ladder against a projection
//!   - a market-data snapshot cache with injectable invalidation policy
//! - **`config`** - TOML configuration loading with logging setup
//! - **`error`** - error types for the crate
//!
//! Every kernel function is referentially transparent: no I/O, no locks, no
//! hidden state. Invalid domain inputs surface as typed errors rather than
//! sentinel values, so a caller can never mistake a fallback for a computed
//! figure.
//!
//! # Example
//!
//! ```
//! use oddsmith::domain::{single_leg_ev, AmericanOdds, Projection};
//!
//! let odds = AmericanOdds::try_new(-110)?;
//! let projection = Projection::new(275.0, 35.0);
//!
//! // The model has the over at 249.5 well above a coin flip.
//! let p_over = projection.prob_over(249.5);
//! let ev = single_leg_ev(p_over, odds)?;
//! assert!(ev > 0.0);
//! # Ok::<(), oddsmith::domain::DomainError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
