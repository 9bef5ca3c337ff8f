//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and by the valuation
//! functions when a domain invariant is violated. Each condition is a
//! distinct variant rather than a sentinel value, so a caller can never
//! mistake a fallback for a computed figure.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// American odds of exactly zero are not a quotable price.
    #[error("american odds cannot be zero")]
    ZeroAmericanOdds,

    /// Decimal odds below 1.0 would imply a negative payout.
    #[error("decimal odds must be at least 1.0, got {decimal}")]
    SubUnitDecimalOdds {
        /// The invalid decimal figure that was provided.
        decimal: f64,
    },

    /// Decimal odds must be a finite number.
    #[error("decimal odds must be finite, got {decimal}")]
    NonFiniteDecimalOdds {
        /// The invalid decimal figure that was provided.
        decimal: f64,
    },

    /// Break-even decimal odds (exactly 1.0) have no American equivalent.
    #[error("break-even odds have no american quotation")]
    BreakEvenOdds,

    /// Probabilities must lie in [0, 1].
    #[error("probability must be in [0, 1], got {value}")]
    InvalidProbability {
        /// The out-of-range probability that was provided.
        value: f64,
    },

    /// Confidence scores must lie in [0, 1].
    #[error("confidence must be in [0, 1], got {value}")]
    InvalidConfidence {
        /// The out-of-range confidence that was provided.
        value: f64,
    },

    /// Parlays must have at least one leg.
    #[error("legs cannot be empty")]
    EmptyLegs,

    /// A leg whose fair odds are break-even implies a degenerate true
    /// probability and poisons the whole parlay.
    #[error("leg {index} has degenerate fair odds")]
    DegenerateLeg {
        /// Zero-based index of the offending leg.
        index: usize,
    },
}
