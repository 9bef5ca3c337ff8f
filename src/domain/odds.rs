//! American and decimal odds quotations and their conversions.
//!
//! American odds are the signed sportsbook convention: negative values are
//! favorites ("risk that much to win 100"), positive values are underdogs
//! ("100 wins that much"). Decimal odds are the multiplicative payout factor
//! (stake x decimal = total return). Both are validated newtypes; the
//! conversions between them are total except where the math genuinely has no
//! answer (break-even decimal odds have no American quotation).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A signed American odds quotation, e.g. `-110` or `+150`.
///
/// Zero is not a quotable price; construction rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Create a quotation, rejecting zero.
    pub fn try_new(odds: i32) -> Result<Self, DomainError> {
        if odds == 0 {
            return Err(DomainError::ZeroAmericanOdds);
        }
        Ok(Self(odds))
    }

    /// The raw signed quotation.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this quotation prices a favorite.
    #[must_use]
    pub const fn is_favorite(self) -> bool {
        self.0 < 0
    }

    /// Convert to the equivalent decimal payout factor.
    ///
    /// Always succeeds: every nonzero quotation maps to a factor
    /// strictly greater than 1.
    #[must_use]
    pub fn to_decimal(self) -> DecimalOdds {
        let decimal = if self.0 > 0 {
            f64::from(self.0) / 100.0 + 1.0
        } else {
            100.0 / f64::from(self.0.unsigned_abs()) + 1.0
        };
        DecimalOdds(decimal)
    }

    /// Skew the quotation by `delta`.
    ///
    /// Zero is not a quotable price, so a shift that lands there steps one
    /// further in the shift direction.
    pub(crate) fn shifted(self, delta: i32) -> Self {
        let mut raw = self.0 + delta;
        if raw == 0 {
            raw += delta.signum();
        }
        Self(raw)
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = DomainError;

    fn try_from(odds: i32) -> Result<Self, Self::Error> {
        Self::try_new(odds)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

/// A multiplicative payout factor, always at least 1.0.
///
/// A factor of exactly 1.0 is a break-even wager: representable, but with
/// no American equivalent and no profit on either side.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DecimalOdds(f64);

impl DecimalOdds {
    /// Create a payout factor, rejecting non-finite values and values
    /// below 1.0.
    pub fn try_new(decimal: f64) -> Result<Self, DomainError> {
        if !decimal.is_finite() {
            return Err(DomainError::NonFiniteDecimalOdds { decimal });
        }
        if decimal < 1.0 {
            return Err(DomainError::SubUnitDecimalOdds { decimal });
        }
        Ok(Self(decimal))
    }

    /// The raw payout factor.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether this is a zero-profit wager.
    #[must_use]
    pub fn is_break_even(self) -> bool {
        self.0 == 1.0
    }

    /// The win probability implied by this price (reciprocal of the
    /// payout factor). For fair, vig-removed odds this is the model's
    /// true probability.
    #[must_use]
    pub fn implied_probability(self) -> f64 {
        1.0 / self.0
    }

    /// Convert back to an American quotation, rounded to the nearest
    /// integer.
    ///
    /// Break-even odds have no American equivalent and return
    /// [`DomainError::BreakEvenOdds`].
    pub fn to_american(self) -> Result<AmericanOdds, DomainError> {
        if self.is_break_even() {
            return Err(DomainError::BreakEvenOdds);
        }
        let raw = if self.0 >= 2.0 {
            (self.0 - 1.0) * 100.0
        } else {
            -100.0 / (self.0 - 1.0)
        };
        AmericanOdds::try_new(raw.round() as i32)
    }
}

impl TryFrom<f64> for DecimalOdds {
    type Error = DomainError;

    fn try_from(decimal: f64) -> Result<Self, Self::Error> {
        Self::try_new(decimal)
    }
}

impl From<DecimalOdds> for f64 {
    fn from(odds: DecimalOdds) -> Self {
        odds.0
    }
}

/// Format a raw American odds figure for display.
///
/// Rounds to the nearest integer and prefixes non-negative values with `+`
/// (zero renders as `"+0"`); negative values keep their natural sign.
#[must_use]
pub fn format_american(odds: f64) -> String {
    let rounded = odds.round() as i64;
    if rounded >= 0 {
        format!("+{rounded}")
    } else {
        rounded.to_string()
    }
}
