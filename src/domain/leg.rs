//! Wagering propositions: legs and parlays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::PropId;
use super::odds::{AmericanOdds, DecimalOdds};
use super::valuation::{parlay_confidence, parlay_ev, parlay_odds};

/// Which side of a line a leg takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Over,
    Under,
}

impl Side {
    /// The opposing side of the same line.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Over => Self::Under,
            Self::Under => Self::Over,
        }
    }
}

/// A single wagering proposition with its model inputs.
///
/// Market odds are the sportsbook quotation. Fair odds are the vig-removed
/// decimal price implied by the projection model, and confidence is the
/// model's score for the leg in [0, 1]. Both come from the upstream
/// projection provider.
#[derive(Debug, Clone)]
pub struct Leg {
    prop: PropId,
    side: Side,
    line: Decimal,
    market_odds: AmericanOdds,
    fair_odds: DecimalOdds,
    confidence: f64,
}

impl Leg {
    /// Create a leg, validating the confidence range.
    pub fn try_new(
        prop: PropId,
        side: Side,
        line: Decimal,
        market_odds: AmericanOdds,
        fair_odds: DecimalOdds,
        confidence: f64,
    ) -> Result<Self, DomainError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(DomainError::InvalidConfidence { value: confidence });
        }
        Ok(Self {
            prop,
            side,
            line,
            market_odds,
            fair_odds,
            confidence,
        })
    }

    /// The prop this leg wagers on.
    #[must_use]
    pub fn prop(&self) -> &PropId {
        &self.prop
    }

    /// Which side of the line the leg takes.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The threshold value.
    #[must_use]
    pub const fn line(&self) -> Decimal {
        self.line
    }

    /// The sportsbook quotation.
    #[must_use]
    pub const fn market_odds(&self) -> AmericanOdds {
        self.market_odds
    }

    /// The vig-removed fair price from the projection model.
    #[must_use]
    pub const fn fair_odds(&self) -> DecimalOdds {
        self.fair_odds
    }

    /// The model's confidence score in [0, 1].
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// An ordered, non-empty sequence of legs wagered together.
///
/// Order matters only for display; the combined quantities are
/// order-independent and computed on demand, never stored.
#[derive(Debug, Clone)]
pub struct Parlay {
    legs: Vec<Leg>,
}

impl Parlay {
    /// Create a parlay, rejecting an empty leg list.
    pub fn try_new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyLegs);
        }
        Ok(Self { legs })
    }

    /// The legs in display order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false: construction rejects empty parlays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Compounded American odds across all legs.
    pub fn combined_odds(&self) -> Result<AmericanOdds, DomainError> {
        parlay_odds(&self.legs)
    }

    /// Expected value of the parlay, in percent of stake.
    pub fn combined_ev(&self) -> Result<f64, DomainError> {
        parlay_ev(&self.legs)
    }

    /// Combined confidence (geometric mean of leg confidences).
    pub fn combined_confidence(&self) -> Result<f64, DomainError> {
        parlay_confidence(&self.legs)
    }
}
