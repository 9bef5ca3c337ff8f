//! Single-leg and parlay valuation.
//!
//! Expected value is expressed as a percentage of stake: positive means a
//! +EV wager, zero break-even, negative -EV. All functions are pure; domain
//! edge conditions surface as [`DomainError`] variants instead of the
//! sentinel figures a display layer might render for them.

use super::error::DomainError;
use super::leg::Leg;
use super::odds::{AmericanOdds, DecimalOdds};

/// Expected value of a single wager, in percent of stake.
///
/// `EV% = [p * (d - 1) - (1 - p)] * 100` where `d` is the decimal
/// equivalent of the market quotation and `p` the model's true win
/// probability.
pub fn single_leg_ev(
    true_probability: f64,
    market_odds: AmericanOdds,
) -> Result<f64, DomainError> {
    if !true_probability.is_finite() || !(0.0..=1.0).contains(&true_probability) {
        return Err(DomainError::InvalidProbability {
            value: true_probability,
        });
    }
    let decimal = market_odds.to_decimal().value();
    Ok((true_probability * (decimal - 1.0) - (1.0 - true_probability)) * 100.0)
}

/// Compounded American odds of a parlay.
///
/// Per-leg decimal odds multiply; the product converts back to an American
/// quotation rounded to the nearest integer. An all-break-even product of
/// exactly 1 surfaces as [`DomainError::BreakEvenOdds`].
pub fn parlay_odds(legs: &[Leg]) -> Result<AmericanOdds, DomainError> {
    if legs.is_empty() {
        return Err(DomainError::EmptyLegs);
    }
    let product: f64 = legs
        .iter()
        .map(|leg| leg.market_odds().to_decimal().value())
        .product();
    DecimalOdds::try_new(product)?.to_american()
}

/// Expected value of a parlay, in percent of stake.
///
/// The true parlay probability is the product of each leg's vig-removed
/// implied probability. A break-even fair quote implies a degenerate true
/// probability and fails the whole parlay with
/// [`DomainError::DegenerateLeg`].
pub fn parlay_ev(legs: &[Leg]) -> Result<f64, DomainError> {
    if legs.is_empty() {
        return Err(DomainError::EmptyLegs);
    }
    let mut market_product = 1.0;
    let mut true_probability = 1.0;
    for (index, leg) in legs.iter().enumerate() {
        if leg.fair_odds().is_break_even() {
            return Err(DomainError::DegenerateLeg { index });
        }
        market_product *= leg.market_odds().to_decimal().value();
        true_probability *= leg.fair_odds().implied_probability();
    }
    Ok((true_probability * (market_product - 1.0) - (1.0 - true_probability)) * 100.0)
}

/// Combined confidence of a parlay: the geometric mean of leg confidences.
///
/// Any leg with non-positive confidence collapses the whole parlay to 0 —
/// one weak link invalidates the ticket.
pub fn parlay_confidence(legs: &[Leg]) -> Result<f64, DomainError> {
    if legs.is_empty() {
        return Err(DomainError::EmptyLegs);
    }
    if legs.iter().any(|leg| leg.confidence() <= 0.0) {
        return Ok(0.0);
    }
    let product: f64 = legs.iter().map(Leg::confidence).product();
    Ok(product.powf(1.0 / legs.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropId, Side};
    use rust_decimal_macros::dec;

    fn leg(market: i32, fair: f64, confidence: f64) -> Leg {
        Leg::try_new(
            PropId::new("test-prop"),
            Side::Over,
            dec!(10.5),
            AmericanOdds::try_new(market).unwrap(),
            DecimalOdds::try_new(fair).unwrap(),
            confidence,
        )
        .unwrap()
    }

    #[test]
    fn ev_positive_when_model_beats_price() {
        // p * d = 0.6 * 1.909... > 1
        let ev = single_leg_ev(0.6, AmericanOdds::try_new(-110).unwrap()).unwrap();
        assert!(ev > 0.0);
    }

    #[test]
    fn ev_negative_when_price_beats_model() {
        // p * d = 0.4 * 1.909... < 1
        let ev = single_leg_ev(0.4, AmericanOdds::try_new(-110).unwrap()).unwrap();
        assert!(ev < 0.0);
    }

    #[test]
    fn ev_zero_at_fair_price() {
        // Even money at exactly 50%.
        let ev = single_leg_ev(0.5, AmericanOdds::try_new(100).unwrap()).unwrap();
        assert!(ev.abs() < 1e-9);
    }

    #[test]
    fn ev_rejects_out_of_range_probability() {
        let odds = AmericanOdds::try_new(-110).unwrap();
        assert!(matches!(
            single_leg_ev(1.5, odds),
            Err(DomainError::InvalidProbability { .. })
        ));
        assert!(matches!(
            single_leg_ev(-0.01, odds),
            Err(DomainError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn parlay_odds_compound_multiplicatively() {
        // -110 -> 1.909..., +120 -> 2.2; product 4.2 -> +320.
        let legs = vec![leg(-110, 1.8, 0.7), leg(120, 2.1, 0.6)];
        let combined = parlay_odds(&legs).unwrap();
        assert_eq!(combined.value(), 320);
    }

    #[test]
    fn parlay_functions_reject_empty_legs() {
        assert_eq!(parlay_odds(&[]).unwrap_err(), DomainError::EmptyLegs);
        assert_eq!(parlay_ev(&[]).unwrap_err(), DomainError::EmptyLegs);
        assert_eq!(parlay_confidence(&[]).unwrap_err(), DomainError::EmptyLegs);
    }

    #[test]
    fn parlay_ev_matches_hand_computation() {
        // Single leg: true p = 1/1.8, market d = 2.2.
        let legs = vec![leg(120, 1.8, 0.8)];
        let ev = parlay_ev(&legs).unwrap();
        let p = 1.0 / 1.8;
        let expected = (p * (2.2 - 1.0) - (1.0 - p)) * 100.0;
        assert!((ev - expected).abs() < 1e-9);
    }

    #[test]
    fn parlay_ev_fails_on_degenerate_fair_odds() {
        let legs = vec![leg(-110, 1.8, 0.7), leg(120, 1.0, 0.6)];
        assert_eq!(
            parlay_ev(&legs).unwrap_err(),
            DomainError::DegenerateLeg { index: 1 }
        );
    }

    #[test]
    fn parlay_confidence_is_geometric_mean() {
        let legs = vec![leg(-110, 1.8, 0.8), leg(120, 2.1, 0.5)];
        let confidence = parlay_confidence(&legs).unwrap();
        assert!((confidence - 0.4_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn parlay_confidence_collapses_on_weak_link() {
        let legs = vec![leg(-110, 1.8, 0.9), leg(120, 2.1, 0.0)];
        assert_eq!(parlay_confidence(&legs).unwrap(), 0.0);
    }
}
