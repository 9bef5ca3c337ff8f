//! Market analysis across alternate lines.
//!
//! Sweeps a prop's line ladder with the projection model, scoring every
//! line and side by expected value to surface the best-priced entry.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::{single_leg_ev, AmericanOdds, LineOdds, Projection, Side};

/// Configuration for the line-sweep analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum expected value (percent of stake) for a line to be
    /// recommended.
    #[serde(default = "default_min_ev_percent")]
    pub min_ev_percent: f64,
}

fn default_min_ev_percent() -> f64 {
    0.0
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_ev_percent: default_min_ev_percent(),
        }
    }
}

/// One scored line/side candidate.
#[derive(Debug, Clone)]
pub struct LineEvaluation {
    /// The threshold value.
    pub line: Decimal,
    /// Which side of the line.
    pub side: Side,
    /// The quoted price for that side.
    pub market_odds: AmericanOdds,
    /// Model probability of the side hitting.
    pub true_probability: f64,
    /// Expected value at the quoted price, in percent of stake.
    pub ev_percent: f64,
}

/// Score every line and side of a ladder against a projection.
pub fn evaluate_lines(
    projection: &Projection,
    lines: &[LineOdds],
) -> Result<Vec<LineEvaluation>, DomainError> {
    let mut evaluations = Vec::with_capacity(lines.len() * 2);
    for line_odds in lines {
        let threshold = line_odds.line.to_f64().unwrap_or(0.0);
        let p_over = projection.prob_over(threshold);
        for (side, market_odds, true_probability) in [
            (Side::Over, line_odds.over, p_over),
            (Side::Under, line_odds.under, 1.0 - p_over),
        ] {
            let ev_percent = single_leg_ev(true_probability, market_odds)?;
            evaluations.push(LineEvaluation {
                line: line_odds.line,
                side,
                market_odds,
                true_probability,
                ev_percent,
            });
        }
    }
    Ok(evaluations)
}

/// Find the best-valued entry on a ladder, if any clears the EV floor.
pub fn best_line(
    projection: &Projection,
    lines: &[LineOdds],
    config: &AnalysisConfig,
) -> Result<Option<LineEvaluation>, DomainError> {
    let best = evaluate_lines(projection, lines)?
        .into_iter()
        .filter(|eval| eval.ev_percent >= config.min_ev_percent)
        .max_by(|a, b| {
            a.ev_percent
                .partial_cmp(&b.ev_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match &best {
        Some(eval) => debug!(
            line = %eval.line,
            side = ?eval.side,
            odds = %eval.market_odds,
            ev_percent = eval.ev_percent,
            "best line selected"
        ),
        None => debug!(candidates = lines.len(), "no line cleared the EV floor"),
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(raw: i32) -> AmericanOdds {
        AmericanOdds::try_new(raw).unwrap()
    }

    fn flat_ladder() -> Vec<LineOdds> {
        // Same -110 price at every threshold; the projection should make
        // lines far below the mean the obvious over plays.
        [dec!(229.5), dec!(239.5), dec!(249.5), dec!(259.5), dec!(269.5)]
            .into_iter()
            .map(|line| LineOdds {
                line,
                over: odds(-110),
                under: odds(-110),
            })
            .collect()
    }

    #[test]
    fn evaluates_both_sides_of_every_line() {
        let projection = Projection::new(255.0, 30.0);
        let evaluations = evaluate_lines(&projection, &flat_ladder()).unwrap();
        assert_eq!(evaluations.len(), 10);
        for eval in &evaluations {
            assert!((0.0..=1.0).contains(&eval.true_probability));
        }
    }

    #[test]
    fn best_line_prefers_mispriced_threshold() {
        let projection = Projection::new(255.0, 30.0);
        let best = best_line(&projection, &flat_ladder(), &AnalysisConfig::default())
            .unwrap()
            .expect("a flat-priced ladder against a real projection has +EV lines");

        // At a flat price the most probable side is the lowest line's over.
        assert_eq!(best.line, dec!(229.5));
        assert_eq!(best.side, Side::Over);
        assert!(best.ev_percent > 0.0);
    }

    #[test]
    fn ev_floor_filters_everything_when_too_high() {
        let projection = Projection::new(255.0, 30.0);
        let config = AnalysisConfig {
            min_ev_percent: 1000.0,
        };
        assert!(best_line(&projection, &flat_ladder(), &config)
            .unwrap()
            .is_none());
    }

    #[test]
    fn empty_ladder_has_no_best_line() {
        let projection = Projection::new(255.0, 30.0);
        let best = best_line(&projection, &[], &AnalysisConfig::default()).unwrap();
        assert!(best.is_none());
    }
}
