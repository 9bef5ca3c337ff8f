//! Alternate-line ladder synthesis.
//!
//! Sportsbooks quote a primary line per prop plus a ladder of alternate
//! thresholds around it. Given the primary line and a per-prop-type
//! configuration, this module synthesizes that ladder deterministically:
//! each step away from the primary moves the threshold by `step` and skews
//! both prices by `odds_shift`, modeling demand following the threshold.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::ids::PropId;
use super::odds::AmericanOdds;

/// A single threshold with its two-sided pricing.
///
/// Over and under quotes are independent; vig means they are not exact
/// complements of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineOdds {
    /// The threshold value.
    pub line: Decimal,
    /// Price for the outcome landing above the line.
    pub over: AmericanOdds,
    /// Price for the outcome landing at or below the line.
    pub under: AmericanOdds,
}

/// Ladder parameters for one prop category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LadderConfig {
    /// Distance between adjacent lines.
    #[serde(default = "default_step")]
    pub step: Decimal,

    /// Price skew applied per step away from the primary line.
    #[serde(default = "default_odds_shift")]
    pub odds_shift: i32,

    /// Number of synthesized lines on each side of the primary.
    #[serde(default = "default_num_lines")]
    pub num_lines: u32,
}

fn default_step() -> Decimal {
    dec!(0.5)
}

fn default_odds_shift() -> i32 {
    15
}

fn default_num_lines() -> u32 {
    3
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            odds_shift: default_odds_shift(),
            num_lines: default_num_lines(),
        }
    }
}

/// Ladder configurations keyed by prop type, with a fallback default.
#[derive(Debug, Clone, Deserialize)]
pub struct LadderTable {
    /// Fallback configuration for unrecognized prop types.
    #[serde(default)]
    pub default: LadderConfig,

    /// Per-prop-type overrides.
    #[serde(default)]
    pub props: BTreeMap<String, LadderConfig>,
}

impl LadderTable {
    /// Look up the configuration for a prop type, falling back to the
    /// default entry.
    #[must_use]
    pub fn config_for(&self, prop_type: &str) -> &LadderConfig {
        self.props.get(prop_type).unwrap_or(&self.default)
    }
}

impl Default for LadderTable {
    /// Built-in table covering common sports prop categories.
    fn default() -> Self {
        let mut props = BTreeMap::new();
        props.insert(
            "passing_yards".to_string(),
            LadderConfig {
                step: dec!(10),
                odds_shift: 20,
                num_lines: 4,
            },
        );
        props.insert(
            "rushing_yards".to_string(),
            LadderConfig {
                step: dec!(5),
                odds_shift: 18,
                num_lines: 4,
            },
        );
        props.insert(
            "receiving_yards".to_string(),
            LadderConfig {
                step: dec!(5),
                odds_shift: 18,
                num_lines: 4,
            },
        );
        props.insert(
            "receptions".to_string(),
            LadderConfig {
                step: dec!(0.5),
                odds_shift: 25,
                num_lines: 3,
            },
        );
        props.insert(
            "points".to_string(),
            LadderConfig {
                step: dec!(1),
                odds_shift: 15,
                num_lines: 4,
            },
        );
        props.insert(
            "rebounds".to_string(),
            LadderConfig {
                step: dec!(0.5),
                odds_shift: 20,
                num_lines: 3,
            },
        );
        props.insert(
            "assists".to_string(),
            LadderConfig {
                step: dec!(0.5),
                odds_shift: 20,
                num_lines: 3,
            },
        );
        Self {
            default: LadderConfig::default(),
            props,
        }
    }
}

/// A prop with its quoted lines; the first line is the primary market.
#[derive(Debug, Clone)]
pub struct Prop {
    /// Identifier for cache keys and display.
    pub id: PropId,
    /// Category key into the ladder table, e.g. `passing_yards`.
    pub prop_type: String,
    /// Quoted lines, primary first.
    pub lines: Vec<LineOdds>,
}

/// Synthesize the alternate-line ladder around a prop's primary line.
///
/// Produces `2 * num_lines + 1` entries ordered ascending by line value,
/// the primary unchanged in the middle. Below the primary the over price
/// shortens and the under price lengthens by `odds_shift` per step; above
/// it the skew mirrors. Fully deterministic; a prop with no quoted lines
/// yields an empty ladder.
#[must_use]
pub fn generate_alternate_lines(prop: &Prop, table: &LadderTable) -> Vec<LineOdds> {
    let Some(primary) = prop.lines.first() else {
        return Vec::new();
    };
    let config = table.config_for(&prop.prop_type);

    let mut ladder = Vec::with_capacity(2 * config.num_lines as usize + 1);
    for k in (1..=config.num_lines as i32).rev() {
        let shift = config.odds_shift * k;
        ladder.push(LineOdds {
            line: primary.line - config.step * Decimal::from(k),
            over: primary.over.shifted(-shift),
            under: primary.under.shifted(shift),
        });
    }
    ladder.push(*primary);
    for k in 1..=config.num_lines as i32 {
        let shift = config.odds_shift * k;
        ladder.push(LineOdds {
            line: primary.line + config.step * Decimal::from(k),
            over: primary.over.shifted(shift),
            under: primary.under.shifted(-shift),
        });
    }
    ladder
}
