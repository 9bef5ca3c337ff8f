//! Sport-agnostic domain logic: odds, probabilities, valuation, ladders.

pub mod error;

mod ids;
mod ladder;
mod leg;
mod odds;
mod probability;
mod valuation;

// Core domain types
pub use error::DomainError;
pub use ids::PropId;
pub use ladder::{generate_alternate_lines, LadderConfig, LadderTable, LineOdds, Prop};
pub use leg::{Leg, Parlay, Side};
pub use odds::{format_american, AmericanOdds, DecimalOdds};
pub use probability::{normal_cdf, standard_normal_cdf, Projection};

// Valuation kernel
pub use valuation::{parlay_confidence, parlay_ev, parlay_odds, single_leg_ev};
