//! End-to-end analysis flow: ladder -> cache -> line sweep.

use std::time::Duration;

use oddsmith::analysis::{best_line, AnalysisConfig, KeepForever, MarketDataCache};
use oddsmith::domain::{
    generate_alternate_lines, AmericanOdds, LadderTable, LineOdds, Projection, Prop, PropId,
    Side,
};
use rust_decimal_macros::dec;

fn odds(raw: i32) -> AmericanOdds {
    AmericanOdds::try_new(raw).unwrap()
}

fn passing_prop() -> Prop {
    Prop {
        id: PropId::new("qb1-passing-yards"),
        prop_type: "passing_yards".to_string(),
        lines: vec![LineOdds {
            line: dec!(249.5),
            over: odds(-110),
            under: odds(-110),
        }],
    }
}

#[test]
fn sweep_of_cached_ladder_finds_the_value_side() {
    let table = LadderTable::default();
    let cache = MarketDataCache::new(KeepForever);

    let prop = passing_prop();
    cache.insert(prop.id.clone(), generate_alternate_lines(&prop, &table));

    let lines = cache.get(&prop.id).expect("snapshot was just cached");
    assert_eq!(lines.len(), 9);

    // Model projects well over the primary line; the sweep should land on
    // an over.
    let projection = Projection::new(285.0, 30.0);
    let best = best_line(&projection, &lines, &AnalysisConfig::default())
        .unwrap()
        .expect("a projection 35 yards over the line has +EV entries");

    assert_eq!(best.side, Side::Over);
    assert!(best.ev_percent > 0.0);
    assert!(best.true_probability > 0.5);
}

#[test]
fn under_projection_flips_the_recommendation() {
    let table = LadderTable::default();
    let prop = passing_prop();
    let lines = generate_alternate_lines(&prop, &table);

    let projection = Projection::new(215.0, 30.0);
    let best = best_line(&projection, &lines, &AnalysisConfig::default())
        .unwrap()
        .expect("a projection 35 yards under the line has +EV entries");

    assert_eq!(best.side, Side::Under);
}

#[test]
fn expired_snapshot_forces_a_refetch_path() {
    let cache = MarketDataCache::with_max_age(Duration::ZERO);
    let table = LadderTable::default();
    let prop = passing_prop();

    cache.insert(prop.id.clone(), generate_alternate_lines(&prop, &table));
    assert!(
        cache.get(&prop.id).is_none(),
        "zero TTL must never serve a snapshot"
    );
}

#[test]
fn ev_floor_is_respected_end_to_end() {
    let table = LadderTable::default();
    let prop = passing_prop();
    let lines = generate_alternate_lines(&prop, &table);

    // A projection dead on the primary line at a vigged price: nothing
    // should clear a steep EV requirement.
    let projection = Projection::new(249.5, 30.0);
    let config = AnalysisConfig {
        min_ev_percent: 50.0,
    };
    assert!(best_line(&projection, &lines, &config).unwrap().is_none());
}
