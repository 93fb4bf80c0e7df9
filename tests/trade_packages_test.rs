//! Integration tests for valuation and trade packages through the public API

use sleeper_ffl::{
    analysis::{
        trade::{suggest_packages, Fairness, MAX_PACKAGES},
        valuation::score,
        Player, ValuationContext,
    },
    InjuryStatus, Position, SleeperError,
};
use std::collections::HashMap;

/// A 32-year-old kicker: base 0.3, no youth bonus, so value = 0.3 + points / 20.
fn kicker(id: &str, value: f64) -> (Player, f64) {
    let player = Player::new(id, Some(Position::K)).with_age(32);
    (player, (value - 0.3) * 20.0)
}

fn candidates(values: &[(&str, f64)]) -> (Vec<Player>, ValuationContext) {
    let mut players = Vec::new();
    let mut points = HashMap::new();
    for (id, value) in values {
        let (player, pts) = kicker(id, *value);
        points.insert(player.id.clone(), pts);
        players.push(player);
    }
    (
        players,
        ValuationContext::new(points, HashMap::new(), HashMap::new()),
    )
}

#[test]
fn test_healthy_and_out_rb_scores() {
    let rb = Player::new("4866", Some(Position::RB)).with_age(27);
    assert_eq!(score(&rb, 20.0, 0, 0).as_f64(), 3.0);

    let out = rb.clone().with_injury(InjuryStatus::Out);
    assert_eq!(score(&out, 20.0, 0, 0).as_f64(), 1.5);
}

#[test]
fn test_combined_package_ranks_first() {
    let (players, ctx) = candidates(&[("a", 2.0), ("b", 1.2)]);

    let packages = suggest_packages(3.0, &players, &ctx).unwrap();

    assert_eq!(packages.len(), 1);
    let best = &packages[0];
    assert_eq!(best.players.len(), 2);
    assert_eq!(best.fairness, Fairness::Fair);
    assert!((best.total_value - 3.2).abs() < 1e-9);
}

#[test]
fn test_package_limits_and_labels() {
    let values: Vec<(String, f64)> = (0..12)
        .map(|i| (format!("k{i}"), 0.8 + 0.05 * i as f64))
        .collect();
    let refs: Vec<(&str, f64)> = values.iter().map(|(id, v)| (id.as_str(), *v)).collect();
    let (players, ctx) = candidates(&refs);

    for target in [1.0, 1.5, 2.0, 2.7] {
        let packages = suggest_packages(target, &players, &ctx).unwrap();
        assert!(packages.len() <= MAX_PACKAGES);
        assert!(packages.iter().all(|p| p.fairness != Fairness::Unfair));
        assert!(packages.iter().all(|p| {
            let ratio = p.total_value / target;
            (0.8 - 1e-9..=1.2 + 1e-9).contains(&ratio)
        }));
    }
}

#[test]
fn test_empty_candidates_and_bad_targets() {
    let ctx = ValuationContext::default();
    assert!(suggest_packages(2.0, &[], &ctx).unwrap().is_empty());

    for target in [0.0, -2.0] {
        match suggest_packages(target, &[], &ctx) {
            Err(SleeperError::InvalidTarget { .. }) => (),
            other => panic!("Expected InvalidTarget, got {other:?}"),
        }
    }
}
