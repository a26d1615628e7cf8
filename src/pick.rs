//! Weighted random selection.
//!
//! The i-th candidate (0-indexed) gets weight `max(0.3, 1.5 - 0.2 * i)`, so
//! earlier entries are favored but the tail stays reachable.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::params::HP;

pub fn weight_for(index: usize) -> f64 {
    (HP.weight_base - HP.weight_step * index as f64).max(HP.weight_floor)
}

/// Draw an index into a list of `len` candidates. `None` for an empty list.
pub fn weighted_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match WeightedIndex::new((0..len).map(weight_for)) {
        Ok(dist) => Some(dist.sample(rng)),
        Err(_) => Some(0),
    }
}

pub fn weighted_pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    weighted_index(items.len(), rng).map(|i| &items[i])
}

/// Pick by each item's own weight instead of by position.
pub fn pick_by_weight<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    weight: impl Fn(&T) -> f64,
    rng: &mut R,
) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = match WeightedIndex::new(items.iter().map(|item| weight(item).max(0.0))) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0,
    };
    items.get(index)
}

/// Pick a candidate, or hand back `original` when there is nothing to pick.
pub fn pick_or<'a, R: Rng + ?Sized>(items: &[&'a str], original: &'a str, rng: &mut R) -> &'a str {
    weighted_pick(items, rng).copied().unwrap_or(original)
}

/// Weighted pick restricted to candidates not yet in `used`. Falls back to the
/// full list once everything has been used.
pub fn weighted_pick_fresh<'a, R: Rng + ?Sized>(
    items: &[&'a str],
    used: &[String],
    rng: &mut R,
) -> Option<&'a str> {
    let fresh: Vec<&'a str> = items
        .iter()
        .copied()
        .filter(|c| !used.iter().any(|u| u.eq_ignore_ascii_case(c)))
        .collect();
    if fresh.is_empty() {
        weighted_pick(items, rng).copied()
    } else {
        weighted_pick(&fresh, rng).copied()
    }
}

/// Bernoulli draw with the probability clamped to [0, 1].
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability.is_nan() {
        return false;
    }
    rng.gen_bool(probability.clamp(0.0, 1.0))
}
