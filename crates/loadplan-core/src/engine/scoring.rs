//! Lexicographic scoring keys for the two placement strategies. Smaller is
//! better; keys are compared element-wise with [`f64::total_cmp`] so mixed
//! integer bonuses and continuous coordinates sort the same way the
//! original tuple comparison would.

use std::cmp::Ordering;

use crate::config::EngineConfig;
use crate::engine::anchors::Anchor;
use crate::model::{Container, Item};

pub fn compare_keys(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn wall_distances(anchor: &Anchor, wid: f64, container_width: f64) -> (f64, f64) {
    let left = anchor.y;
    let right = (container_width - (anchor.y + wid)).abs();
    (left, right)
}

/// `(x, z, min_wall_dist, gap_metric)` — prefers shallow x, low z, tight
/// wall contact, and the least remaining lateral/longitudinal slack.
pub fn density_key(container: &Container, anchor: &Anchor, len: f64, wid: f64, x1: f64) -> [f64; 4] {
    let (left, right) = wall_distances(anchor, wid, container.width);
    let min_wall_dist = left.min(right);
    let gap_metric = (x1 - (anchor.x + len)) + (container.width - (anchor.y + wid));
    [anchor.x, anchor.z, min_wall_dist, gap_metric]
}

/// 10-element key: `(x, z, -perfect_match, -stacking, -wall, -grouping,
/// -type, -adjacency, gap_metric, y)`.
pub fn balanced_key(
    container: &Container,
    item: &Item,
    anchor: &Anchor,
    len: f64,
    wid: f64,
    hei: f64,
    x1: f64,
    cfg: &EngineConfig,
) -> [f64; 10] {
    let (left, right) = wall_distances(anchor, wid, container.width);
    let min_wall_dist = left.min(right);

    let mut wall_bonus = 0i64;
    if min_wall_dist < cfg.epsilon_mm {
        wall_bonus += cfg.wall_bonus;
    }
    if anchor.x < cfg.epsilon_mm {
        wall_bonus += cfg.back_wall_bonus;
    }

    let mut type_bonus = 0i64;
    let mut grouping_bonus = 0i64;
    let proximity_threshold = len.max(wid).max(hei) * 2.0;
    for other in &container.placed {
        let dist = (other.x - anchor.x).abs() + (other.y - anchor.y).abs() + (other.z - anchor.z).abs();
        if dist < proximity_threshold {
            if other.type_id == item.type_id {
                type_bonus += cfg.type_bonus;
            }
            if other.packaging_type == item.packaging_type {
                grouping_bonus += cfg.grouping_bonus;
            }
        }
    }

    let mut stacking_bonus = 0i64;
    let mut perfect_match_stack = 0i64;
    if anchor.z > cfg.epsilon_mm {
        stacking_bonus = cfg.stacking_bonus;
        if let Some(idx) = anchor.supporter {
            if container.placed[idx].type_id == item.type_id {
                perfect_match_stack = cfg.perfect_match_stack_bonus;
            }
        }
    }

    let mut adjacency_bonus = 0i64;
    for other in &container.placed {
        let (ol, ow, oh) = other.dimension();
        let touches_x = (anchor.x - (other.x + ol)).abs() < cfg.epsilon_mm
            || ((anchor.x + len) - other.x).abs() < cfg.epsilon_mm;
        let touches_y = (anchor.y - (other.y + ow)).abs() < cfg.epsilon_mm
            || ((anchor.y + wid) - other.y).abs() < cfg.epsilon_mm;
        if (touches_x || touches_y) && (anchor.z - other.z).abs() < oh {
            adjacency_bonus = cfg.adjacency_bonus;
            break;
        }
    }

    let gap_metric = (x1 - (anchor.x + len)) + (container.width - (anchor.y + wid));

    [
        anchor.x,
        anchor.z,
        -(perfect_match_stack as f64),
        -(stacking_bonus as f64),
        -(wall_bonus as f64),
        -(grouping_bonus as f64),
        -(type_bonus as f64),
        -(adjacency_bonus as f64),
        gap_metric,
        anchor.y,
    ]
}
