//! Axis-aligned collision and support predicates shared by every placement
//! strategy. All comparisons are tolerance-aware: two surfaces within
//! `epsilon_mm` of each other are treated as touching, not overlapping.

use crate::config::EngineConfig;
use crate::model::{Container, Item, PackagingType};

fn intervals_overlap(a0: f64, a1: f64, b0: f64, b1: f64, eps: f64) -> bool {
    a0 < b1 - eps && b0 < a1 - eps
}

/// True if `item` placed at `(x, y, z)` would intersect `other` wherever
/// `other` currently sits. Touching faces do not count as collisions.
pub fn collides(x: f64, y: f64, z: f64, item: &Item, other: &Item, cfg: &EngineConfig) -> bool {
    let (l, w, h) = item.dimension();
    let (ol, ow, oh) = other.dimension();
    let eps = cfg.epsilon_mm;
    intervals_overlap(x, x + l, other.x, other.x + ol, eps)
        && intervals_overlap(y, y + w, other.y, other.y + ow, eps)
        && intervals_overlap(z, z + h, other.z, other.z + oh, eps)
}

/// Axis-aligned overlap area of two horizontal footprints, ignoring height.
pub fn footprint_overlap_area(ax: f64, ay: f64, al: f64, aw: f64, bx: f64, by: f64, bl: f64, bw: f64) -> f64 {
    let ox = (ax + al).min(bx + bl) - ax.max(bx);
    let oy = (ay + aw).min(by + bw) - ay.max(by);
    if ox > 0.0 && oy > 0.0 {
        ox * oy
    } else {
        0.0
    }
}

/// Decides whether `below` can legally carry `above` placed at `(x, y, z)`.
/// Checks adjacency, packaging policy, the container's layer cap, the
/// pyramid weight rule, footprint non-overhang, the supporter's remaining
/// top-load budget and the minimum support-area fraction, in that order so
/// the cheapest checks short-circuit first.
pub fn supports(
    below: &Item,
    above: &Item,
    x: f64,
    y: f64,
    z: f64,
    container: &Container,
    cfg: &EngineConfig,
) -> bool {
    let eps = cfg.epsilon_mm;
    let (bl, bw, bh) = below.dimension();
    if (below.z + bh - z).abs() > eps {
        return false;
    }

    match (below.packaging_type, above.packaging_type) {
        (PackagingType::Pallet, PackagingType::Crate) => return false,
        (PackagingType::Crate, PackagingType::Pallet) => {
            let (al, aw, _) = above.dimension();
            if !(al < bl - eps && aw < bw - eps) {
                return false;
            }
        }
        _ => {}
    }

    if below.stack_layer >= container.max_layers(cfg) {
        return false;
    }

    if above.weight > below.weight * cfg.pyramid_tolerance {
        return false;
    }

    let (al, aw, _) = above.dimension();
    if al > bl + eps || aw > bw + eps {
        return false;
    }

    if below.current_load_on_top + above.weight > below.max_load_on_top {
        return false;
    }

    let overlap = footprint_overlap_area(x, y, al, aw, below.x, below.y, bl, bw);
    let above_area = al * aw;
    if above_area <= 0.0 {
        return false;
    }
    overlap / above_area >= cfg.support_area_ratio - 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Rotation};

    fn item(l: f64, w: f64, h: f64, weight: f64, packaging: PackagingType) -> Item {
        Item {
            name: "i".into(),
            l,
            w,
            h,
            weight,
            packaging_type: packaging,
            type_id: "t".into(),
            max_load_on_top: weight,
            allow_stacking: true,
            priority: 1,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: Rotation::Standard,
            stack_layer: 1,
            current_load_on_top: 0.0,
            color: None,
        }
    }

    #[test]
    fn touching_items_do_not_collide() {
        let cfg = EngineConfig::default();
        let mut a = item(1000.0, 1000.0, 1000.0, 100.0, PackagingType::Crate);
        let b = item(1000.0, 1000.0, 1000.0, 100.0, PackagingType::Crate);
        a.x = 1000.0;
        assert!(!collides(a.x, a.y, a.z, &a, &b, &cfg));
    }

    #[test]
    fn overlapping_items_collide() {
        let cfg = EngineConfig::default();
        let a = item(1000.0, 1000.0, 1000.0, 100.0, PackagingType::Crate);
        let b = item(1000.0, 1000.0, 1000.0, 100.0, PackagingType::Crate);
        assert!(collides(500.0, 0.0, 0.0, &a, &b, &cfg));
    }

    #[test]
    fn crate_never_supports_pallet_with_equal_footprint() {
        let cfg = EngineConfig::default();
        let container = Container::new(12000.0, 2400.0, 2400.0);
        let below = item(1000.0, 1000.0, 500.0, 200.0, PackagingType::Crate);
        let above = item(1000.0, 1000.0, 500.0, 100.0, PackagingType::Pallet);
        assert!(!supports(&below, &above, 0.0, 0.0, 500.0, &container, &cfg));
    }

    #[test]
    fn pallet_supports_smaller_crate() {
        let cfg = EngineConfig::default();
        let container = Container::new(12000.0, 2400.0, 2400.0);
        let below = item(1200.0, 1000.0, 150.0, 500.0, PackagingType::Pallet);
        let above = item(1000.0, 800.0, 500.0, 100.0, PackagingType::Crate);
        assert!(supports(&below, &above, 100.0, 100.0, 150.0, &container, &cfg));
    }

    #[test]
    fn pyramid_rule_rejects_overweight_top() {
        let cfg = EngineConfig::default();
        let container = Container::new(12000.0, 2400.0, 2400.0);
        let below = item(1200.0, 1000.0, 150.0, 100.0, PackagingType::Pallet);
        let above = item(1000.0, 800.0, 150.0, 200.0, PackagingType::Pallet);
        assert!(!supports(&below, &above, 0.0, 0.0, 150.0, &container, &cfg));
    }
}
