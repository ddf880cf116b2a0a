//! Candidate-position enumeration shared by both placement strategies.
//!
//! Each strategy scores the anchors this module returns under its own
//! lexicographic key (see [`crate::engine::spot_centric`] and
//! [`crate::engine::density_first`]); this module only knows how to find
//! geometrically legal positions, not which one is "best".

use crate::config::EngineConfig;
use crate::geometry::{collides, supports};
use crate::model::{Container, Item};

/// A geometrically legal candidate placement for one item at one rotation.
/// `supporter` is the index into `container.placed` the item would rest on,
/// or `None` for a floor placement.
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub supporter: Option<usize>,
}

fn dedup_sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.total_cmp(b));
    v.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    v
}

/// Enumerates every legal `(x, y, z)` anchor for an item of footprint
/// `(len, wid, hei)` restricted to the longitudinal window `[x0, x1]`.
/// `placed` must already reflect every item committed so far.
pub fn generate(
    container: &Container,
    item: &Item,
    len: f64,
    wid: f64,
    hei: f64,
    x0: f64,
    x1: f64,
    cfg: &EngineConfig,
) -> Vec<Anchor> {
    let eps = cfg.epsilon_mm;
    let placed = &container.placed;

    let mut zs = vec![0.0];
    if container.allow_stacking {
        for j in placed {
            if j.allow_stacking {
                let (_, _, jh) = j.dimension();
                zs.push(j.z + jh);
            }
        }
    }
    let zs = dedup_sorted(zs);

    let mut xs = vec![0.0, container.length, x0, x1 - len];
    let mut ys = vec![0.0, container.width - wid];
    for j in placed {
        let (jl, jw, _) = j.dimension();
        xs.push(j.x);
        xs.push(j.x + jl);
        xs.push(j.x - len);
        xs.push(j.x + jl - len);
        ys.push(j.y);
        ys.push(j.y + jw);
        ys.push(j.y - wid);
        ys.push(j.y + jw - wid);
    }
    let xs = dedup_sorted(xs.into_iter().filter(|v| v.is_finite()).collect());
    let ys = dedup_sorted(ys.into_iter().filter(|v| v.is_finite()).collect());

    let mut out = Vec::new();
    for &z in &zs {
        if z + hei > container.height + eps {
            continue;
        }
        for &x in &xs {
            if x < x0 - eps || x + len > x1 + eps {
                continue;
            }
            for &y in &ys {
                if y < -eps || y + wid > container.width + eps {
                    continue;
                }
                let supporter = if z > eps {
                    placed.iter().position(|j| {
                        let (_, _, jh) = j.dimension();
                        (j.z + jh - z).abs() <= eps && supports(j, item, x, y, z, container, cfg)
                    })
                } else {
                    None
                };
                if z > eps && supporter.is_none() {
                    continue;
                }
                let collision = placed.iter().enumerate().any(|(idx, j)| {
                    if Some(idx) == supporter {
                        return false;
                    }
                    collides(x, y, z, item, j, cfg)
                });
                if collision {
                    continue;
                }
                out.push(Anchor { x, y, z, supporter });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, PackagingType, Rotation};

    fn item() -> Item {
        Item {
            name: "i".into(),
            l: 1000.0,
            w: 1000.0,
            h: 1000.0,
            weight: 100.0,
            packaging_type: PackagingType::Crate,
            type_id: "t".into(),
            max_load_on_top: 100.0,
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
    fn empty_container_yields_floor_anchor_at_origin() {
        let cfg = EngineConfig::default();
        let container = Container::new(12000.0, 2400.0, 2400.0);
        let it = item();
        let anchors = generate(&container, &it, 1000.0, 1000.0, 1000.0, 0.0, 12000.0, &cfg);
        assert!(anchors.iter().any(|a| a.x == 0.0 && a.y == 0.0 && a.z == 0.0));
    }

    #[test]
    fn occupied_floor_blocks_overlapping_anchor() {
        let cfg = EngineConfig::default();
        let mut container = Container::new(12000.0, 2400.0, 2400.0);
        container.placed.push(item());
        let it = item();
        let anchors = generate(&container, &it, 1000.0, 1000.0, 1000.0, 0.0, 12000.0, &cfg);
        assert!(!anchors.iter().any(|a| a.x == 0.0 && a.y == 0.0 && a.z == 0.0));
        assert!(anchors.iter().any(|a| a.x == 1000.0 && a.y == 0.0 && a.z == 0.0));
    }
}
