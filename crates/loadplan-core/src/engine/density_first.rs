//! Density-First Fit: scan the pool in its current order and commit the
//! first item that fits (restarting the scan after every commit), scoring
//! candidates by tightness of fit rather than global balance. O(n^2) by
//! design — the pool is rescanned from the front after each placement so
//! later high-priority items never get starved behind earlier unplaceable
//! ones.

use crate::config::EngineConfig;
use crate::model::{Container, Item};

use super::scoring::{compare_keys, density_key};
use super::{anchors, commit, dimension_for, rotation_order, Strategy};

#[derive(Debug, Default, Clone, Copy)]
pub struct DensityFirstFit;

impl Strategy for DensityFirstFit {
    fn name(&self) -> &'static str {
        "density_first"
    }

    fn run(&self, container: &mut Container, pool: Vec<Item>, cfg: &EngineConfig) {
        let mut pool = pool;
        while !pool.is_empty() {
            let mut found = None;

            for (idx, item) in pool.iter().enumerate() {
                if container.current_weight + item.weight > container.max_weight {
                    continue;
                }
                let mut best: Option<(crate::model::Rotation, anchors::Anchor, [f64; 4])> = None;
                for rotation in rotation_order(item, container) {
                    let (len, wid, hei) = dimension_for(item, rotation);
                    let candidates = anchors::generate(container, item, len, wid, hei, 0.0, container.length, cfg);
                    if let Some((anchor, key)) = candidates
                        .iter()
                        .map(|a| (*a, density_key(container, a, len, wid, container.length)))
                        .min_by(|(_, a), (_, b)| compare_keys(a, b))
                    {
                        let better = match &best {
                            None => true,
                            Some((_, _, best_key)) => compare_keys(&key, best_key) == std::cmp::Ordering::Less,
                        };
                        if better {
                            best = Some((rotation, anchor, key));
                        }
                    }
                }
                if let Some((rotation, anchor, _)) = best {
                    found = Some((idx, rotation, anchor));
                    break;
                }
            }

            match found {
                Some((idx, rotation, anchor)) => {
                    let item = pool.remove(idx);
                    commit(container, item, rotation, anchor);
                }
                None => {
                    container.unpacked.extend(pool);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackagingType;

    fn item(name: &str, l: f64, w: f64, h: f64, weight: f64) -> Item {
        Item {
            name: name.into(),
            l,
            w,
            h,
            weight,
            packaging_type: PackagingType::Crate,
            type_id: format!("{l}x{w}"),
            max_load_on_top: weight,
            allow_stacking: true,
            priority: 1,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: crate::model::Rotation::Standard,
            stack_layer: 1,
            current_load_on_top: 0.0,
            color: None,
        }
    }

    #[test]
    fn packs_sequential_items_without_gaps_on_x() {
        let cfg = EngineConfig::default();
        let mut container = Container::new(12000.0, 2400.0, 2400.0);
        let pool = vec![
            item("a", 1000.0, 1000.0, 1000.0, 100.0),
            item("b", 1000.0, 1000.0, 1000.0, 100.0),
        ];
        DensityFirstFit.run(&mut container, pool, &cfg);
        assert_eq!(container.placed.len(), 2);
        let mut xs: Vec<f64> = container.placed.iter().map(|i| i.x).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(xs, vec![0.0, 1000.0]);
    }
}
