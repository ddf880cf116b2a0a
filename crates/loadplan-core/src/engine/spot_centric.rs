//! Spot-Centric Fit: at every step, consider every remaining item in every
//! allowed rotation and commit whichever single move scores best globally.
//! Expensive but tends to produce the most balanced loads.

use crate::config::EngineConfig;
use crate::model::{Container, Item};

use super::scoring::{balanced_key, compare_keys};
use super::{anchors, commit, dimension_for, rotation_order, Strategy};

#[derive(Debug, Default, Clone, Copy)]
pub struct SpotCentricFit;

impl Strategy for SpotCentricFit {
    fn name(&self) -> &'static str {
        "spot_centric"
    }

    fn run(&self, container: &mut Container, pool: Vec<Item>, cfg: &EngineConfig) {
        let mut pool = pool;
        while !pool.is_empty() {
            let mut best: Option<(usize, crate::model::Rotation, anchors::Anchor, [f64; 10])> = None;

            for (idx, item) in pool.iter().enumerate() {
                if container.current_weight + item.weight > container.max_weight {
                    continue;
                }
                for rotation in rotation_order(item, container) {
                    let (len, wid, hei) = dimension_for(item, rotation);
                    let candidates = anchors::generate(container, item, len, wid, hei, 0.0, container.length, cfg);
                    let Some(anchor) = candidates
                        .iter()
                        .map(|a| (*a, balanced_key(container, item, a, len, wid, hei, container.length, cfg)))
                        .min_by(|(_, a), (_, b)| compare_keys(a, b))
                    else {
                        continue;
                    };
                    let (anchor, key) = anchor;
                    let better = match &best {
                        None => true,
                        Some((_, _, _, best_key)) => compare_keys(&key, best_key) == std::cmp::Ordering::Less,
                    };
                    if better {
                        best = Some((idx, rotation, anchor, key));
                    }
                }
            }

            match best {
                Some((idx, rotation, anchor, _)) => {
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
