//! Splits the batch into longitudinal loading zones before any placement
//! strategy runs, then imposes the final per-zone loading order. Container
//! length alone decides which of the two partitioning modes applies; see
//! [`crate::model::Container::is_long`].

use std::cmp::Ordering;

use crate::config::EngineConfig;
use crate::model::Item;

fn super_long_flag(item: &Item) -> i32 {
    let max_dim = item.l.max(item.w);
    if max_dim >= 6000.0 {
        2
    } else if max_dim >= 3000.0 {
        1
    } else {
        0
    }
}

/// Descending sort key used for the final per-zone loading order: deepest
/// super-long items first, then user priority (lower = loaded first /
/// deeper), then height band, then weight, then raw height.
fn final_order_key(item: &Item) -> [f64; 5] {
    [
        super_long_flag(item) as f64,
        -item.priority as f64,
        (item.h / 100.0).floor(),
        item.weight,
        item.h,
    ]
}

fn cmp_f64_slices(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn sort_final(zone: &mut [Item]) {
    zone.sort_by(|a, b| cmp_f64_slices(&final_order_key(b), &final_order_key(a)));
}

/// Three longitudinal zones for a 40ft-class container: `A` deepest inside,
/// `B` the middle, `C` nearest the door.
pub struct ThreeZones {
    pub a: Vec<Item>,
    pub b: Vec<Item>,
    pub c: Vec<Item>,
}

/// Two longitudinal zones for a 20ft-class container, after ratio
/// correction has pulled `weight(a)/total` into the configured window.
pub struct TwoZones {
    pub a: Vec<Item>,
    pub b: Vec<Item>,
}

fn total_weight(items: &[Item]) -> f64 {
    items.iter().map(|i| i.weight).sum()
}

/// 40ft-class partitioning: oversized items anchor zone A, mid-size items
/// anchor zone B, and the remainder is greedily distributed by descending
/// height/weight to hit the configured weight targets.
pub fn partition_three_zones(items: Vec<Item>, cfg: &EngineConfig) -> ThreeZones {
    let total = total_weight(&items);
    let target_a = cfg.zone_a_target_40ft * total;

    let mut must_go_a = Vec::new();
    let mut can_go_b = Vec::new();
    let mut others = Vec::new();
    for item in items {
        let max_d = item.l.max(item.w);
        if max_d > 9000.0 {
            must_go_a.push(item);
        } else if max_d >= 3000.0 {
            can_go_b.push(item);
        } else {
            others.push(item);
        }
    }

    let mut a = must_go_a;
    let mut current_a_weight = total_weight(&a);
    others.sort_by(|x, y| cmp_f64_slices(&[y.h, y.weight], &[x.h, x.weight]));
    let mut remaining_others = Vec::new();
    for item in others {
        if current_a_weight < target_a {
            current_a_weight += item.weight;
            a.push(item);
        } else {
            remaining_others.push(item);
        }
    }

    let mut b = can_go_b;
    remaining_others.sort_by(|x, y| {
        y.type_id
            .cmp(&x.type_id)
            .then_with(|| cmp_f64_slices(&[y.weight, y.h], &[x.weight, x.h]))
    });
    let mut current_b_weight = total_weight(&b);
    let target_b_fill = total * cfg.zone_b_target_40ft;
    let mut c = Vec::new();
    for item in remaining_others {
        if current_b_weight < target_b_fill {
            current_b_weight += item.weight;
            b.push(item);
        } else {
            c.push(item);
        }
    }

    sort_final(&mut a);
    sort_final(&mut b);
    sort_final(&mut c);
    ThreeZones { a, b, c }
}

/// 20ft-class partitioning: greedily fill zone A by descending height/weight
/// until the target fraction is reached, then run the ratio-correction loop
/// to pull `weight(a)/total` into the configured window.
///
/// The "move out of A" rule follows the original tool's actual behavior
/// rather than its prose description: among A-items with `l < 3000`, the
/// shortest item by height is moved (ties broken toward the heavier one),
/// not the shortest by length. See DESIGN.md for the discrepancy this
/// resolves.
pub fn partition_two_zones(items: Vec<Item>, cfg: &EngineConfig) -> TwoZones {
    let total = total_weight(&items);
    let target_a = cfg.zone_a_target_20ft * total;

    let mut pool = items;
    pool.sort_by(|x, y| cmp_f64_slices(&[y.h, y.weight], &[x.h, x.weight]));

    let mut a = Vec::new();
    let mut b = Vec::new();
    let mut current_a_weight = 0.0;
    for item in pool {
        if current_a_weight < target_a {
            current_a_weight += item.weight;
            a.push(item);
        } else {
            b.push(item);
        }
    }

    let (min_ratio, max_ratio) = cfg.zone_a_ratio_window;
    for _ in 0..cfg.ratio_correction_max_iterations {
        let wt_a = total_weight(&a);
        let ratio_a = if total > 0.0 { wt_a / total } else { 0.0 };
        if ratio_a >= min_ratio && ratio_a <= max_ratio {
            break;
        }

        if ratio_a > max_ratio {
            let mut candidate_idx = None;
            let mut candidate_key = None;
            for (idx, item) in a.iter().enumerate() {
                if item.l >= 3000.0 {
                    continue;
                }
                let key = (item.h, -item.weight);
                if candidate_key.is_none() || key < candidate_key.unwrap() {
                    candidate_key = Some(key);
                    candidate_idx = Some(idx);
                }
            }
            match candidate_idx {
                Some(idx) => b.push(a.remove(idx)),
                None => break,
            }
        } else {
            if b.is_empty() {
                break;
            }
            let mut best_idx = 0;
            let mut best_key = (-b[0].h, -b[0].weight);
            for (idx, item) in b.iter().enumerate().skip(1) {
                let key = (-item.h, -item.weight);
                if key < best_key {
                    best_key = key;
                    best_idx = idx;
                }
            }
            a.push(b.remove(best_idx));
        }
    }

    sort_final(&mut a);
    sort_final(&mut b);
    TwoZones { a, b }
}
