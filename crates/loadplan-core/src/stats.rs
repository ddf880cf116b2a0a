//! Weight-distribution and utilization statistics computed purely from a
//! container's `placed` list. Midplane ties (an item's center sitting
//! exactly on a midplane) split the item's weight 50/50 between the two
//! halves rather than assigning it wholly to one side.

use serde::{Deserialize, Serialize};

use crate::model::Container;

/// Longitudinal balance ratio: percentage of placed weight whose center
/// lies in the "nose" half (`x < length/2`). Defaults to 50.0 when nothing
/// is placed.
pub fn balance_ratio_len(container: &Container) -> f64 {
    if container.current_weight <= 0.0 {
        return 50.0;
    }
    let mid = container.length / 2.0;
    let mut nose = 0.0;
    for item in &container.placed {
        let (cx, _, _) = item.center();
        if cx < mid {
            nose += item.weight;
        } else if (cx - mid).abs() < f64::EPSILON {
            nose += item.weight * 0.5;
        }
    }
    nose / container.current_weight * 100.0
}

/// Full balance + utilization report for a solved container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    pub packed_count: usize,
    pub unpacked_count: usize,
    pub weight_total: f64,
    pub weight_utilization: f64,
    pub volume_utilization: f64,
    pub weight_nose: f64,
    pub weight_door: f64,
    pub weight_left: f64,
    pub weight_right: f64,
    pub weight_bottom: f64,
    pub weight_top: f64,
    pub balance_ratio_len: f64,
    pub balance_ratio_width: f64,
    pub balance_ratio_height: f64,
    pub cog_x: f64,
    pub cog_y: f64,
    pub cog_z: f64,
}

impl PackStats {
    /// One-line human-readable summary, mirroring the density summaries a
    /// packing report traditionally prints.
    pub fn summary(&self) -> String {
        format!(
            "packed={} unpacked={} weight_util={:.1}% volume_util={:.1}% balance(len/wid/hei)={:.1}/{:.1}/{:.1}",
            self.packed_count,
            self.unpacked_count,
            self.weight_utilization,
            self.volume_utilization,
            self.balance_ratio_len,
            self.balance_ratio_width,
            self.balance_ratio_height
        )
    }

    pub fn wasted_volume(&self, container: &Container) -> f64 {
        let total_vol = container.length * container.width * container.height;
        total_vol * (1.0 - self.volume_utilization / 100.0)
    }

    pub fn waste_percentage(&self) -> f64 {
        100.0 - self.volume_utilization
    }
}

/// Computes the full balance/utilization report for `container`.
pub fn compute(container: &Container) -> PackStats {
    let total_vol = container.length * container.width * container.height;
    let used_vol: f64 = container.placed.iter().map(|i| i.volume()).sum();

    let mid_l = container.length / 2.0;
    let mid_w = container.width / 2.0;
    let mid_h = container.height / 2.0;

    let (mut w_nose, mut w_door) = (0.0, 0.0);
    let (mut w_left, mut w_right) = (0.0, 0.0);
    let (mut w_bottom, mut w_top) = (0.0, 0.0);
    let (mut mx, mut my, mut mz) = (0.0, 0.0, 0.0);

    for item in &container.placed {
        let (cx, cy, cz) = item.center();
        mx += cx * item.weight;
        my += cy * item.weight;
        mz += cz * item.weight;

        if cx < mid_l {
            w_nose += item.weight;
        } else if (cx - mid_l).abs() < f64::EPSILON {
            w_nose += item.weight * 0.5;
            w_door += item.weight * 0.5;
        } else {
            w_door += item.weight;
        }

        if cy < mid_w {
            w_left += item.weight;
        } else if (cy - mid_w).abs() < f64::EPSILON {
            w_left += item.weight * 0.5;
            w_right += item.weight * 0.5;
        } else {
            w_right += item.weight;
        }

        if cz < mid_h {
            w_bottom += item.weight;
        } else if (cz - mid_h).abs() < f64::EPSILON {
            w_bottom += item.weight * 0.5;
            w_top += item.weight * 0.5;
        } else {
            w_top += item.weight;
        }
    }

    let (cog_x, cog_y, cog_z) = if container.current_weight > 0.0 {
        (
            mx / container.current_weight,
            my / container.current_weight,
            mz / container.current_weight,
        )
    } else {
        (mid_l, mid_w, mid_h)
    };

    let (ratio_len, ratio_width, ratio_height) = if container.current_weight > 0.0 {
        (
            w_nose / container.current_weight * 100.0,
            w_left / container.current_weight * 100.0,
            w_bottom / container.current_weight * 100.0,
        )
    } else {
        (50.0, 50.0, 50.0)
    };

    PackStats {
        packed_count: container.placed.len(),
        unpacked_count: container.unpacked.len(),
        weight_total: container.current_weight,
        weight_utilization: container.current_weight / container.max_weight * 100.0,
        volume_utilization: if total_vol > 0.0 { used_vol / total_vol * 100.0 } else { 0.0 },
        weight_nose: w_nose,
        weight_door: w_door,
        weight_left: w_left,
        weight_right: w_right,
        weight_bottom: w_bottom,
        weight_top: w_top,
        balance_ratio_len: ratio_len,
        balance_ratio_width: ratio_width,
        balance_ratio_height: ratio_height,
        cog_x,
        cog_y,
        cog_z,
    }
}
