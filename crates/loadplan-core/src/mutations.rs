//! Interactive mutation operators used after a solve to let a caller
//! manually reposition items. These deliberately do **not** re-validate
//! collision, support, or stacking policy — the caller is responsible for
//! offering them only where they make sense; statistics (`stats::compute`)
//! tolerate arbitrary placements.

use crate::model::Container;

/// Moves `unpacked[idx]` to `placed` at the exact given position, with no
/// collision or support validation. Returns `false` if `idx` is out of
/// range.
pub fn force_pack(container: &mut Container, idx: usize, x: f64, y: f64, z: f64) -> bool {
    if idx >= container.unpacked.len() {
        return false;
    }
    let mut item = container.unpacked.remove(idx);
    item.x = x;
    item.y = y;
    item.z = z;
    container.current_weight += item.weight;
    container.placed.push(item);
    true
}

/// Drops `unpacked[idx]` straight down at `(x, y)` until it rests on the
/// floor or on the highest placed item whose footprint overlaps it at that
/// column. This is a pure gravity snap: no support-area or packaging-policy
/// check is performed.
pub fn drop_unpacked(container: &mut Container, idx: usize, x: f64, y: f64) -> bool {
    if idx >= container.unpacked.len() {
        return false;
    }
    let (l, w, _) = container.unpacked[idx].dimension();
    let eps = 1.0;

    let mut drop_z = 0.0_f64;
    for placed in &container.placed {
        let (pl, pw, ph) = placed.dimension();
        let overlaps = x < placed.x + pl - eps
            && x + l > placed.x + eps
            && y < placed.y + pw - eps
            && y + w > placed.y + eps;
        if overlaps {
            let top_z = placed.z + ph;
            if top_z > drop_z {
                drop_z = top_z;
            }
        }
    }

    force_pack(container, idx, x, y, drop_z)
}

/// Toggles `placed[idx]`'s rotation and clamps its position back inside the
/// container bounds. Returns `false` if `idx` is out of range.
pub fn rotate_in_place(container: &mut Container, idx: usize) -> bool {
    let Some(item) = container.placed.get_mut(idx) else {
        return false;
    };
    item.rotation = item.rotation.toggled();
    let (d0, d1, _) = item.dimension();
    item.x = item.x.min((container.length - d0).max(0.0));
    item.y = item.y.min((container.width - d1).max(0.0));
    true
}

/// Moves `placed[idx]` to `unpacked`. Returns `false` if `idx` is out of
/// range.
pub fn unpack(container: &mut Container, idx: usize) -> bool {
    if idx >= container.placed.len() {
        return false;
    }
    let item = container.placed.remove(idx);
    container.current_weight -= item.weight;
    container.unpacked.push(item);
    true
}
