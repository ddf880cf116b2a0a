//! Placement strategies: pluggable algorithms that consume a sorted item
//! pool and commit items into a [`Container`], sharing the anchor generator
//! and scoring keys in [`anchors`] and [`scoring`].

pub mod anchors;
pub mod density_first;
pub mod scoring;
pub mod spot_centric;

use crate::config::EngineConfig;
use crate::model::{Container, Item, Rotation};

pub use density_first::DensityFirstFit;
pub use spot_centric::SpotCentricFit;

/// A packing strategy commits as many items from `pool` into `container` as
/// it can, moving anything it cannot place into `container.unpacked`.
pub trait Strategy {
    fn name(&self) -> &'static str;
    fn run(&self, container: &mut Container, pool: Vec<Item>, cfg: &EngineConfig);
}

/// Rotations worth trying for `item` against `container`, in preference
/// order. Oversized items (longer than the container is wide) are
/// restricted to their unrotated orientation; pallets prefer width-along-x.
pub(crate) fn rotation_order(item: &Item, container: &Container) -> Vec<Rotation> {
    if item.l > container.width {
        vec![Rotation::Standard]
    } else if item.packaging_type == crate::model::PackagingType::Pallet {
        vec![Rotation::Rotated, Rotation::Standard]
    } else {
        vec![Rotation::Standard, Rotation::Rotated]
    }
}

pub(crate) fn dimension_for(item: &Item, rotation: Rotation) -> (f64, f64, f64) {
    match rotation {
        Rotation::Standard => (item.l, item.w, item.h),
        Rotation::Rotated => (item.w, item.l, item.h),
    }
}

/// Commits `item` (already carrying its winning `rotation`/position) into
/// the container: updates the supporter's load ledger, the item's stack
/// layer, and the running weight total.
pub(crate) fn commit(
    container: &mut Container,
    mut item: Item,
    rotation: Rotation,
    anchor: anchors::Anchor,
) {
    item.rotation = rotation;
    item.x = anchor.x;
    item.y = anchor.y;
    item.z = anchor.z;
    if let Some(idx) = anchor.supporter {
        let layer = container.placed[idx].stack_layer;
        container.placed[idx].current_load_on_top += item.weight;
        item.stack_layer = layer + 1;
    } else {
        item.stack_layer = 1;
    }
    container.current_weight += item.weight;
    container.placed.push(item);
}
