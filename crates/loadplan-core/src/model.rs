use serde::{Deserialize, Serialize};

/// How an item's footprint sits relative to the container's length axis.
/// `Standard` exposes the item's `(l, w)` footprint as given; `Rotated`
/// swaps length and width. The height axis is never exchanged with a
/// horizontal one — no pitch or roll, only a single 90 degree yaw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Standard,
    Rotated,
}

impl Rotation {
    pub fn toggled(self) -> Self {
        match self {
            Rotation::Standard => Rotation::Rotated,
            Rotation::Rotated => Rotation::Standard,
        }
    }
}

/// Stacking policy class. Crates may never rest under a pallet unless the
/// pallet's footprint is strictly smaller on both horizontal axes.
///
/// Serialized as the integer codes the wire format documents (1 = Pallet,
/// 2 = Crate) rather than as a string, for compatibility with the batch
/// schema external callers already produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PackagingType {
    Pallet = 1,
    Crate = 2,
}

impl Serialize for PackagingType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for PackagingType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(PackagingType::Pallet),
            2 => Ok(PackagingType::Crate),
            other => Err(serde::de::Error::custom(format!(
                "packaging_type must be 1 (pallet) or 2 (crate), got {other}"
            ))),
        }
    }
}

/// A single cuboidal unit of cargo. Intrinsic fields are set once at
/// construction; `x`, `y`, `z`, `rotation`, `stack_layer` and
/// `current_load_on_top` are mutated by the solver and by the mutation
/// operators in [`crate::mutations`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Length, width, height in millimetres (pre-rotation).
    pub l: f64,
    pub w: f64,
    pub h: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub packaging_type: PackagingType,
    /// Grouping tag; defaults to a size-derived key when not supplied.
    pub type_id: String,
    /// Maximum weight this item may carry stacked on top of it.
    pub max_load_on_top: f64,
    pub allow_stacking: bool,
    /// Higher priority loads later (closer to the door).
    pub priority: i32,

    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: Rotation,
    pub stack_layer: u32,
    pub current_load_on_top: f64,
    /// Always `None`: color is presentation-layer cosmetics and is left for
    /// the client to derive from `type_id`.
    pub color: Option<String>,
}

impl Item {
    /// Footprint and height under the item's current rotation: `(d0, d1, d2)`
    /// where `d0` runs along the container length axis.
    pub fn dimension(&self) -> (f64, f64, f64) {
        match self.rotation {
            Rotation::Standard => (self.l, self.w, self.h),
            Rotation::Rotated => (self.w, self.l, self.h),
        }
    }

    pub fn base_area(&self) -> f64 {
        let (d0, d1, _) = self.dimension();
        d0 * d1
    }

    pub fn volume(&self) -> f64 {
        self.l * self.w * self.h
    }

    pub fn center(&self) -> (f64, f64, f64) {
        let (d0, d1, d2) = self.dimension();
        (self.x + d0 / 2.0, self.y + d1 / 2.0, self.z + d2 / 2.0)
    }
}

/// A single line in a solver input batch: one or more identical items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub l: f64,
    pub w: f64,
    pub h: f64,
    pub weight: f64,
    pub qty: u32,
    pub packaging_type: PackagingType,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub max_load: Option<f64>,
    /// Accepted for schema compatibility; every expanded `Item` actually gets
    /// the batch-level `allow_stacking` flag verbatim regardless of what this
    /// field says (see `solver::expand` and DESIGN.md).
    #[serde(default = "default_true")]
    pub allow_stacking: bool,
}

fn default_priority() -> i32 {
    1
}
fn default_true() -> bool {
    true
}

/// The container ledger: intrinsic geometry and limits, plus the mutable
/// placed/unpacked lists. The container is the sole owner of every `Item`;
/// no back-pointer from an item to its supporter is kept, only the
/// supporter's own `current_load_on_top` tally and the child's
/// `stack_layer` integer, so ownership stays a flat, acyclic structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
    #[serde(default = "default_true")]
    pub allow_stacking: bool,
    /// Retained for schema compatibility; forced to 0 everywhere it matters.
    #[serde(default)]
    pub min_gap: f64,
    #[serde(default)]
    pub placed: Vec<Item>,
    #[serde(default)]
    pub unpacked: Vec<Item>,
    #[serde(default)]
    pub current_weight: f64,
}

fn default_max_weight() -> f64 {
    28_000.0
}

impl Container {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            max_weight: default_max_weight(),
            allow_stacking: true,
            min_gap: 0.0,
            placed: Vec::new(),
            unpacked: Vec::new(),
            current_weight: 0.0,
        }
    }

    /// `40ft` three-zone partitioning applies above this length.
    pub fn is_long(&self, cfg: &crate::config::EngineConfig) -> bool {
        self.length > cfg.long_container_threshold_mm
    }

    /// Maximum number of stacked layers this container permits.
    pub fn max_layers(&self, cfg: &crate::config::EngineConfig) -> u32 {
        if self.length < cfg.short_container_layer_threshold_mm {
            2
        } else {
            4
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            name: "pallet".into(),
            l: 1200.0,
            w: 1000.0,
            h: 1500.0,
            weight: 500.0,
            packaging_type: PackagingType::Pallet,
            type_id: "1200x1000".into(),
            max_load_on_top: 500.0,
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
    fn rotation_swaps_horizontal_axes_only() {
        let mut item = sample_item();
        assert_eq!(item.dimension(), (1200.0, 1000.0, 1500.0));
        item.rotation = Rotation::Rotated;
        assert_eq!(item.dimension(), (1000.0, 1200.0, 1500.0));
    }

    #[test]
    fn center_accounts_for_position_and_rotation() {
        let mut item = sample_item();
        item.x = 100.0;
        item.y = 200.0;
        item.z = 300.0;
        assert_eq!(item.center(), (700.0, 700.0, 1050.0));
    }
}
