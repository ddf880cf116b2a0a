use serde::{Deserialize, Serialize};

/// Load-bearing heuristic constants for the anchor generator, the stacking
/// predicate, and the longitudinal load partitioner.
///
/// Every tunable named in the scoring and partitioning rules lives here so a
/// caller can override the heuristic without touching the algorithm code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Geometric tolerance (mm) absorbed into every collision/adjacency check.
    #[serde(default = "default_epsilon_mm")]
    pub epsilon_mm: f64,
    /// Minimum fraction of the upper footprint that must rest on its supporter.
    #[serde(default = "default_support_area_ratio")]
    pub support_area_ratio: f64,
    /// An item may weigh at most this multiple of its supporter.
    #[serde(default = "default_pyramid_tolerance")]
    pub pyramid_tolerance: f64,

    #[serde(default = "default_wall_bonus")]
    pub wall_bonus: i64,
    #[serde(default = "default_back_wall_bonus")]
    pub back_wall_bonus: i64,
    #[serde(default = "default_type_bonus")]
    pub type_bonus: i64,
    #[serde(default = "default_grouping_bonus")]
    pub grouping_bonus: i64,
    #[serde(default = "default_stacking_bonus")]
    pub stacking_bonus: i64,
    #[serde(default = "default_perfect_match_stack_bonus")]
    pub perfect_match_stack_bonus: i64,
    #[serde(default = "default_adjacency_bonus")]
    pub adjacency_bonus: i64,

    /// Fraction of total batch weight targeted for zone A in 40ft mode.
    #[serde(default = "default_zone_a_target_40ft")]
    pub zone_a_target_40ft: f64,
    /// Fraction of total batch weight targeted for zone B in 40ft mode.
    #[serde(default = "default_zone_b_target_40ft")]
    pub zone_b_target_40ft: f64,
    /// Fraction of total batch weight targeted for zone A in 20ft mode.
    #[serde(default = "default_zone_a_target_20ft")]
    pub zone_a_target_20ft: f64,
    /// Acceptable `weight(A)/total` window for 20ft mode, (low, high).
    #[serde(default = "default_zone_a_ratio_window")]
    pub zone_a_ratio_window: (f64, f64),
    /// Hard cap on ratio-correction loop iterations.
    #[serde(default = "default_ratio_correction_max_iterations")]
    pub ratio_correction_max_iterations: u32,

    /// Container length (mm) above which 40ft three-zone partitioning applies.
    #[serde(default = "default_long_container_threshold_mm")]
    pub long_container_threshold_mm: f64,
    /// Container length (mm) below which the stack-layer cap drops to 2.
    #[serde(default = "default_short_container_layer_threshold_mm")]
    pub short_container_layer_threshold_mm: f64,

    /// Accepted for call-site compatibility with the tool this engine replaces;
    /// not consulted by any algorithm (see DESIGN.md).
    #[serde(default)]
    pub n_simulations: Option<u32>,
    #[serde(default)]
    pub max_lr_diff: Option<f64>,
    #[serde(default)]
    pub max_fb_diff: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon_mm: default_epsilon_mm(),
            support_area_ratio: default_support_area_ratio(),
            pyramid_tolerance: default_pyramid_tolerance(),
            wall_bonus: default_wall_bonus(),
            back_wall_bonus: default_back_wall_bonus(),
            type_bonus: default_type_bonus(),
            grouping_bonus: default_grouping_bonus(),
            stacking_bonus: default_stacking_bonus(),
            perfect_match_stack_bonus: default_perfect_match_stack_bonus(),
            adjacency_bonus: default_adjacency_bonus(),
            zone_a_target_40ft: default_zone_a_target_40ft(),
            zone_b_target_40ft: default_zone_b_target_40ft(),
            zone_a_target_20ft: default_zone_a_target_20ft(),
            zone_a_ratio_window: default_zone_a_ratio_window(),
            ratio_correction_max_iterations: default_ratio_correction_max_iterations(),
            long_container_threshold_mm: default_long_container_threshold_mm(),
            short_container_layer_threshold_mm: default_short_container_layer_threshold_mm(),
            n_simulations: None,
            max_lr_diff: None,
            max_fb_diff: None,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if any ratio or tolerance is out of a sane range.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::LoadoutError;

        if self.epsilon_mm < 0.0 {
            return Err(LoadoutError::InvalidConfig(
                "epsilon_mm must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.support_area_ratio) {
            return Err(LoadoutError::InvalidConfig(format!(
                "support_area_ratio must be in [0, 1], got {}",
                self.support_area_ratio
            )));
        }
        if self.pyramid_tolerance < 1.0 {
            return Err(LoadoutError::InvalidConfig(format!(
                "pyramid_tolerance must be >= 1.0, got {}",
                self.pyramid_tolerance
            )));
        }
        let (lo, hi) = self.zone_a_ratio_window;
        if lo >= hi || lo < 0.0 || hi > 1.0 {
            return Err(LoadoutError::InvalidConfig(format!(
                "zone_a_ratio_window ({lo}, {hi}) is not a valid ascending fraction window"
            )));
        }
        if self.ratio_correction_max_iterations == 0 {
            return Err(LoadoutError::InvalidConfig(
                "ratio_correction_max_iterations must be > 0".into(),
            ));
        }
        if self.long_container_threshold_mm <= 0.0 || self.short_container_layer_threshold_mm <= 0.0
        {
            return Err(LoadoutError::InvalidConfig(
                "container length thresholds must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn default_epsilon_mm() -> f64 {
    1.0
}
fn default_support_area_ratio() -> f64 {
    0.95
}
fn default_pyramid_tolerance() -> f64 {
    1.10
}
fn default_wall_bonus() -> i64 {
    5000
}
fn default_back_wall_bonus() -> i64 {
    2000
}
fn default_type_bonus() -> i64 {
    20
}
fn default_grouping_bonus() -> i64 {
    10
}
fn default_stacking_bonus() -> i64 {
    20000
}
fn default_perfect_match_stack_bonus() -> i64 {
    50000
}
fn default_adjacency_bonus() -> i64 {
    30
}
fn default_zone_a_target_40ft() -> f64 {
    0.20
}
fn default_zone_b_target_40ft() -> f64 {
    0.60
}
fn default_zone_a_target_20ft() -> f64 {
    0.42
}
fn default_zone_a_ratio_window() -> (f64, f64) {
    (0.40, 0.45)
}
fn default_ratio_correction_max_iterations() -> u32 {
    2000
}
fn default_long_container_threshold_mm() -> f64 {
    9000.0
}
fn default_short_container_layer_threshold_mm() -> f64 {
    7000.0
}

/// Builder for `EngineConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct EngineConfigBuilder {
    cfg: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: EngineConfig::default(),
        }
    }
    pub fn epsilon_mm(mut self, v: f64) -> Self {
        self.cfg.epsilon_mm = v;
        self
    }
    pub fn support_area_ratio(mut self, v: f64) -> Self {
        self.cfg.support_area_ratio = v;
        self
    }
    pub fn pyramid_tolerance(mut self, v: f64) -> Self {
        self.cfg.pyramid_tolerance = v;
        self
    }
    pub fn wall_bonus(mut self, v: i64) -> Self {
        self.cfg.wall_bonus = v;
        self
    }
    pub fn back_wall_bonus(mut self, v: i64) -> Self {
        self.cfg.back_wall_bonus = v;
        self
    }
    pub fn type_bonus(mut self, v: i64) -> Self {
        self.cfg.type_bonus = v;
        self
    }
    pub fn grouping_bonus(mut self, v: i64) -> Self {
        self.cfg.grouping_bonus = v;
        self
    }
    pub fn stacking_bonus(mut self, v: i64) -> Self {
        self.cfg.stacking_bonus = v;
        self
    }
    pub fn perfect_match_stack_bonus(mut self, v: i64) -> Self {
        self.cfg.perfect_match_stack_bonus = v;
        self
    }
    pub fn adjacency_bonus(mut self, v: i64) -> Self {
        self.cfg.adjacency_bonus = v;
        self
    }
    pub fn zone_a_target_40ft(mut self, v: f64) -> Self {
        self.cfg.zone_a_target_40ft = v;
        self
    }
    pub fn zone_b_target_40ft(mut self, v: f64) -> Self {
        self.cfg.zone_b_target_40ft = v;
        self
    }
    pub fn zone_a_target_20ft(mut self, v: f64) -> Self {
        self.cfg.zone_a_target_20ft = v;
        self
    }
    pub fn zone_a_ratio_window(mut self, lo: f64, hi: f64) -> Self {
        self.cfg.zone_a_ratio_window = (lo, hi);
        self
    }
    pub fn ratio_correction_max_iterations(mut self, v: u32) -> Self {
        self.cfg.ratio_correction_max_iterations = v;
        self
    }
    pub fn long_container_threshold_mm(mut self, v: f64) -> Self {
        self.cfg.long_container_threshold_mm = v;
        self
    }
    pub fn short_container_layer_threshold_mm(mut self, v: f64) -> Self {
        self.cfg.short_container_layer_threshold_mm = v;
        self
    }
    pub fn build(self) -> EngineConfig {
        self.cfg
    }
}

impl EngineConfig {
    /// Create a fluent builder for `EngineConfig`.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_ratio_window_rejected() {
        let cfg = EngineConfig::builder().zone_a_ratio_window(0.5, 0.4).build();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn builder_round_trips_fields() {
        let cfg = EngineConfig::builder().epsilon_mm(2.5).wall_bonus(1).build();
        assert_eq!(cfg.epsilon_mm, 2.5);
        assert_eq!(cfg.wall_bonus, 1);
    }
}
