//! The solver driver: expands a batch into items, partitions and sorts them,
//! runs both placement strategies on independent containers, retries
//! leftovers with stacking forced on, and keeps whichever strategy scored
//! best.

use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::engine::{DensityFirstFit, Strategy};
use crate::error::{LoadoutError, Result};
use crate::model::{Container, Item, ItemSpec, PackagingType, Rotation};
use crate::partition::{partition_three_zones, partition_two_zones};
use crate::stats::balance_ratio_len;

/// A fully specified solver request: container geometry/limits plus the
/// item lines to expand and pack.
#[derive(Debug, Clone)]
pub struct SolverInput {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub max_weight: f64,
    pub allow_stacking: bool,
    pub items: Vec<ItemSpec>,
}

fn expand(spec: &ItemSpec, allow_stacking: bool) -> Result<Vec<Item>> {
    if spec.qty == 0 {
        return Err(LoadoutError::InvalidItem {
            name: spec.name.clone(),
            reason: "qty must be >= 1".into(),
        });
    }
    if spec.l <= 0.0 || spec.w <= 0.0 || spec.h <= 0.0 {
        return Err(LoadoutError::InvalidItem {
            name: spec.name.clone(),
            reason: "dimensions must be positive".into(),
        });
    }
    if spec.weight <= 0.0 {
        return Err(LoadoutError::InvalidItem {
            name: spec.name.clone(),
            reason: "weight must be positive".into(),
        });
    }

    let type_id = spec
        .type_id
        .clone()
        .unwrap_or_else(|| format!("{}x{}", spec.l as i64, spec.w as i64));
    let max_load = spec.max_load.unwrap_or(spec.weight);

    Ok((0..spec.qty)
        .map(|_| Item {
            name: spec.name.clone(),
            l: spec.l,
            w: spec.w,
            h: spec.h,
            weight: spec.weight,
            packaging_type: spec.packaging_type,
            type_id: type_id.clone(),
            max_load_on_top: max_load,
            // `spec.allow_stacking` is accepted for schema compatibility but not
            // consulted here: the original tool assigns every expanded item the
            // single batch-level flag verbatim, regardless of what the item line
            // says (see DESIGN.md).
            allow_stacking,
            priority: spec.priority,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: Rotation::Standard,
            stack_layer: 1,
            current_load_on_top: 0.0,
            color: None,
        })
        .collect())
}

fn score(container: &Container) -> f64 {
    let ratio = balance_ratio_len(container);
    10_000.0 * container.unpacked.len() as f64 + 10.0 * (ratio - 50.0).abs()
}

fn run_strategy(
    strategy: &dyn Strategy,
    length: f64,
    width: f64,
    height: f64,
    max_weight: f64,
    initial_stacking: bool,
    pool: Vec<Item>,
    cfg: &EngineConfig,
) -> Container {
    let mut container = Container::new(length, width, height);
    container.max_weight = max_weight;
    container.allow_stacking = initial_stacking;

    strategy.run(&mut container, pool, cfg);

    if !container.unpacked.is_empty() {
        container.allow_stacking = true;
        let mut leftovers = std::mem::take(&mut container.unpacked);
        leftovers.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| b.base_area().total_cmp(&a.base_area()))
        });
        strategy.run(&mut container, leftovers, cfg);
    }

    container
}

fn center_unpacked(container: &mut Container) {
    let mid_l = container.length / 2.0;
    let mid_w = container.width / 2.0;
    let mid_h = container.height / 2.0;
    for item in &mut container.unpacked {
        let (l, w, h) = item.dimension();
        item.x = mid_l - l / 2.0;
        item.y = mid_w - w / 2.0;
        item.z = mid_h - h / 2.0;
    }
}

/// Solves `input` and returns the best of the two placement strategies, with
/// unpacked items centered for display.
#[instrument(skip_all, fields(length = input.length, items = input.items.len()))]
pub fn solve(input: &SolverInput, cfg: &EngineConfig) -> Result<Container> {
    cfg.validate()?;
    if input.length <= 0.0 || input.width <= 0.0 || input.height <= 0.0 {
        return Err(LoadoutError::InvalidConfig(
            "container dimensions must be positive".into(),
        ));
    }
    if input.max_weight <= 0.0 {
        return Err(LoadoutError::InvalidConfig(
            "max_weight must be positive".into(),
        ));
    }

    let mut base_items = Vec::new();
    for spec in &input.items {
        base_items.extend(expand(spec, input.allow_stacking)?);
    }
    if base_items.is_empty() {
        return Err(LoadoutError::Empty);
    }

    let is_long = input.length > cfg.long_container_threshold_mm;
    let final_order = if is_long {
        debug!("40ft-class container: three-zone partition");
        let zones = partition_three_zones(base_items, cfg);
        let mut order = zones.a;
        order.extend(zones.b);
        order.extend(zones.c);
        order
    } else {
        debug!("20ft-class container: two-zone partition with ratio correction");
        let zones = partition_two_zones(base_items, cfg);
        let mut order = zones.a;
        order.extend(zones.b);
        order
    };

    let initial_stacking = !is_long;

    let strategies: Vec<(&str, Box<dyn Strategy>)> = vec![
        ("spot_centric", Box::new(crate::engine::SpotCentricFit)),
        ("density_first", Box::new(DensityFirstFit)),
    ];

    let mut best: Option<Container> = None;
    let mut best_score = f64::INFINITY;
    for (name, strategy) in &strategies {
        let container = run_strategy(
            strategy.as_ref(),
            input.length,
            input.width,
            input.height,
            input.max_weight,
            initial_stacking,
            final_order.clone(),
            cfg,
        );
        let s = score(&container);
        debug!(strategy = name, unpacked = container.unpacked.len(), score = s, "strategy result");
        if s < best_score {
            best_score = s;
            best = Some(container);
        }
    }

    let mut best = best.expect("at least one strategy always runs");
    center_unpacked(&mut best);
    info!(
        placed = best.placed.len(),
        unpacked = best.unpacked.len(),
        score = best_score,
        "solve complete"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, l: f64, w: f64, h: f64, weight: f64, qty: u32, packaging: PackagingType) -> ItemSpec {
        ItemSpec {
            name: name.into(),
            l,
            w,
            h,
            weight,
            qty,
            packaging_type: packaging,
            priority: 1,
            type_id: None,
            max_load: None,
            allow_stacking: true,
        }
    }

    #[test]
    fn empty_batch_is_an_error() {
        let cfg = EngineConfig::default();
        let input = SolverInput {
            length: 12000.0,
            width: 2400.0,
            height: 2400.0,
            max_weight: 28000.0,
            allow_stacking: true,
            items: vec![],
        };
        assert!(matches!(solve(&input, &cfg), Err(LoadoutError::Empty)));
    }

    #[test]
    fn single_pallet_gets_placed() {
        let cfg = EngineConfig::default();
        let input = SolverInput {
            length: 12000.0,
            width: 2400.0,
            height: 2400.0,
            max_weight: 28000.0,
            allow_stacking: true,
            items: vec![spec("p", 1200.0, 1000.0, 1500.0, 500.0, 1, PackagingType::Pallet)],
        };
        let container = solve(&input, &cfg).unwrap();
        assert_eq!(container.placed.len(), 1);
        assert_eq!(container.unpacked.len(), 0);
    }

    #[test]
    fn overweight_batch_caps_packed_count() {
        let cfg = EngineConfig::default();
        let input = SolverInput {
            length: 12000.0,
            width: 2400.0,
            height: 2400.0,
            max_weight: 2000.0,
            allow_stacking: true,
            items: vec![spec("c", 1000.0, 1000.0, 1000.0, 500.0, 10, PackagingType::Crate)],
        };
        let container = solve(&input, &cfg).unwrap();
        assert!(container.current_weight <= 2000.0);
        assert!(container.placed.len() <= 4);
    }

    #[test]
    fn crate_never_rests_on_pallet() {
        let cfg = EngineConfig::default();
        let input = SolverInput {
            length: 12000.0,
            width: 2400.0,
            height: 2400.0,
            max_weight: 28000.0,
            allow_stacking: true,
            items: vec![
                spec("pallet", 1200.0, 1000.0, 1000.0, 500.0, 1, PackagingType::Pallet),
                spec("crate", 1000.0, 800.0, 500.0, 100.0, 1, PackagingType::Crate),
            ],
        };
        let container = solve(&input, &cfg).unwrap();
        let pallet = container.placed.iter().find(|i| i.name == "pallet").unwrap();
        for item in &container.placed {
            if item.name == "crate" {
                let on_pallet = (item.z - (pallet.z + pallet.dimension().2)).abs() < cfg.epsilon_mm;
                assert!(!on_pallet);
            }
        }
    }

    #[test]
    fn solve_is_deterministic() {
        let cfg = EngineConfig::default();
        let input = SolverInput {
            length: 5800.0,
            width: 2300.0,
            height: 2400.0,
            max_weight: 28000.0,
            allow_stacking: true,
            items: vec![spec("box", 1000.0, 1000.0, 1000.0, 100.0, 10, PackagingType::Crate)],
        };
        let a = solve(&input, &cfg).unwrap();
        let b = solve(&input, &cfg).unwrap();
        assert_eq!(a.placed.len(), b.placed.len());
        for (x, y) in a.placed.iter().zip(b.placed.iter()) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.y, y.y);
            assert_eq!(x.z, y.z);
        }
    }
}
