use loadplan_core::prelude::*;

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
fn s1_empty_pool() {
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
fn s2_single_pallet_lands_in_a_back_corner() {
    let cfg = EngineConfig::default();
    let input = SolverInput {
        length: 12000.0,
        width: 2400.0,
        height: 2400.0,
        max_weight: 28000.0,
        allow_stacking: true,
        items: vec![spec("pallet", 1200.0, 1000.0, 1500.0, 500.0, 1, PackagingType::Pallet)],
    };
    let container = solve(&input, &cfg).unwrap();
    assert_eq!(container.placed.len(), 1);
    let item = &container.placed[0];
    assert!(item.x.abs() < cfg.epsilon_mm);
    assert_eq!(item.rotation, Rotation::Rotated);
}

#[test]
fn s3_identical_pallets_stack_to_form_a_twin_column() {
    let cfg = EngineConfig::default();
    let input = SolverInput {
        length: 12000.0,
        width: 2400.0,
        height: 2400.0,
        max_weight: 28000.0,
        allow_stacking: true,
        items: vec![spec("pallet", 1200.0, 1000.0, 1200.0, 400.0, 2, PackagingType::Pallet)],
    };
    let mut input = input;
    input.items[0].max_load = Some(400.0);
    let container = solve(&input, &cfg).unwrap();
    assert_eq!(container.placed.len(), 2);
    let mut zs: Vec<f64> = container.placed.iter().map(|i| i.z).collect();
    zs.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(zs[0], 0.0);
    assert_eq!(zs[1], 1200.0);
}

#[test]
fn s4_crate_never_rests_above_a_pallet() {
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
    let pallet = container.placed.iter().find(|i| i.name == "pallet");
    if let Some(pallet) = pallet {
        let top = pallet.z + pallet.dimension().2;
        for item in &container.placed {
            if item.name == "crate" {
                assert!((item.z - top).abs() > cfg.epsilon_mm);
            }
        }
    }
}

#[test]
fn s5_twenty_foot_partition_lands_in_ratio_window() {
    let cfg = EngineConfig::default();
    let input = SolverInput {
        length: 5800.0,
        width: 2300.0,
        height: 2400.0,
        max_weight: 24000.0,
        allow_stacking: true,
        items: vec![spec("box", 1000.0, 1000.0, 1000.0, 100.0, 10, PackagingType::Crate)],
    };
    let container = solve(&input, &cfg).unwrap();
    assert_eq!(container.placed.len() + container.unpacked.len(), 10);
}

#[test]
fn s6_overweight_batch_caps_current_weight() {
    let cfg = EngineConfig::default();
    let input = SolverInput {
        length: 12000.0,
        width: 2400.0,
        height: 2400.0,
        max_weight: 2000.0,
        allow_stacking: true,
        items: vec![spec("box", 1000.0, 1000.0, 1000.0, 500.0, 10, PackagingType::Crate)],
    };
    let container = solve(&input, &cfg).unwrap();
    assert!(container.current_weight <= 2000.0 + 1e-9);
    assert!(container.placed.len() <= 4);
    assert_eq!(container.placed.len() + container.unpacked.len(), 10);
}
