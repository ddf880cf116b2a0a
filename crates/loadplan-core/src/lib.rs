//! Core library for heuristic 3D container loading.
//!
//! - Strategies: Spot-Centric Fit (global best move) and Density-First Fit
//!   (sequential first-fit), both built on a shared anchor generator.
//! - Driver: [`solver::solve`] partitions the batch by container length,
//!   runs both strategies, retries leftovers with stacking forced on, and
//!   keeps whichever strategy scores best.
//! - Data model is serde-serializable; statistics and mutation operators
//!   live alongside it for callers that present or edit a solved plan.
//!
//! Quick example:
//! ```
//! use loadplan_core::prelude::*;
//!
//! let input = SolverInput {
//!     length: 12000.0,
//!     width: 2400.0,
//!     height: 2400.0,
//!     max_weight: 28000.0,
//!     allow_stacking: true,
//!     items: vec![ItemSpec {
//!         name: "pallet".into(),
//!         l: 1200.0,
//!         w: 1000.0,
//!         h: 1500.0,
//!         weight: 500.0,
//!         qty: 1,
//!         packaging_type: PackagingType::Pallet,
//!         priority: 1,
//!         type_id: None,
//!         max_load: None,
//!         allow_stacking: true,
//!     }],
//! };
//! let cfg = EngineConfig::default();
//! let container = solve(&input, &cfg).unwrap();
//! println!("placed: {}", container.placed.len());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod model;
pub mod mutations;
pub mod partition;
pub mod solver;
pub mod stats;

pub use config::*;
pub use error::*;
pub use model::*;
pub use solver::*;

/// Convenience prelude for common types and functions.
/// Importing `loadplan_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{EngineConfig, EngineConfigBuilder};
    pub use crate::engine::{DensityFirstFit, SpotCentricFit, Strategy};
    pub use crate::error::{LoadoutError, Result};
    pub use crate::model::{Container, Item, ItemSpec, PackagingType, Rotation};
    pub use crate::mutations;
    pub use crate::solver::{solve, SolverInput};
    pub use crate::stats::{self, PackStats};
}
