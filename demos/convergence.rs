//! This example trains a Spatial Pooler on a handful of random input patterns and reports how
//! the representation settles. Every epoch presents each pattern once with learning enabled,
//! then once more without learning, and compares the inference output with the output of the
//! previous epoch.
//!
//! A pooler that has converged keeps its sparsity at the target and maps every pattern to the
//! same set of active columns from one epoch to the next.
//!
//! Run with: `RUST_LOG=info cargo run --release --example convergence`
//! Add `RUST_LOG=htm_spatial_pooler=debug` to see update rounds.

use anyhow::Result;
use htm_spatial_pooler::core::{config::SpatialPoolerConfig, spatial_pooler::SpatialPooler};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

const NUM_PATTERNS: usize = 8;
const EPOCHS: usize = 30;
const INPUT_DENSITY: f64 = 0.1;

fn main() -> Result<()> {
    env_logger::init();

    let config = SpatialPoolerConfig {
        input_dimensions: vec![32, 32],
        column_dimensions: vec![32, 32],
        potential_radius: 8,
        potential_pct: 0.8,
        global_inhibition: true,
        num_active_columns_per_inh_area: 20.0,
        syn_perm_active_inc: 0.03,
        syn_perm_inactive_dec: 0.015,
        ..Default::default()
    };

    info!(
        "Initializing Spatial Pooler with {} columns...",
        config.num_columns()
    );
    let mut spatial_pooler = SpatialPooler::new(config)?;

    let mut rng = StdRng::seed_from_u64(7);
    let patterns: Vec<Vec<bool>> = (0..NUM_PATTERNS)
        .map(|_| {
            (0..spatial_pooler.num_inputs())
                .map(|_| rng.random_bool(INPUT_DENSITY))
                .collect()
        })
        .collect();

    let mut active = vec![false; spatial_pooler.num_columns()];
    let mut previous: Vec<Vec<usize>> = vec![Vec::new(); NUM_PATTERNS];

    for epoch in 1..=EPOCHS {
        for pattern in &patterns {
            spatial_pooler.compute(pattern, true, &mut active)?;
        }

        let mut stability = 0.0;
        let mut sparsity = 0.0;

        for (pattern, last) in patterns.iter().zip(previous.iter_mut()) {
            spatial_pooler.compute(pattern, false, &mut active)?;
            let current = spatial_pooler.active_columns().to_vec();

            let shared = current.iter().filter(|col| last.contains(col)).count();
            stability += shared as f64 / current.len().max(1) as f64;
            sparsity += current.len() as f64 / spatial_pooler.num_columns() as f64;

            *last = current;
        }

        info!(
            "Epoch {:>2}: sparsity {:.2}%, stability {:.1}%, connected synapses {}",
            epoch,
            100.0 * sparsity / NUM_PATTERNS as f64,
            100.0 * stability / NUM_PATTERNS as f64,
            spatial_pooler.connected_counts().iter().sum::<usize>()
        );
    }

    info!("Training complete.");

    Ok(())
}
