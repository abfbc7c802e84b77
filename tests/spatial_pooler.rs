//! End-to-end behavior of the Spatial Pooler through its public API.
//!
//! Run with: `cargo test --test spatial_pooler`

use htm_spatial_pooler::core::{
    config::SpatialPoolerConfig, spatial_pooler::SpatialPooler, synapses::PotentialPool,
    topology::Topology,
};
use htm_spatial_pooler::SpatialPoolerError;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// 188 inputs, 2048 columns, 40 active columns.
fn wide_config() -> SpatialPoolerConfig {
    SpatialPoolerConfig {
        input_dimensions: vec![188],
        column_dimensions: vec![2048],
        potential_radius: 94,
        potential_pct: 0.5,
        global_inhibition: true,
        local_area_density: -1.0,
        num_active_columns_per_inh_area: 40.0,
        stimulus_threshold: 0,
        syn_perm_inactive_dec: 0.01,
        syn_perm_active_inc: 0.1,
        syn_perm_connected: 0.1,
        min_pct_overlap_duty_cycles: 0.1,
        min_pct_active_duty_cycles: 0.1,
        duty_cycle_period: 10,
        max_boost: 10.0,
        seed: 1956,
        ..Default::default()
    }
}

fn random_inputs(count: usize, len: usize, seed: u64) -> Vec<Vec<bool>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..len).map(|_| rng.random::<bool>()).collect())
        .collect()
}

fn run(sp: &mut SpatialPooler, inputs: &[Vec<bool>], learn: bool) -> Vec<Vec<usize>> {
    let mut active = vec![false; sp.num_columns()];
    inputs
        .iter()
        .map(|input| {
            sp.compute(input, learn, &mut active).unwrap();
            sp.active_columns().to_vec()
        })
        .collect()
}

mod compute {
    use super::*;

    #[test]
    fn test_same_seed_same_output() {
        let inputs = random_inputs(30, 188, 11);

        let mut first = SpatialPooler::new(wide_config()).unwrap();
        let mut second = SpatialPooler::new(wide_config()).unwrap();

        assert_eq!(run(&mut first, &inputs, true), run(&mut second, &inputs, true));
        assert_eq!(first.boost_factors(), second.boost_factors());
        for col in (0..2048).step_by(97) {
            assert_eq!(first.permanences(col).unwrap(), second.permanences(col).unwrap());
        }
    }

    #[test]
    fn test_injected_rng_matches_seeded_constructor() {
        let config = wide_config();
        let mut rng = StdRng::seed_from_u64(config.seed);

        let seeded = SpatialPooler::new(config.clone()).unwrap();
        let injected = SpatialPooler::with_rng(config, &mut rng).unwrap();

        assert_eq!(seeded.tie_breakers(), injected.tie_breakers());
        assert_eq!(seeded.connected_counts(), injected.connected_counts());
    }

    #[test]
    fn test_different_seed_different_pools() {
        let first = SpatialPooler::new(wide_config()).unwrap();
        let second = SpatialPooler::new(SpatialPoolerConfig {
            seed: 7,
            ..wide_config()
        })
        .unwrap();

        let differs = (0..2048).any(|col| first.pool(col).unwrap() != second.pool(col).unwrap());
        assert!(differs);
    }

    #[test]
    fn test_global_inhibition_activates_target_count() {
        let mut sp = SpatialPooler::new(wide_config()).unwrap();
        assert_eq!(sp.inhibition_radius(), 2048);

        let inputs = random_inputs(20, 188, 3);
        for active in run(&mut sp, &inputs, true) {
            assert_eq!(active.len(), 40);
            assert!(active.windows(2).all(|pair| pair[0] < pair[1]));
        }
        for active in run(&mut sp, &inputs, false) {
            assert_eq!(active.len(), 40);
        }

        assert_eq!(sp.iteration_num(), 40);
        assert_eq!(sp.iteration_learn_num(), 20);
    }

    #[test]
    fn test_output_buffer_mirrors_active_columns() {
        let mut sp = SpatialPooler::new(wide_config()).unwrap();
        let input = &random_inputs(1, 188, 5)[0];
        let mut active = vec![true; 2048];

        sp.compute(input, false, &mut active).unwrap();

        let from_buffer: Vec<usize> = (0..2048).filter(|&col| active[col]).collect();
        assert_eq!(from_buffer, sp.active_columns());
    }

    #[test]
    fn test_short_input_is_zero_padded() {
        let mut padded = SpatialPooler::new(wide_config()).unwrap();
        let mut short = SpatialPooler::new(wide_config()).unwrap();

        let mut full = vec![false; 188];
        full[..100].iter_mut().step_by(3).for_each(|bit| *bit = true);
        let prefix = full[..100].to_vec();

        let mut a = vec![false; 2048];
        let mut b = vec![false; 2048];
        padded.compute(&full, true, &mut a).unwrap();
        short.compute(&prefix, true, &mut b).unwrap();

        assert_eq!(a, b);
        assert_eq!(padded.overlaps(), short.overlaps());
    }

    #[test]
    fn test_rejects_oversized_input() {
        let mut sp = SpatialPooler::new(wide_config()).unwrap();
        let mut active = vec![false; 2048];

        let err = sp.compute(&[true; 189], true, &mut active).unwrap_err();
        assert_eq!(
            err,
            SpatialPoolerError::InputTooLong {
                expected: 188,
                actual: 189
            }
        );
    }

    #[test]
    fn test_local_inhibition_run() {
        let mut sp = SpatialPooler::new(SpatialPoolerConfig {
            input_dimensions: vec![16, 16],
            column_dimensions: vec![16, 16],
            potential_radius: 3,
            global_inhibition: false,
            local_area_density: 0.1,
            ..Default::default()
        })
        .unwrap();
        assert!(sp.inhibition_radius() >= 1);

        let inputs = random_inputs(60, 256, 8);
        let outputs = run(&mut sp, &inputs, true);

        assert!(outputs.iter().any(|active| !active.is_empty()));
        assert!(outputs.iter().all(|active| active.len() < 256));
        // Update rounds keep the radius in range.
        assert!(sp.inhibition_radius() >= 1);
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let err = SpatialPooler::new(SpatialPoolerConfig {
            input_dimensions: vec![10, 10],
            column_dimensions: vec![100],
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, SpatialPoolerError::InvalidDimensions(_)));
    }

    #[test]
    fn test_serialized_config_rebuilds_identical_pooler() {
        let config = wide_config();
        let bytes = bincode::serialize(&config).unwrap();
        let restored: SpatialPoolerConfig = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored, config);

        let inputs = random_inputs(10, 188, 21);
        let mut original = SpatialPooler::new(config).unwrap();
        let mut rebuilt = SpatialPooler::new(restored).unwrap();

        assert_eq!(run(&mut original, &inputs, true), run(&mut rebuilt, &inputs, true));
    }
}

mod properties {
    use super::*;

    fn small_config(seed: u64, global: bool) -> SpatialPoolerConfig {
        SpatialPoolerConfig {
            input_dimensions: vec![40],
            column_dimensions: vec![60],
            potential_radius: 10,
            global_inhibition: global,
            local_area_density: 0.1,
            update_period: 5,
            seed,
            ..Default::default()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        #[test]
        fn prop_permanences_stay_in_unit_range(
            seed in 0u64..1000,
            global in any::<bool>(),
            inputs in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 40), 1..12)
        ) {
            let mut sp = SpatialPooler::new(small_config(seed, global)).unwrap();
            run(&mut sp, &inputs, true);

            for col in 0..sp.num_columns() {
                let pool = sp.pool(col).unwrap();
                prop_assert!(pool.permanences().iter().all(|&p| (0.0..=1.0).contains(&p)));
                // Nothing lingers between zero and the trim threshold.
                prop_assert!(pool
                    .permanences()
                    .iter()
                    .all(|&p| p == 0.0 || p > sp.config().syn_perm_trim_threshold));
            }
        }

        #[test]
        fn prop_global_active_count_never_exceeds_target(
            seed in 0u64..1000,
            inputs in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 40), 1..8)
        ) {
            let mut sp = SpatialPooler::new(small_config(seed, true)).unwrap();

            for active in run(&mut sp, &inputs, true) {
                prop_assert!(active.len() <= 6);
                prop_assert!(active.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(active.iter().all(|&col| sp.overlaps().len() > col));
            }
        }

        #[test]
        fn prop_pool_members_lie_within_potential_radius(seed in 0u64..1000) {
            let sp = SpatialPooler::new(SpatialPoolerConfig {
                wrap_around: false,
                ..small_config(seed, true)
            })
            .unwrap();

            for col in 0..sp.num_columns() {
                let center = sp.map_column(col).unwrap() as isize;
                let indices = sp.pool(col).unwrap().indices();
                prop_assert!(!indices.is_empty());
                prop_assert!(indices.iter().all(|&i| (i as isize - center).abs() <= 10));
            }
        }

        #[test]
        fn prop_neighbors_sorted_and_exclude_center(
            dims in proptest::collection::vec(1usize..7, 1..4),
            center_seed in any::<usize>(),
            radius in 0usize..4,
            wrapping in any::<bool>()
        ) {
            let topology = Topology::new(&dims);
            let center = center_seed % topology.num_elements();
            let neighbors = topology.neighbors(center, radius, wrapping);

            prop_assert!(neighbors.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(!neighbors.contains(&center));
            prop_assert!(neighbors.iter().all(|&n| n < topology.num_elements()));

            if !wrapping {
                let center_coords = topology.coordinates(center);
                for &n in &neighbors {
                    let within = topology
                        .coordinates(n)
                        .iter()
                        .zip(&center_coords)
                        .all(|(&a, &b)| a.abs_diff(b) <= radius);
                    prop_assert!(within);
                }
            }
        }

        #[test]
        fn prop_update_permanences_is_idempotent(
            permanences in proptest::collection::vec(-0.5f32..1.5, 1..30),
            raise in any::<bool>()
        ) {
            let options = SpatialPoolerConfig::default().permanence_options();
            let indices: Vec<usize> = (0..permanences.len()).collect();
            let mut pool = PotentialPool::new(&indices, &permanences, options.connected);

            pool.update_permanences(raise, 2, &options);
            let once = pool.clone();
            pool.update_permanences(false, 2, &options);

            prop_assert_eq!(pool.connected(), once.connected());
            prop_assert_eq!(pool.num_connected(), once.num_connected());
        }
    }
}
