//! Competitive selection of the active columns.
//!
//! After boosting, every column has a score. Inhibition picks the winners among them, either
//! across the whole column space (`Global`) or inside each column's neighborhood within the
//! inhibition radius (`Local`). Both strategies:
//! - add each column's fixed tie breaker to its score, so exact ties resolve the same way on every run,
//! - never activate a column whose boosted overlap is zero,
//! - return the winners in ascending column order.

use super::topology::Topology;
use serde::{Deserialize, Serialize};

/// Which competition the columns take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inhibition {
    /// The top columns of the whole population win.
    Global,
    /// A column wins if it ranks among the top columns of its own neighborhood.
    Local,
}

impl Inhibition {
    /// Selects the active columns from boosted `overlaps`.
    ///
    /// `topology` and `radius` describe the column space and the inhibition radius; they are
    /// only consulted by local inhibition.
    pub fn select(
        self,
        overlaps: &[f32],
        tie_breakers: &[f32],
        density: f32,
        topology: &Topology,
        radius: usize,
    ) -> Vec<usize> {
        match self {
            Inhibition::Global => inhibit_global(overlaps, tie_breakers, density),
            Inhibition::Local => inhibit_local(overlaps, tie_breakers, density, topology, radius),
        }
    }
}

/// Target fraction of active columns.
///
/// A positive `local_area_density` is used as is. Otherwise the density is derived from
/// `num_active_per_inh_area` over one inhibition area, `(2 * radius + 1)^rank` columns capped
/// at the whole population, and clipped to at most 1.
pub fn density(
    local_area_density: f32,
    num_active_per_inh_area: f32,
    radius: usize,
    topology: &Topology,
) -> f32 {
    if local_area_density > 0.0 {
        return local_area_density;
    }

    let num_columns = topology.num_elements() as f64;
    let area = ((2 * radius + 1) as f64)
        .powi(topology.rank() as i32)
        .min(num_columns);

    ((num_active_per_inh_area as f64 / area) as f32).min(1.0)
}

/// Implements global inhibition, columns are sorted by tie-broken overlap, and the top fraction are selected:
/// - Sorts every column with a positive overlap by score descending.
/// - Keeps the first `round(density * num_columns)` of them.
///
/// Ensures only a sparse subset of columns with the highest overlaps become active, ignoring local topology.
pub fn inhibit_global(overlaps: &[f32], tie_breakers: &[f32], density: f32) -> Vec<usize> {
    let num_columns = overlaps.len();
    let num_active = ((density * num_columns as f32).round() as usize).min(num_columns);

    let score = |col: usize| overlaps[col] + tie_breakers[col];

    let mut candidates: Vec<usize> = (0..num_columns)
        .filter(|&col| overlaps[col] > 0.0)
        .collect();
    candidates.sort_unstable_by(|&a, &b| score(b).total_cmp(&score(a)).then(a.cmp(&b)));
    candidates.truncate(num_active);
    candidates.sort_unstable();

    candidates
}

/// Implements local inhibition in a single pass over the columns in ascending order:
/// - Each column is compared against its non-wrapping neighborhood within `radius`.
/// - It wins if fewer than `int(0.5 + density * (neighbors + 1))` neighbors score higher.
/// - A winner's score is raised by a small margin, so it keeps its slot in the neighborhoods of later columns.
pub fn inhibit_local(
    overlaps: &[f32],
    tie_breakers: &[f32],
    density: f32,
    topology: &Topology,
    radius: usize,
) -> Vec<usize> {
    let mut scores: Vec<f32> = overlaps
        .iter()
        .zip(tie_breakers)
        .map(|(&overlap, &tie_breaker)| overlap + tie_breaker)
        .collect();
    let add_to_winners = scores.iter().copied().fold(0.0, f32::max) / 1000.0;

    let mut active = Vec::new();

    for column in 0..overlaps.len() {
        if overlaps[column] <= 0.0 {
            continue;
        }

        let neighbors = topology.neighbors(column, radius, false);
        let num_active = (0.5 + density * (neighbors.len() + 1) as f32) as usize;
        let num_bigger = neighbors
            .iter()
            .filter(|&&neighbor| scores[neighbor] > scores[column])
            .count();

        if num_bigger < num_active {
            active.push(column);
            scores[column] += add_to_winners;
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inhibit_global() {
        let overlaps = [1.0, 2.0, 1.0, 4.0, 8.0, 3.0, 12.0, 5.0, 4.0, 1.0];
        let tie_breakers = [0.0; 10];

        assert_eq!(inhibit_global(&overlaps, &tie_breakers, 0.3), vec![4, 6, 7]);
        assert_eq!(
            inhibit_global(&overlaps, &tie_breakers, 0.5),
            vec![3, 4, 6, 7, 8]
        );
    }

    #[test]
    fn test_inhibit_global_breaks_ties_with_tie_breakers() {
        let overlaps = [3.0, 3.0, 3.0, 3.0];

        let active = inhibit_global(&overlaps, &[0.001, 0.004, 0.002, 0.003], 0.5);
        assert_eq!(active, vec![1, 3]);

        let active = inhibit_global(&overlaps, &[0.0; 4], 0.5);
        assert_eq!(active, vec![0, 1]);
    }

    #[test]
    fn test_inhibit_global_skips_zero_overlap() {
        let overlaps = [0.0, 0.0, 2.0, 0.0];
        let tie_breakers = [0.009, 0.008, 0.001, 0.007];

        assert_eq!(inhibit_global(&overlaps, &tie_breakers, 1.0), vec![2]);
        assert!(inhibit_global(&[0.0; 4], &tie_breakers, 1.0).is_empty());
    }

    #[test]
    fn test_inhibit_local() {
        let topology = Topology::new(&[10]);
        let overlaps = [1.0, 2.0, 7.0, 0.0, 3.0, 4.0, 16.0, 1.0, 1.5, 1.7];
        let tie_breakers = [0.0; 10];

        //  L  W  W  L  L  W  W   L   L    W
        let active = inhibit_local(&overlaps, &tie_breakers, 0.5, &topology, 2);
        assert_eq!(active, vec![1, 2, 5, 6, 9]);
    }

    #[test]
    fn test_inhibit_local_earlier_winner_takes_slot() {
        let topology = Topology::new(&[4]);
        let overlaps = [5.0, 5.0, 5.0, 5.0];
        let tie_breakers = [0.0; 4];

        // Each neighborhood allows a single winner; without the winner's margin every column would tie and win.
        let active = inhibit_local(&overlaps, &tie_breakers, 0.3, &topology, 1);
        assert_eq!(active, vec![0, 2]);
    }

    #[test]
    fn test_density_prefers_local_area_density() {
        let topology = Topology::new(&[100]);
        assert_eq!(density(0.05, 10.0, 3, &topology), 0.05);
    }

    #[test]
    fn test_density_from_active_columns_per_area() {
        let topology = Topology::new(&[100]);
        assert!((density(-1.0, 10.0, 12, &topology) - 0.4).abs() < 1e-6);
        // Inhibition area larger than the map is capped to the whole population.
        assert!((density(-1.0, 10.0, 100, &topology) - 0.1).abs() < 1e-6);
        // Never above 1.
        assert_eq!(density(-1.0, 10.0, 1, &topology), 1.0);

        let topology = Topology::new(&[20, 20]);
        assert!((density(-1.0, 10.0, 2, &topology) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_select_dispatches_on_strategy() {
        let topology = Topology::new(&[10]);
        let overlaps = [1.0, 2.0, 7.0, 0.0, 3.0, 4.0, 16.0, 1.0, 1.5, 1.7];
        let tie_breakers = [0.0; 10];

        assert_eq!(
            Inhibition::Global.select(&overlaps, &tie_breakers, 0.3, &topology, 2),
            vec![2, 5, 6]
        );
        assert_eq!(
            Inhibition::Local.select(&overlaps, &tie_breakers, 0.5, &topology, 2),
            vec![1, 2, 5, 6, 9]
        );
    }
}
