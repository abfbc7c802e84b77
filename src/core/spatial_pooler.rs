//! The `SpatialPooler` is a core component of HTM that:
//! - Initializes and maintains a set of columns, each with potential synapses into its own subset of the input space.
//! - Learns to increase/decrease synapse permanence (strength) values if the connected input bit was active/inactive.
//! - Computes an "overlap" score for each column based on how many connected synapses match the current input.
//! - Enforces sparse activity via inhibition, allowing only a subset of top columns to become "winner columns."
//!
//! Each column selectively "tunes" its connections to represent frequently encountered input patterns, leading to SDRs.
//!
//! One compute cycle runs: overlap, boost, inhibition, and when learning, synapse adaptation,
//! duty-cycle updates and weak-column bumping. Every `update_period` iterations a learning cycle
//! also recomputes the duty-cycle floors, the boost factors and the inhibition radius.
//!
//! Randomness is only consumed while building the pooler: first one tie breaker per column,
//! then, column by column, the potential pool sample and its initial permanences. The same
//! seed and the same input sequence therefore always give the same active columns.

use super::{
    column::Column,
    config::SpatialPoolerConfig,
    duty_cycles::{boost_factor, is_update_round, max_duty_cycle, update_duty_cycles_helper},
    inhibition::{self, Inhibition},
    synapses::{PotentialPool, SynapsePermanenceOptions},
    topology::Topology,
};
use crate::error::{Result, SpatialPoolerError};
use collect_slice::CollectSlice;
use log::{debug, trace};
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};

/// The SpatialPooler manages a set of columns that compete to represent the input space.
/// It computes overlaps, applies inhibition, boosts weak columns, and adapts synapses during learning.
#[derive(Debug, Clone)]
pub struct SpatialPooler {
    /// The parameters the pooler was built with.
    config: SpatialPoolerConfig,

    /// Settings for how synapse permanence is incremented/decremented and thresholds for trimming or connecting.
    synapse_permanence_options: SynapsePermanenceOptions,

    /// Global or local competition between the columns.
    inhibition: Inhibition,

    /// Neighborhood size (in column space) used for local inhibition and local duty-cycle floors.
    inhibition_radius: usize,

    /// The total number of compute iterations performed so far (whether learning or not).
    iteration_num: u32,

    /// The number of compute iterations performed so far with learning enabled.
    iteration_learn_num: u32,

    /// The total number of bits/inputs available.
    num_inputs: usize,

    /// The total number of columns in the Spatial Pooler.
    num_columns: usize,

    /// Maps 1D column indices to the nD column space.
    column_topology: Topology,

    /// Maps 1D input indices to the nD input space.
    input_topology: Topology,

    /// Every column with its potential pool.
    columns: Vec<Column>,

    /// Rolling average of how often each column has an overlap > 0.
    overlap_duty_cycles: Vec<f32>,

    /// Rolling average of how often each column is chosen as a winner.
    active_duty_cycles: Vec<f32>,

    /// Columns whose overlap duty cycle is below this floor get their permanences bumped.
    min_overlap_duty_cycles: Vec<f32>,

    /// Columns whose active duty cycle is below this floor get boosted.
    min_active_duty_cycles: Vec<f32>,

    /// A multiplier applied to a column's overlap while learning.
    boost_factors: Vec<f32>,

    /// Small fixed per-column noise added to scores before inhibition so ties resolve deterministically.
    tie_breakers: Vec<f32>,

    /// Raw (squelched) overlaps of the last compute cycle.
    overlaps: Vec<u32>,

    /// Overlaps of the last compute cycle after boosting.
    boosted_overlaps: Vec<f32>,

    /// The indices of columns that won the inhibition process in the last cycle, ascending.
    winner_columns: Vec<usize>,
}

impl SpatialPooler {
    /// Builds a pooler from `config`, seeding a `StdRng` with `config.seed`.
    pub fn new(config: SpatialPoolerConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Builds a pooler from `config`, drawing tie breakers, potential pools and initial
    /// permanences from `rng`. `config.seed` is ignored.
    pub fn with_rng<R: Rng + ?Sized>(config: SpatialPoolerConfig, rng: &mut R) -> Result<Self> {
        Self::build(config, rng, true)
    }

    /// Initializes the `SpatialPooler`:
    /// - Validates the configuration.
    /// - Draws the tie breakers.
    /// - Builds and configures the potential pool of every column.
    /// - Computes the initial inhibition radius.
    ///
    /// `raise_permanences` is only turned off to look at freshly drawn permanences in isolation.
    fn build<R: Rng + ?Sized>(
        config: SpatialPoolerConfig,
        rng: &mut R,
        raise_permanences: bool,
    ) -> Result<Self> {
        config.validate()?;

        let num_columns = config.num_columns();
        let num_inputs = config.num_inputs();

        let mut sp = Self {
            synapse_permanence_options: config.permanence_options(),
            inhibition: config.inhibition(),
            inhibition_radius: 0,
            iteration_num: 0,
            iteration_learn_num: 0,
            num_inputs,
            num_columns,
            column_topology: Topology::new(&config.column_dimensions),
            input_topology: Topology::new(&config.input_dimensions),
            columns: Vec::with_capacity(num_columns),
            overlap_duty_cycles: vec![0.0; num_columns],
            active_duty_cycles: vec![0.0; num_columns],
            min_overlap_duty_cycles: vec![0.0; num_columns],
            min_active_duty_cycles: vec![0.0; num_columns],
            boost_factors: vec![1.0; num_columns],
            tie_breakers: vec![0.0; num_columns],
            overlaps: vec![0; num_columns],
            boosted_overlaps: vec![0.0; num_columns],
            winner_columns: Vec::with_capacity(num_columns),
            config,
        };

        sp.tie_breakers = (0..num_columns)
            .map(|_| 0.01 * rng.random::<f32>())
            .collect();
        sp.connect_and_configure_inputs(rng, raise_permanences);
        sp.update_inhibition_radius();

        debug!(
            "spatial pooler ready: {} inputs {:?}, {} columns {:?}, {:?} inhibition, radius {}",
            sp.num_inputs,
            sp.config.input_dimensions,
            sp.num_columns,
            sp.config.column_dimensions,
            sp.inhibition,
            sp.inhibition_radius
        );

        Ok(sp)
    }

    /// Allocates and configures each column's synapses by sampling input bits within the potential radius:
    /// - Calls `map_potential()` for each column to select which input indices are in that column's potential pool.
    /// - Initializes each pool with random permanence values based on `init_connected_pct`.
    /// - Raises every pool until `stimulus_threshold` synapses are connected, unless told otherwise.
    fn connect_and_configure_inputs<R: Rng + ?Sized>(&mut self, rng: &mut R, raise_permanences: bool) {
        let columns: Vec<Column> = (0..self.num_columns)
            .map(|index| {
                let potential = self.sample_potential(index, rng);
                let pool = PotentialPool::init(
                    &potential,
                    self.config.init_connected_pct,
                    self.config.stimulus_threshold,
                    raise_permanences,
                    &self.synapse_permanence_options,
                    rng,
                );
                Column::new(index, pool)
            })
            .collect();

        if let Some(largest) = columns.iter().map(|col| col.pool.len()).max() {
            debug!("largest potential pool holds {} inputs", largest);
        }

        self.columns = columns;
    }

    /// Processes the current input vector and writes the active columns into `active`:
    /// - Updates iteration counters.
    /// - Calculates overlaps between columns and input subsets.
    /// - Applies boosting if learning is enabled.
    /// - Performs inhibition to pick winner columns.
    ///
    /// If learning is enabled:
    /// - Updates synapse permanence values of the winners.
    /// - Updates duty cycles and bumps up weak columns.
    /// - On update rounds, recomputes duty-cycle floors, boost factors and the inhibition radius.
    ///
    /// `input` may be shorter than the number of inputs (missing bits are inactive) but not longer.
    /// `active` must hold exactly one slot per column.
    pub fn compute(&mut self, input: &[bool], learn: bool, active: &mut [bool]) -> Result<()> {
        if input.len() > self.num_inputs {
            return Err(SpatialPoolerError::InputTooLong {
                expected: self.num_inputs,
                actual: input.len(),
            });
        }
        if active.len() != self.num_columns {
            return Err(SpatialPoolerError::OutputSizeMismatch {
                expected: self.num_columns,
                actual: active.len(),
            });
        }

        self.update_iteration_number(learn);
        self.calculate_overlaps(input);
        self.boost(learn);
        self.winner_columns = self.inhibit_columns(&self.boosted_overlaps);

        if learn {
            self.adapt_synapses(input);
            self.update_duty_cycles();
            self.bump_up_weak_columns();

            if self.is_update_round() {
                self.update_min_duty_cycles();
                self.update_boost_factors();
                self.update_inhibition_radius();

                debug!(
                    "update round at iteration {}: inhibition radius {}, highest floors {} / {}, max boost {}",
                    self.iteration_num,
                    self.inhibition_radius,
                    max_duty_cycle(self.min_overlap_duty_cycles.iter().copied()),
                    max_duty_cycle(self.min_active_duty_cycles.iter().copied()),
                    max_duty_cycle(self.boost_factors.iter().copied())
                );
            }
        }

        active.fill(false);
        for &col in &self.winner_columns {
            active[col] = true;
        }

        trace!(
            "iteration {}: {} active columns",
            self.iteration_num,
            self.winner_columns.len()
        );

        Ok(())
    }

    /// Increments the global iteration counters, including a separate counter if `learn` is true.
    #[inline]
    fn update_iteration_number(&mut self, learn: bool) {
        self.iteration_num += 1;
        if learn {
            self.iteration_learn_num += 1;
        }
    }

    /// Calculates the raw overlap for each column with `input` into the pooler's overlap buffer.
    #[inline]
    fn calculate_overlaps(&mut self, input: &[bool]) {
        let stimulus_threshold = self.config.stimulus_threshold;
        self.columns
            .iter()
            .map(|column| column.overlap(input, stimulus_threshold))
            .collect_slice_checked(&mut self.overlaps[..]);
    }

    /// Calculates the overlap of every column with `input`:
    /// - Counts how many connected synapses map to an active input bit.
    /// - Squelches overlaps below `stimulus_threshold` to zero.
    ///
    /// Overlap is the key metric determining a column's activation level before inhibition.
    pub fn calculate_overlap(&self, input: &[bool]) -> Vec<u32> {
        self.columns
            .iter()
            .map(|column| column.overlap(input, self.config.stimulus_threshold))
            .collect()
    }

    /// Divides each overlap by the column's number of connected synapses (0 for columns without any).
    /// `overlaps` must hold one value per column.
    pub fn calculate_overlap_pct(&self, overlaps: &[u32]) -> Result<Vec<f32>> {
        if overlaps.len() != self.num_columns {
            return Err(SpatialPoolerError::ColumnArrayMismatch {
                name: "overlaps",
                expected: self.num_columns,
                actual: overlaps.len(),
            });
        }

        Ok(self
            .columns
            .iter()
            .zip(overlaps)
            .map(|(column, &overlap)| column.overlap_pct(overlap))
            .collect())
    }

    /// Multiplies each column's overlap by its boost factor (if learning is on):
    /// - Scales overlap values before the inhibition step, so columns with higher boosts have a better chance to win.
    #[inline]
    fn boost(&mut self, learn: bool) {
        for ((boosted, &overlap), &boost) in self
            .boosted_overlaps
            .iter_mut()
            .zip(&self.overlaps)
            .zip(&self.boost_factors)
        {
            *boosted = if learn {
                overlap as f32 * boost
            } else {
                overlap as f32
            };
        }
    }

    /// The fraction of columns that should be active, from the sparsity settings and the current inhibition radius.
    #[inline]
    pub fn density(&self) -> f32 {
        inhibition::density(
            self.config.local_area_density,
            self.config.num_active_columns_per_inh_area,
            self.inhibition_radius,
            &self.column_topology,
        )
    }

    /// Selects the winning columns for the given (boosted) overlaps with the configured strategy.
    pub fn inhibit_columns(&self, overlaps: &[f32]) -> Vec<usize> {
        self.inhibition.select(
            overlaps,
            &self.tie_breakers,
            self.density(),
            &self.column_topology,
            self.inhibition_radius,
        )
    }

    /// Global inhibition over `overlaps` with this pooler's tie breakers.
    pub fn inhibit_columns_global(&self, overlaps: &[f32], density: f32) -> Vec<usize> {
        inhibition::inhibit_global(overlaps, &self.tie_breakers, density)
    }

    /// Local inhibition over `overlaps` with this pooler's tie breakers and inhibition radius.
    pub fn inhibit_columns_local(&self, overlaps: &[f32], density: f32) -> Vec<usize> {
        inhibition::inhibit_local(
            overlaps,
            &self.tie_breakers,
            density,
            &self.column_topology,
            self.inhibition_radius,
        )
    }

    /// Adjusts synapses for each winner column after an input is processed:
    /// - Increments permanence of synapses whose input bit was active.
    /// - Decrements permanence of synapses whose input bit was inactive.
    /// - Clips, trims, and refreshes the connected synapses of the column.
    ///
    /// Implements Hebbian-like learning that shapes columns towards frequently active inputs.
    fn adapt_synapses(&mut self, input: &[bool]) {
        for &col in &self.winner_columns {
            self.columns[col].pool.adapt(
                input,
                self.config.stimulus_threshold,
                &self.synapse_permanence_options,
            );
        }
    }

    /// Updates the rolling duty cycles for overlap and active states with a period of
    /// `min(duty_cycle_period, iteration_num)`.
    fn update_duty_cycles(&mut self) {
        let period = self.config.duty_cycle_period.min(self.iteration_num);

        let overlapped: Vec<f32> = self
            .overlaps
            .iter()
            .map(|&overlap| if overlap > 0 { 1.0 } else { 0.0 })
            .collect();

        let mut won = vec![0.0; self.num_columns];
        for &col in &self.winner_columns {
            won[col] = 1.0;
        }

        update_duty_cycles_helper(&mut self.overlap_duty_cycles, &overlapped, period);
        update_duty_cycles_helper(&mut self.active_duty_cycles, &won, period);
    }

    /// Increases permanence on "weak" columns that have low overlap duty cycles:
    /// - For each column whose overlap duty cycle is below its floor, bumps all its synapses' permanence.
    /// - Columns at or above their floor are left untouched.
    ///
    /// Prevents columns from perpetually remaining low-overlap, giving them a chance to learn and stay relevant.
    fn bump_up_weak_columns(&mut self) {
        for (col, column) in self.columns.iter_mut().enumerate() {
            if self.overlap_duty_cycles[col] < self.min_overlap_duty_cycles[col] {
                column
                    .pool
                    .bump(self.config.stimulus_threshold, &self.synapse_permanence_options);
            }
        }
    }

    /// Recalculates each column's boost factor from its active duty cycle and floor.
    fn update_boost_factors(&mut self) {
        let max_boost = self.config.max_boost;

        for ((boost, &active), &min_active) in self
            .boost_factors
            .iter_mut()
            .zip(&self.active_duty_cycles)
            .zip(&self.min_active_duty_cycles)
        {
            *boost = boost_factor(*boost, active, min_active, max_boost);
        }
    }

    /// Updates the duty-cycle floors, over the whole population or per neighborhood depending on the inhibition strategy.
    fn update_min_duty_cycles(&mut self) {
        match self.inhibition {
            Inhibition::Global => self.update_min_duty_cycles_global(),
            Inhibition::Local => self.update_min_duty_cycles_local(),
        }
    }

    /// Sets every column's floors to a fraction of the population's highest duty cycles.
    fn update_min_duty_cycles_global(&mut self) {
        let min_overlap = self.config.min_pct_overlap_duty_cycles
            * max_duty_cycle(self.overlap_duty_cycles.iter().copied());
        let min_active = self.config.min_pct_active_duty_cycles
            * max_duty_cycle(self.active_duty_cycles.iter().copied());

        self.min_overlap_duty_cycles.fill(min_overlap);
        self.min_active_duty_cycles.fill(min_active);
    }

    /// Sets each column's floors to a fraction of the highest duty cycles among its neighbors
    /// within the inhibition radius.
    fn update_min_duty_cycles_local(&mut self) {
        for column in 0..self.num_columns {
            let neighbors =
                self.column_topology
                    .neighbors(column, self.inhibition_radius, self.config.wrap_around);

            let max_overlap =
                max_duty_cycle(neighbors.iter().map(|&n| self.overlap_duty_cycles[n]));
            let max_active = max_duty_cycle(neighbors.iter().map(|&n| self.active_duty_cycles[n]));

            self.min_overlap_duty_cycles[column] =
                self.config.min_pct_overlap_duty_cycles * max_overlap;
            self.min_active_duty_cycles[column] =
                self.config.min_pct_active_duty_cycles * max_active;
        }
    }

    /// Recomputes the inhibition radius:
    /// - Global inhibition: the largest column dimension, so one neighborhood covers the whole map.
    /// - Local inhibition: half the average receptive field diameter in column space, at least 1.
    fn update_inhibition_radius(&mut self) {
        if self.inhibition == Inhibition::Global {
            self.inhibition_radius = self
                .config
                .column_dimensions
                .iter()
                .copied()
                .max()
                .unwrap_or(1);
            return;
        }

        let avg_connected_span = self
            .columns
            .iter()
            .map(|column| self.connected_span(&column.pool))
            .sum::<f32>()
            / self.num_columns as f32;
        let diameter = avg_connected_span * self.avg_columns_per_input();
        let radius = ((diameter - 1.0) / 2.0).max(1.0);

        self.inhibition_radius = (radius + 0.5) as usize;
    }

    /// Average extent, over all input dimensions, of a column's connected synapses.
    /// The extent along one dimension is `max - min + 1` of the connected coordinates;
    /// a column without connected synapses has span 0.
    pub fn avg_connected_span_for_column(&self, column: usize) -> Result<f32> {
        Ok(self.connected_span(&self.column(column)?.pool))
    }

    fn connected_span(&self, pool: &PotentialPool) -> f32 {
        let connected = pool.connected();
        if connected.is_empty() {
            return 0.0;
        }

        let rank = self.input_topology.rank();
        let mut min_coords = vec![usize::MAX; rank];
        let mut max_coords = vec![0; rank];

        for &index in connected {
            for (dim, coord) in self.input_topology.coordinates(index).into_iter().enumerate() {
                min_coords[dim] = min_coords[dim].min(coord);
                max_coords[dim] = max_coords[dim].max(coord);
            }
        }

        min_coords
            .iter()
            .zip(&max_coords)
            .map(|(&low, &high)| (high - low + 1) as f32)
            .sum::<f32>()
            / rank as f32
    }

    /// Mean ratio of column dimension size to input dimension size.
    pub fn avg_columns_per_input(&self) -> f32 {
        let ratios: Vec<f32> = self
            .config
            .column_dimensions
            .iter()
            .zip(&self.config.input_dimensions)
            .map(|(&col_dim, &in_dim)| col_dim as f32 / in_dim as f32)
            .collect();

        ratios.iter().sum::<f32>() / ratios.len().max(1) as f32
    }

    /// True if the current iteration recomputes floors, boost factors and the inhibition radius.
    #[inline]
    pub fn is_update_round(&self) -> bool {
        is_update_round(self.iteration_num, self.config.update_period)
    }

    /// Samples which input bits fall within a column's potential radius, optionally wrapping around:
    /// - Determines the center input index for the column via `map_column()`.
    /// - Gathers all input indices within the potential radius from that center.
    /// - Randomly selects a `potential_pct` fraction of them, without replacement.
    ///
    /// The result is sorted ascending.
    pub fn map_potential<R: Rng + ?Sized>(&self, column: usize, rng: &mut R) -> Result<Vec<usize>> {
        self.column(column)?;
        Ok(self.sample_potential(column, rng))
    }

    fn sample_potential<R: Rng + ?Sized>(&self, column: usize, rng: &mut R) -> Vec<usize> {
        let center = self.center_of(column);
        let elements_around_center = self.input_topology.neighborhood(
            center,
            self.config.potential_radius,
            self.config.wrap_around,
        );
        let size = self.potential_synapses(elements_around_center.size_hint().0);

        let mut sample = elements_around_center.choose_multiple(rng, size);
        sample.sort_unstable();
        sample
    }

    /// Calculates how many potential synapses a column should have, given the potential radius neighborhood size.
    #[inline]
    fn potential_synapses(&self, input_size: usize) -> usize {
        ((input_size as f64 * self.config.potential_pct as f64) + 0.5) as usize
    }

    /// Maps a column index to the "center" input index in the input space:
    /// - Proportionally maps the column's coordinates to the input grid coordinates.
    /// - Offset by half a cell for better distribution.
    /// - Clamps the result to the valid input range.
    pub fn map_column(&self, column: usize) -> Result<usize> {
        if column >= self.num_columns {
            return Err(SpatialPoolerError::ColumnOutOfBounds {
                column,
                num_columns: self.num_columns,
            });
        }
        Ok(self.center_of(column))
    }

    fn center_of(&self, column: usize) -> usize {
        let coords: Vec<usize> = self
            .column_topology
            .coordinates(column)
            .into_iter()
            .zip(self.column_topology.dimensions())
            .zip(self.input_topology.dimensions())
            .map(|((index, &col_dim), &in_dim)| {
                let new_index = ((index as f64 + 0.5) * in_dim as f64 / col_dim as f64) as usize;
                new_index.min(in_dim - 1)
            })
            .collect();
        self.input_topology.index_from_coordinates(&coords)
    }

    fn column(&self, column: usize) -> Result<&Column> {
        self.columns
            .get(column)
            .ok_or(SpatialPoolerError::ColumnOutOfBounds {
                column,
                num_columns: self.num_columns,
            })
    }

    fn check_column_array(&self, name: &'static str, values: &[f32]) -> Result<()> {
        if values.len() != self.num_columns {
            return Err(SpatialPoolerError::ColumnArrayMismatch {
                name,
                expected: self.num_columns,
                actual: values.len(),
            });
        }
        Ok(())
    }

    // Getters

    /// The parameters the pooler was built with.
    pub fn config(&self) -> &SpatialPoolerConfig {
        &self.config
    }

    /// The permanence constants in use.
    pub fn permanence_options(&self) -> &SynapsePermanenceOptions {
        &self.synapse_permanence_options
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn input_topology(&self) -> &Topology {
        &self.input_topology
    }

    pub fn column_topology(&self) -> &Topology {
        &self.column_topology
    }

    pub fn inhibition(&self) -> Inhibition {
        self.inhibition
    }

    pub fn inhibition_radius(&self) -> usize {
        self.inhibition_radius
    }

    pub fn iteration_num(&self) -> u32 {
        self.iteration_num
    }

    pub fn iteration_learn_num(&self) -> u32 {
        self.iteration_learn_num
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The potential pool of `column`.
    pub fn pool(&self, column: usize) -> Result<&PotentialPool> {
        Ok(&self.column(column)?.pool)
    }

    /// Dense permanences of `column`: one value per input, zero outside the potential pool.
    pub fn permanences(&self, column: usize) -> Result<Vec<f32>> {
        Ok(self.column(column)?.pool.dense_permanences(self.num_inputs))
    }

    /// Number of connected synapses of every column.
    pub fn connected_counts(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|column| column.pool.num_connected())
            .collect()
    }

    pub fn overlap_duty_cycles(&self) -> &[f32] {
        &self.overlap_duty_cycles
    }

    pub fn active_duty_cycles(&self) -> &[f32] {
        &self.active_duty_cycles
    }

    pub fn min_overlap_duty_cycles(&self) -> &[f32] {
        &self.min_overlap_duty_cycles
    }

    pub fn min_active_duty_cycles(&self) -> &[f32] {
        &self.min_active_duty_cycles
    }

    pub fn boost_factors(&self) -> &[f32] {
        &self.boost_factors
    }

    pub fn tie_breakers(&self) -> &[f32] {
        &self.tie_breakers
    }

    /// Raw overlaps from the last compute cycle.
    pub fn overlaps(&self) -> &[u32] {
        &self.overlaps
    }

    /// Boosted overlaps from the last compute cycle.
    pub fn boosted_overlaps(&self) -> &[f32] {
        &self.boosted_overlaps
    }

    /// Active columns from the last compute cycle, ascending.
    pub fn active_columns(&self) -> &[usize] {
        &self.winner_columns
    }

    // Setters

    /// Replaces the permanences of `column`'s pool members, one value per member in ascending
    /// input order. Values are trimmed, clipped and the connected synapses refreshed, without
    /// raising the pool to the stimulus threshold.
    pub fn set_permanences(&mut self, column: usize, permanences: &[f32]) -> Result<()> {
        let expected = self.column(column)?.pool.len();
        let options = &self.synapse_permanence_options;
        let pool = &mut self.columns[column].pool;

        if !pool.set_permanences(permanences, options.connected) {
            return Err(SpatialPoolerError::PoolSizeMismatch {
                column,
                expected,
                actual: permanences.len(),
            });
        }
        pool.update_permanences(false, self.config.stimulus_threshold, options);

        Ok(())
    }

    pub fn set_inhibition(&mut self, inhibition: Inhibition) {
        self.inhibition = inhibition;
    }

    pub fn set_inhibition_radius(&mut self, radius: usize) {
        self.inhibition_radius = radius;
    }

    pub fn set_iteration_num(&mut self, iteration_num: u32) {
        self.iteration_num = iteration_num;
    }

    pub fn set_overlap_duty_cycles(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("overlap_duty_cycles", values)?;
        self.overlap_duty_cycles.copy_from_slice(values);
        Ok(())
    }

    pub fn set_active_duty_cycles(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("active_duty_cycles", values)?;
        self.active_duty_cycles.copy_from_slice(values);
        Ok(())
    }

    pub fn set_min_overlap_duty_cycles(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("min_overlap_duty_cycles", values)?;
        self.min_overlap_duty_cycles.copy_from_slice(values);
        Ok(())
    }

    pub fn set_min_active_duty_cycles(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("min_active_duty_cycles", values)?;
        self.min_active_duty_cycles.copy_from_slice(values);
        Ok(())
    }

    pub fn set_boost_factors(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("boost_factors", values)?;
        self.boost_factors.copy_from_slice(values);
        Ok(())
    }

    pub fn set_tie_breakers(&mut self, values: &[f32]) -> Result<()> {
        self.check_column_array("tie_breakers", values)?;
        self.tie_breakers.copy_from_slice(values);
        Ok(())
    }
}
