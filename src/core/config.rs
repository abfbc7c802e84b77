//! Configuration for the Spatial Pooler.
//!
//! `SpatialPoolerConfig` is a plain, serializable value: build it with struct-update syntax on
//! top of `Default`, or load it from any serde format, then hand it to `SpatialPooler::new`.
//! Everything is checked once by [`SpatialPoolerConfig::validate`]; a pooler that was built
//! successfully never re-validates its parameters.

use super::inhibition::Inhibition;
use super::synapses::SynapsePermanenceOptions;
use crate::error::{Result, SpatialPoolerError};
use serde::{Deserialize, Serialize};

/// Parameters for creating a Spatial Pooler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialPoolerConfig {
    /// Shape of the input space, e.g. `vec![32, 32]`.
    pub input_dimensions: Vec<usize>,

    /// Shape of the column space. Must have the same rank as `input_dimensions`.
    pub column_dimensions: Vec<usize>,

    /// Chebyshev radius (in input space) around a column's mapped center from which its potential pool is drawn.
    pub potential_radius: usize,

    /// Fraction of the inputs within `potential_radius` that end up in a column's potential pool.
    pub potential_pct: f32,

    /// If true, all columns compete globally. If false, columns compete within the inhibition radius.
    pub global_inhibition: bool,

    /// Target fraction of active columns inside an inhibition area. Values `<= 0` disable it in
    /// favor of `num_active_columns_per_inh_area`.
    pub local_area_density: f32,

    /// Target number of active columns inside an inhibition area. Only used when
    /// `local_area_density` is disabled.
    pub num_active_columns_per_inh_area: f32,

    /// Minimum raw overlap for a column to count at all; lower overlaps are squelched to zero.
    pub stimulus_threshold: u32,

    /// Amount by which permanences of synapses on inactive inputs decrease on a winning column.
    pub syn_perm_inactive_dec: f32,

    /// Amount by which permanences of synapses on active inputs increase on a winning column.
    pub syn_perm_active_inc: f32,

    /// Amount added to every permanence of a weak column, and per pass when raising a pool to the stimulus threshold.
    pub syn_perm_below_stimulus_inc: f32,

    /// Permanences at or below this value are snapped to zero.
    pub syn_perm_trim_threshold: f32,

    /// Permanence at or above which a synapse is connected.
    pub syn_perm_connected: f32,

    /// Fraction of the neighborhood's highest overlap duty cycle below which a column gets its permanences bumped.
    pub min_pct_overlap_duty_cycles: f32,

    /// Fraction of the neighborhood's highest active duty cycle below which a column gets boosted.
    pub min_pct_active_duty_cycles: f32,

    /// Window of the duty-cycle moving averages.
    pub duty_cycle_period: u32,

    /// Upper bound of the boost factor.
    pub max_boost: f32,

    /// Cadence (in iterations) of duty-cycle floors, boost factors and inhibition radius updates.
    pub update_period: u32,

    /// Fraction of each potential pool that starts out connected.
    pub init_connected_pct: f32,

    /// If true, potential pools and local duty-cycle neighborhoods wrap around the edges of their space.
    pub wrap_around: bool,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl Default for SpatialPoolerConfig {
    fn default() -> Self {
        Self {
            input_dimensions: vec![32, 32],
            column_dimensions: vec![64, 64],
            potential_radius: 16,
            potential_pct: 0.5,
            global_inhibition: true,
            local_area_density: -1.0,
            num_active_columns_per_inh_area: 10.0,
            stimulus_threshold: 0,
            syn_perm_inactive_dec: 0.008,
            syn_perm_active_inc: 0.05,
            syn_perm_below_stimulus_inc: 0.10 / 10.0,
            syn_perm_trim_threshold: 0.05 / 2.0,
            syn_perm_connected: 0.10,
            min_pct_overlap_duty_cycles: 0.001,
            min_pct_active_duty_cycles: 0.001,
            duty_cycle_period: 1000,
            max_boost: 10.0,
            update_period: 50,
            init_connected_pct: 0.5,
            wrap_around: true,
            seed: 42,
        }
    }
}

impl SpatialPoolerConfig {
    /// Total number of inputs.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.input_dimensions.iter().product()
    }

    /// Total number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.column_dimensions.iter().product()
    }

    /// The inhibition strategy selected by `global_inhibition`.
    #[inline]
    pub fn inhibition(&self) -> Inhibition {
        if self.global_inhibition {
            Inhibition::Global
        } else {
            Inhibition::Local
        }
    }

    /// The permanence constants bundled the way the potential pools consume them.
    pub fn permanence_options(&self) -> SynapsePermanenceOptions {
        SynapsePermanenceOptions {
            inactive_decrement: self.syn_perm_inactive_dec,
            active_increment: self.syn_perm_active_inc,
            connected: self.syn_perm_connected,
            below_stimulus_increment: self.syn_perm_below_stimulus_inc,
            min: 0.0,
            max: 1.0,
            trim_threshold: self.syn_perm_trim_threshold,
        }
    }

    /// Checks every parameter and the consistency between them.
    pub fn validate(&self) -> Result<()> {
        if self.input_dimensions.is_empty() || self.column_dimensions.is_empty() {
            return Err(SpatialPoolerError::InvalidDimensions(
                "input and column dimensions cannot be empty".to_string(),
            ));
        }
        if self.input_dimensions.contains(&0) || self.column_dimensions.contains(&0) {
            return Err(SpatialPoolerError::InvalidDimensions(format!(
                "every dimension must be non-zero (inputs {:?}, columns {:?})",
                self.input_dimensions, self.column_dimensions
            )));
        }
        if self.input_dimensions.len() != self.column_dimensions.len() {
            return Err(SpatialPoolerError::InvalidDimensions(format!(
                "input rank {} does not match column rank {}",
                self.input_dimensions.len(),
                self.column_dimensions.len()
            )));
        }

        if !(self.potential_pct > 0.0 && self.potential_pct <= 1.0) {
            return invalid("potential_pct", "must be in range (0, 1]");
        }
        if self.local_area_density > 1.0 {
            return invalid("local_area_density", "must be at most 1");
        }
        if self.local_area_density <= 0.0 && self.num_active_columns_per_inh_area <= 0.0 {
            return invalid(
                "num_active_columns_per_inh_area",
                "must be positive when local_area_density is disabled",
            );
        }

        let permanences = [
            ("syn_perm_inactive_dec", self.syn_perm_inactive_dec),
            ("syn_perm_active_inc", self.syn_perm_active_inc),
            ("syn_perm_below_stimulus_inc", self.syn_perm_below_stimulus_inc),
            ("syn_perm_trim_threshold", self.syn_perm_trim_threshold),
            ("syn_perm_connected", self.syn_perm_connected),
            ("min_pct_overlap_duty_cycles", self.min_pct_overlap_duty_cycles),
            ("min_pct_active_duty_cycles", self.min_pct_active_duty_cycles),
            ("init_connected_pct", self.init_connected_pct),
        ];
        for (name, value) in permanences {
            if !(0.0..=1.0).contains(&value) {
                return invalid(name, "must be in range [0, 1]");
            }
        }

        if self.duty_cycle_period == 0 {
            return invalid("duty_cycle_period", "must be positive");
        }
        if self.update_period == 0 {
            return invalid("update_period", "must be positive");
        }
        if !(self.max_boost >= 1.0) {
            return invalid("max_boost", "must be at least 1");
        }

        Ok(())
    }
}

fn invalid(name: &'static str, message: &str) -> Result<()> {
    Err(SpatialPoolerError::InvalidParameter {
        name,
        message: message.to_string(),
    })
}
