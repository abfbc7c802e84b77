//! A `Column` in HTM represents one feature detector or receptive field in the Spatial Pooler.
//!
//! Biological inspiration:
//! Columns in HTM are inspired by cortical mini-columns found in the brain.
//! They consist of a group of neurons, which in HTM are modeled as "cells".
//!
//! Meaning in HTM:
//! Each column receives input from a fixed subset of the input space (its potential pool),
//! computes its overlap score with the current input, and competes with other columns
//! (globally or within the inhibition radius) to become one of the active columns.
//! Over many learning iterations, each column adjusts the permanences in its pool to become
//! selective for particular input patterns.

use super::synapses::PotentialPool;
use serde::{Deserialize, Serialize};

/// Represents a cortical column in the HTM model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// The flat index of the column in column space.
    pub index: usize,

    /// The inputs this column may connect to, with their permanences.
    pub pool: PotentialPool,
}

impl Column {
    /// Creates a new Column owning the given potential pool.
    pub fn new(index: usize, pool: PotentialPool) -> Self {
        Self { index, pool }
    }

    /// Raw overlap with `input`, squelched to zero when below `stimulus_threshold`.
    #[inline]
    pub fn overlap(&self, input: &[bool], stimulus_threshold: u32) -> u32 {
        let overlap = self.pool.overlap(input);
        if overlap < stimulus_threshold {
            0
        } else {
            overlap
        }
    }

    /// Overlap as a fraction of the column's connected synapses, 0 if nothing is connected.
    #[inline]
    pub fn overlap_pct(&self, overlap: u32) -> f32 {
        match self.pool.num_connected() {
            0 => 0.0,
            connected => overlap as f32 / connected as f32,
        }
    }
}
