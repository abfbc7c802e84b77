//! A `Synapse` models a single potential connection between a column and an input bit.
//!
//! If the permanence is at or above the connected threshold, the synapse is considered "connected".
//! During learning, permanence increases or decreases depending on whether the corresponding
//! input bit was active. A connected synapse counts toward the column's overlap score.
//!
//! Every column owns exactly one `PotentialPool`: the input indices it may ever connect to,
//! each paired with its permanence inside a single `Synapse` value, so the index list and the
//! permanence list can never drift apart. Pool membership is fixed when the pool is created;
//! afterwards only permanences change.
//!
//! The pool is the canonical sparse representation. A dense, `num_inputs`-long view can be
//! rebuilt at any time by scattering the permanences into a zero-filled vector. The pool also
//! caches the input indices of its connected synapses, which is what overlap computation
//! iterates; the cache is rebuilt after every permanence update.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A synapse connecting an input index with an associated permanence value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Synapse {
    /// Points to which input bit this synapse connects to.
    pub index: usize,

    /// Represents the strength of the connection between the synapse and the input bit.
    pub permanence: f32,
}

/// Options governing how synapse permanence is adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapsePermanenceOptions {
    pub inactive_decrement: f32,
    pub active_increment: f32,
    pub connected: f32,
    pub below_stimulus_increment: f32,
    pub min: f32,
    pub max: f32,
    pub trim_threshold: f32,
}

impl Default for SynapsePermanenceOptions {
    fn default() -> Self {
        Self {
            inactive_decrement: 0.008,
            active_increment: 0.05,
            connected: 0.10,
            below_stimulus_increment: 0.10 / 10.0,
            min: 0.0,
            max: 1.0,
            trim_threshold: 0.05 / 2.0,
        }
    }
}

impl SynapsePermanenceOptions {
    /// Draws a random permanence for a synapse that should start out connected,
    /// uniformly in `[connected, max]`, truncated to five decimal places.
    #[inline]
    pub fn init_connected<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let permanence = self.connected + (self.max - self.connected) * rng.random::<f32>();
        (permanence * 100_000.0).trunc() / 100_000.0
    }

    /// Draws a random permanence for a synapse that should start out unconnected,
    /// uniformly in `[0, connected)`, truncated to five decimal places.
    #[inline]
    pub fn init_non_connected<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let permanence = self.connected * rng.random::<f32>();
        (permanence * 100_000.0).trunc() / 100_000.0
    }
}

/// The fixed set of inputs one column may connect to, with one permanence per member.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialPool {
    /// Potential synapses ordered by input index.
    synapses: Vec<Synapse>,

    /// Input indices of the synapses whose permanence is at or above the connected threshold.
    connected: Vec<usize>,
}

impl PotentialPool {
    /// Builds a pool from input indices and matching permanences. Indices are sorted and the
    /// connected set is computed against `connected_threshold`; no clipping or trimming happens here.
    ///
    /// # Panics
    ///
    /// Panics if `indices` and `permanences` have different lengths.
    pub fn new(indices: &[usize], permanences: &[f32], connected_threshold: f32) -> Self {
        assert_eq!(
            indices.len(),
            permanences.len(),
            "every potential input needs exactly one permanence"
        );

        let mut synapses: Vec<Synapse> = indices
            .iter()
            .zip(permanences)
            .map(|(&index, &permanence)| Synapse { index, permanence })
            .collect();
        synapses.sort_unstable_by_key(|syn| syn.index);

        let mut pool = Self {
            synapses,
            connected: Vec::new(),
        };
        pool.update_connected(connected_threshold);
        pool
    }

    /// Initializes a pool for the given potential inputs with random permanences:
    /// - A `connected_pct` fraction of members draw a connected permanence, the rest an unconnected one.
    /// - Values below the trim threshold are zeroed.
    /// - If `raise` is set, permanences are then raised until `stimulus_threshold` synapses are connected.
    pub fn init<R: Rng + ?Sized>(
        potential: &[usize],
        connected_pct: f32,
        stimulus_threshold: u32,
        raise: bool,
        options: &SynapsePermanenceOptions,
        rng: &mut R,
    ) -> Self {
        let permanences: Vec<f32> = potential
            .iter()
            .map(|_| {
                let permanence = if rng.random::<f32>() < connected_pct {
                    options.init_connected(rng)
                } else {
                    options.init_non_connected(rng)
                };

                if permanence < options.trim_threshold {
                    0.0
                } else {
                    permanence
                }
            })
            .collect();

        let mut pool = Self::new(potential, &permanences, options.connected);
        pool.update_permanences(raise, stimulus_threshold, options);
        pool
    }

    /// The potential synapses, ordered by input index.
    #[inline]
    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    /// Number of potential synapses.
    #[inline]
    pub fn len(&self) -> usize {
        self.synapses.len()
    }

    /// True if the pool has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.synapses.is_empty()
    }

    /// Input indices of the pool members, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.synapses.iter().map(|syn| syn.index).collect()
    }

    /// Permanences of the pool members, in the same order as [`indices`](Self::indices).
    pub fn permanences(&self) -> Vec<f32> {
        self.synapses.iter().map(|syn| syn.permanence).collect()
    }

    /// Input indices of the connected synapses, ascending.
    #[inline]
    pub fn connected(&self) -> &[usize] {
        &self.connected
    }

    /// Number of connected synapses.
    #[inline]
    pub fn num_connected(&self) -> usize {
        self.connected.len()
    }

    /// Scatters the pool's permanences into a zero-filled vector of length `num_inputs`.
    pub fn dense_permanences(&self, num_inputs: usize) -> Vec<f32> {
        let mut dense = vec![0.0; num_inputs];
        for syn in &self.synapses {
            dense[syn.index] = syn.permanence;
        }
        dense
    }

    /// Replaces the permanences of the pool members, keeping membership. The connected set is
    /// refreshed against `connected_threshold`. Returns false and leaves the pool untouched if
    /// `permanences` does not have one value per member.
    pub fn set_permanences(&mut self, permanences: &[f32], connected_threshold: f32) -> bool {
        if permanences.len() != self.synapses.len() {
            return false;
        }

        for (syn, &permanence) in self.synapses.iter_mut().zip(permanences) {
            syn.permanence = permanence;
        }
        self.update_connected(connected_threshold);
        true
    }

    /// Counts how many connected synapses land on an active input bit. Bits past the end of
    /// `input` count as inactive.
    #[inline]
    pub fn overlap(&self, input: &[bool]) -> u32 {
        self.connected
            .iter()
            .filter(|&&index| input.get(index).copied().unwrap_or(false))
            .count() as u32
    }

    /// Hebbian update: increments the permanence of every member whose input bit is active and
    /// decrements the rest, then clips, trims and refreshes the connected set, raising the pool
    /// to the stimulus threshold if needed.
    pub fn adapt(&mut self, input: &[bool], stimulus_threshold: u32, options: &SynapsePermanenceOptions) {
        for syn in &mut self.synapses {
            if input.get(syn.index).copied().unwrap_or(false) {
                syn.permanence += options.active_increment;
            } else {
                syn.permanence -= options.inactive_decrement;
            }
        }
        self.update_permanences(true, stimulus_threshold, options);
    }

    /// Adds the below-stimulus increment once to every member regardless of input, then clips,
    /// trims and refreshes the connected set. The pool is not raised to the stimulus threshold.
    pub fn bump(&mut self, stimulus_threshold: u32, options: &SynapsePermanenceOptions) {
        for syn in &mut self.synapses {
            syn.permanence += options.below_stimulus_increment;
        }
        self.update_permanences(false, stimulus_threshold, options);
    }

    /// Normalizes the permanences of the pool after they were changed:
    /// - if `raise_permanences` is true, first raise values until `stimulus_threshold` synapses are connected,
    /// - then trim values at or below the trim threshold to exactly zero and clamp to [opts.min, opts.max],
    /// - finally rebuild the connected set.
    ///
    /// Calling it again with unchanged permanences yields the same connected set.
    pub fn update_permanences(
        &mut self,
        raise_permanences: bool,
        stimulus_threshold: u32,
        options: &SynapsePermanenceOptions,
    ) {
        if raise_permanences {
            self.raise_permanences_to_threshold(stimulus_threshold, options);
        }

        for syn in &mut self.synapses {
            if syn.permanence <= options.trim_threshold {
                syn.permanence = 0.0;
            } else {
                syn.permanence = syn.permanence.clamp(options.min, options.max);
            }
        }

        self.update_connected(options.connected);
    }

    /// Raises every permanence in the pool by the below-stimulus increment until at least
    /// `stimulus_threshold` synapses are connected. Values are clipped on every pass, and the
    /// loop stops as soon as a pass leaves every permanence unchanged.
    pub fn raise_permanences_to_threshold(
        &mut self,
        stimulus_threshold: u32,
        options: &SynapsePermanenceOptions,
    ) {
        if self.synapses.is_empty() {
            return;
        }

        for syn in &mut self.synapses {
            syn.permanence = syn.permanence.clamp(options.min, options.max);
        }

        loop {
            let num_connected = self
                .synapses
                .iter()
                .filter(|syn| syn.permanence >= options.connected)
                .count();

            if num_connected >= stimulus_threshold as usize {
                break;
            }
            if options.below_stimulus_increment <= 0.0 {
                break;
            }

            let mut changed = false;
            for syn in &mut self.synapses {
                let raised = (syn.permanence + options.below_stimulus_increment).min(options.max);
                changed |= raised != syn.permanence;
                syn.permanence = raised;
            }
            if !changed {
                break;
            }
        }
    }

    /// Rebuilds the connected set from the current permanences.
    #[inline]
    pub fn update_connected(&mut self, connected_threshold: f32) {
        self.connected.clear();
        self.connected.extend(
            self.synapses
                .iter()
                .filter(|syn| syn.permanence >= connected_threshold)
                .map(|syn| syn.index),
        );
    }
}
