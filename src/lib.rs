//! Hierarchical Temporal Memory (HTM) Spatial Pooler.
//!
//! The Spatial Pooler turns a binary input vector into a sparse binary activation
//! pattern over a population of columns. Every column listens to a fixed, topologically
//! local subset of the input (its potential pool), and competes with the other columns
//! for activation. While learning, the winners reinforce the synapses that matched the
//! input, and homeostatic boosting keeps every column in use over time.
//!
//! ```rust
//! use htm_spatial_pooler::core::{config::SpatialPoolerConfig, spatial_pooler::SpatialPooler};
//!
//! let config = SpatialPoolerConfig {
//!     input_dimensions: vec![64],
//!     column_dimensions: vec![256],
//!     potential_radius: 64,
//!     ..Default::default()
//! };
//! let mut sp = SpatialPooler::new(config).unwrap();
//!
//! let mut input = vec![false; 64];
//! input[3..12].iter_mut().for_each(|bit| *bit = true);
//! let mut active = vec![false; 256];
//!
//! sp.compute(&input, true, &mut active).unwrap();
//! assert_eq!(sp.active_columns().len(), active.iter().filter(|&&a| a).count());
//! ```

pub mod core;
pub mod error;

pub use error::{Result, SpatialPoolerError};
