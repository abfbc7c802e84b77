pub mod column;
pub mod config;
pub mod duty_cycles;
pub mod inhibition;
pub mod spatial_pooler;
pub mod synapses;
pub mod topology;
