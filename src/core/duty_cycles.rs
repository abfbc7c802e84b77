//! Homeostatic bookkeeping for the Spatial Pooler.
//!
//! What are duty cycles?
//! - They are rolling metrics that measure how often each column is meeting certain criteria over time.
//! - The overlap duty cycle tracks how frequently a column has a non-zero overlap with the input.
//! - The active duty cycle tracks how frequently a column is chosen as a winner after inhibition.
//! - Comparing them against floors derived from the neighborhood tells the pooler which columns
//!   need their permanences bumped (overlap) or their overlaps boosted (activity).

/// Moving average of a per-column event.
///
/// `new = ((period - 1) * old + value) / period`. Callers pass `min(duty_cycle_period, iteration)`
/// as `period`, which makes the first `duty_cycle_period` iterations a plain running average
/// and decays older history geometrically afterwards.
pub fn update_duty_cycles_helper(duty_cycles: &mut [f32], new_values: &[f32], period: u32) {
    let period = period.max(1) as f32;

    duty_cycles
        .iter_mut()
        .zip(new_values)
        .for_each(|(duty, &value)| {
            *duty = (*duty * (period - 1.0) + value) / period;
        });
}

/// True on iterations at which floors, boost factors and the inhibition radius are recomputed.
#[inline]
pub fn is_update_round(iteration_num: u32, update_period: u32) -> bool {
    iteration_num % update_period.max(1) == 0
}

/// Boost factor of a single column.
///
/// Rises linearly from 1 to `max_boost` as the active duty cycle falls from its floor to zero,
/// and is exactly 1 at or above the floor. A zero floor leaves `current` unchanged.
#[inline]
pub fn boost_factor(current: f32, active_duty_cycle: f32, min_active_duty_cycle: f32, max_boost: f32) -> f32 {
    if min_active_duty_cycle <= 0.0 {
        return current;
    }

    let deficit = ((min_active_duty_cycle - active_duty_cycle) / min_active_duty_cycle).max(0.0);
    1.0 + (max_boost - 1.0) * deficit
}

/// The largest value in `values`, 0 for an empty slice.
#[inline]
pub fn max_duty_cycle(values: impl IntoIterator<Item = f32>) -> f32 {
    values.into_iter().fold(0.0, f32::max)
}
