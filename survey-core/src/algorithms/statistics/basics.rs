#[cfg(test)]
#[path = "../../../tests/unit/algorithms/statistics/basics_test.rs"]
mod basics_test;

use crate::utils::Float;

/// Returns arithmetic mean of values or zero when there are no values.
pub fn get_mean(values: &[Float]) -> Float {
    if values.is_empty() { 0. } else { values.iter().sum::<Float>() / values.len() as Float }
}

/// Returns population variance of values or zero when there are no values.
pub fn get_variance(values: &[Float]) -> Float {
    if values.is_empty() {
        return 0.;
    }

    let mean = get_mean(values);

    values.iter().map(|value| (value - mean) * (value - mean)).sum::<Float>() / values.len() as Float
}
