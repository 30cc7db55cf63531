#[cfg(test)]
#[path = "../../tests/unit/routing/exchange_test.rs"]
mod exchange_test;

use super::DistanceMatrix;
use crate::utils::Float;

/// Minimum gain required to apply an edge exchange.
const IMPROVEMENT_THRESHOLD: Float = 1E-7;

/// Applies 2-opt edge exchanges to an open path with a fixed first stop until no improving
/// exchange exists or `max_passes` passes are done. Returns amount of passes performed.
///
/// Only strictly improving exchanges are applied, so the route distance never increases.
pub fn improve_with_two_opt(route: &mut [usize], matrix: &DistanceMatrix, max_passes: usize) -> usize {
    let size = route.len();
    if size < 4 {
        return 0;
    }

    let mut passes = 0;
    while passes < max_passes {
        passes += 1;

        let mut improved = false;
        for i in 0..(size - 2) {
            for j in (i + 2)..size {
                let (a, b, c) = (route[i], route[i + 1], route[j]);

                // NOTE the last stop has no successor: reversing a route tail only replaces one edge
                let delta = match route.get(j + 1) {
                    Some(&d) => {
                        matrix.distance(a, c) + matrix.distance(b, d) - matrix.distance(a, b) - matrix.distance(c, d)
                    }
                    None => matrix.distance(a, c) - matrix.distance(a, b),
                };

                if delta < -IMPROVEMENT_THRESHOLD {
                    route[(i + 1)..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    passes
}
