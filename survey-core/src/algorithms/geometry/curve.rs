//! Space-filling curve ordering used for deterministic spatial seeding.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/curve_test.rs"]
mod curve_test;

use super::Point;
use crate::utils::{Float, compare_floats};

const CURVE_ORDER: u32 = 16;

/// Returns the distance along a Hilbert curve of the given order for a cell (x, y).
/// Both `x` and `y` are expected to be less than `2^order`.
pub fn hilbert_index(order: u32, x: u32, y: u32) -> u64 {
    let side: u64 = 1 << order;
    let (mut x, mut y) = (x as u64, y as u64);
    let mut index = 0_u64;

    let mut step = side / 2;
    while step > 0 {
        let rx = u64::from((x & step) > 0);
        let ry = u64::from((y & step) > 0);
        index += step * step * ((3 * rx) ^ ry);

        if ry == 0 {
            if rx == 1 {
                x = side - 1 - x;
                y = side - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }

        step /= 2;
    }

    index
}

/// Returns point indices sorted by their position along a Hilbert curve laid over the points' bounding box.
/// Ties are resolved by the original index, so the result depends only on the input.
pub fn hilbert_order(points: &[Point]) -> Vec<usize> {
    let keys = hilbert_keys(points);
    let mut order = (0..points.len()).collect::<Vec<_>>();
    order.sort_by_key(|&idx| (keys[idx], idx));

    order
}

/// Returns a rank of each point along a Hilbert curve: `ranks[idx]` is a position of `points[idx]`.
pub fn hilbert_ranks(points: &[Point]) -> Vec<usize> {
    let mut ranks = vec![0; points.len()];
    hilbert_order(points).into_iter().enumerate().for_each(|(rank, idx)| ranks[idx] = rank);

    ranks
}

fn hilbert_keys(points: &[Point]) -> Vec<u64> {
    let bounds = |get: fn(&Point) -> Float| {
        let min = points.iter().map(get).min_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.);
        let max = points.iter().map(get).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.);
        (min, max)
    };

    let (min_x, max_x) = bounds(|p| p.x);
    let (min_y, max_y) = bounds(|p| p.y);
    let span = (max_x - min_x).max(max_y - min_y);
    let cells = ((1_u64 << CURVE_ORDER) - 1) as Float;

    let quantize = |value: Float, min: Float| {
        if span > 0. { (((value - min) / span) * cells).round().clamp(0., cells) as u32 } else { 0 }
    };

    points.iter().map(|p| hilbert_index(CURVE_ORDER, quantize(p.x, min_x), quantize(p.y, min_y))).collect()
}
