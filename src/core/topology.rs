//! Topology represents an N-dimensional space through a list of dimensions and corresponding stride values.
//! The struct provides methods to convert between linear indices and coordinates in this N-dimensional space,
//! and also offers ways to visit the neighborhood of a center index within a Chebyshev radius.
//!
//! In the Spatial Pooler both the input space and the column space are N-dimensional.
//! Potential pools are drawn from an input neighborhood around each column's mapped center,
//! and local inhibition and local duty-cycle floors look at a column neighborhood within the
//! inhibition radius. Topology keeps the index arithmetic for all of them in one place.

use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// Represents the shape of an N-dimensional space, along with precomputed stride values for
/// linear index conversions. The `dims` field stores the size of each dimension, while `strides`
/// stores the cumulative product of dimension sizes to enable fast index calculations (row-major).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    dims: Vec<usize>,
    strides: Vec<usize>,
}

impl Topology {
    /// Creates a new `Topology` from a slice of dimension sizes.
    #[inline]
    pub fn new(dimensions: &[usize]) -> Self {
        let dims = dimensions.to_vec();
        let strides = Self::strides(&dims);

        Self { dims, strides }
    }

    /// Computes the stride values for each dimension in a given slice of dimension sizes.
    /// Strides are used to convert coordinates in N-dimensional space into a single linear index.
    #[inline]
    fn strides(dims: &[usize]) -> Vec<usize> {
        let mut strides = vec![1; dims.len()];

        for i in (0..dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * dims[i + 1];
        }

        strides
    }

    /// The size of each dimension.
    #[inline]
    pub fn dimensions(&self) -> &[usize] {
        &self.dims
    }

    /// The number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The total number of elements in the space.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    /// Converts a linear index into its corresponding set of coordinates in the topology's N-dimensional space.
    /// Each element of the returned `Vec<usize>` is the coordinate along one of the dimensions, in order.
    #[inline]
    pub fn coordinates(&self, index: usize) -> Vec<usize> {
        let mut remainder = index;

        self.strides
            .iter()
            .map(|&stride| {
                let coord = remainder / stride;
                remainder %= stride;
                coord
            })
            .collect()
    }

    /// Converts a set of coordinates in the topology's N-dimensional space to a single linear index.
    /// The length of `coords` must match the number of dimensions in the topology.
    #[inline]
    pub fn index_from_coordinates(&self, coords: &[usize]) -> usize {
        coords.iter().zip(&self.strides).map(|(&c, &s)| c * s).sum()
    }

    /// Returns an iterator over the neighborhood of indices within a given `radius` of the
    /// specified `center` index, the center included. If `wrapping` is true, the neighborhood
    /// wraps around edges of the topology dimensions; otherwise, it is clipped at boundaries.
    ///
    /// A wrapped window never covers more than the whole dimension, so no index is produced twice.
    #[inline]
    pub fn neighborhood(&self, center: usize, radius: usize, wrapping: bool) -> NeighborhoodIter {
        let center_coords = self.coordinates(center);
        let radius = radius as isize;

        let bounds: Vec<(isize, isize)> = center_coords
            .iter()
            .zip(&self.dims)
            .map(|(&c, &dim)| {
                let c = c as isize;
                let dim = dim as isize;

                if wrapping {
                    let width = min(2 * radius + 1, dim);
                    (c - radius, c - radius + width)
                } else {
                    (max(c - radius, 0), min(c + radius + 1, dim))
                }
            })
            .collect();

        let empty = bounds.iter().any(|&(low, high)| low >= high);
        let current = bounds.iter().map(|&(low, _)| low).collect();

        NeighborhoodIter {
            topology: self,
            bounds,
            current: if empty { None } else { Some(current) },
            wrapping,
        }
    }

    /// Returns every index within a Chebyshev `radius` of `center`, excluding the center itself,
    /// in ascending order and without duplicates.
    ///
    /// The ordering is part of the contract: inhibition and duty-cycle floors walk neighbors in
    /// this order, so it must not depend on how the window was enumerated.
    pub fn neighbors(&self, center: usize, radius: usize, wrapping: bool) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self
            .neighborhood(center, radius, wrapping)
            .filter(|&index| index != center)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}

/// An iterator that yields all valid indices within a neighborhood of a central index in the `Topology`.
/// The neighborhood is defined by a radius around the center, with optional wrapping behavior.
pub struct NeighborhoodIter<'a> {
    topology: &'a Topology,
    bounds: Vec<(isize, isize)>,
    current: Option<Vec<isize>>,
    wrapping: bool,
}

impl Iterator for NeighborhoodIter<'_> {
    type Item = usize;

    /// Returns the next index within the neighborhood. When all indices have been visited, it returns `None`.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;

        let coords: Vec<usize> = current
            .iter()
            .enumerate()
            .map(|(i, &val)| {
                let dim = self.topology.dims[i] as isize;

                if self.wrapping {
                    val.rem_euclid(dim) as usize
                } else {
                    val.clamp(0, dim - 1) as usize
                }
            })
            .collect();

        let result = self.topology.index_from_coordinates(&coords);

        for i in (0..current.len()).rev() {
            if current[i] + 1 < self.bounds[i].1 {
                current[i] += 1;

                current
                    .iter_mut()
                    .enumerate()
                    .skip(i + 1)
                    .for_each(|(j, item)| *item = self.bounds[j].0);

                return Some(result);
            }
        }

        self.current.take();

        Some(result)
    }

    /// Provides the lower and upper bounds for the remaining elements in the neighborhood iterator.
    /// Both bounds equal the full window size; the iterator is not advanced-aware.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() {
            return (0, Some(0));
        }

        let count = self
            .bounds
            .iter()
            .map(|&(low, high)| (high - low) as usize)
            .product();

        (count, Some(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_round_trip_row_major() {
        let topology = Topology::new(&[3, 4, 5]);

        assert_eq!(topology.coordinates(0), vec![0, 0, 0]);
        assert_eq!(topology.coordinates(7), vec![0, 1, 2]);
        assert_eq!(topology.coordinates(59), vec![2, 3, 4]);
        assert_eq!(topology.index_from_coordinates(&[1, 2, 3]), 20 + 10 + 3);
        assert_eq!(topology.num_elements(), 60);
    }

    #[test]
    fn test_neighborhood_includes_center() {
        let topology = Topology::new(&[1]);
        let all: Vec<usize> = topology.neighborhood(0, 10, true).collect();
        assert_eq!(all, vec![0]);

        let all: Vec<usize> = topology.neighborhood(0, 10, false).collect();
        assert_eq!(all, vec![0]);
    }

    #[test]
    fn test_neighborhood_wrapping_covers_dimension_once() {
        let topology = Topology::new(&[9]);
        let mut all: Vec<usize> = topology.neighborhood(4, 5, true).collect();
        assert_eq!(all.len(), 9);
        all.sort_unstable();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_neighbors_1d_no_wrap() {
        let topology = Topology::new(&[10]);
        assert_eq!(topology.neighbors(0, 2, false), vec![1, 2]);
        assert_eq!(topology.neighbors(5, 2, false), vec![3, 4, 6, 7]);
        assert_eq!(topology.neighbors(9, 3, false), vec![6, 7, 8]);
    }

    #[test]
    fn test_neighbors_1d_wrap() {
        let topology = Topology::new(&[10]);
        assert_eq!(topology.neighbors(0, 2, true), vec![1, 2, 8, 9]);
        assert_eq!(topology.neighbors(9, 1, true), vec![0, 8]);
    }

    #[test]
    fn test_neighbors_2d() {
        let topology = Topology::new(&[5, 5]);
        assert_eq!(
            topology.neighbors(12, 1, false),
            vec![6, 7, 8, 11, 13, 16, 17, 18]
        );
        assert_eq!(topology.neighbors(0, 1, false), vec![1, 5, 6]);
        assert_eq!(
            topology.neighbors(0, 1, true),
            vec![1, 4, 5, 6, 9, 20, 21, 24]
        );
    }

    #[test]
    fn test_neighbors_radius_larger_than_space() {
        let topology = Topology::new(&[3, 2]);
        assert_eq!(topology.neighbors(0, 7, true), vec![1, 2, 3, 4, 5]);
        assert_eq!(topology.neighbors(0, 7, false), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_neighbors_radius_zero() {
        let topology = Topology::new(&[4, 4]);
        assert!(topology.neighbors(5, 0, true).is_empty());
        assert!(topology.neighbors(5, 0, false).is_empty());
    }
}
