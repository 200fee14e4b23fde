//! Levi-Civita tensor construction and memoization.
//!
//! The generalized cross product contracts two vector batches against the
//! totally antisymmetric tensor for their dimension. Building the tensor
//! costs `O(d! * d)` time and `O(d^d)` space, so the result is memoized in a
//! single-slot cache: real pipelines fix one dimension (almost always 3) and
//! reuse the same tensor on every step.

use std::sync::{Arc, Mutex};

use crate::permutation::{parity, permutations};
use crate::strides::{cartesian_to_linear, compute_strides, linear_to_cartesian};

/// Largest dimension the generator accepts.
///
/// `d^d` storage grows fast (8^8 is already 16M entries); anything beyond
/// this is a caller bug, not a workload.
pub const MAX_DIM: usize = 8;

/// The totally antisymmetric (Levi-Civita) tensor for dimension `d`.
///
/// A `d`-dimensional hypercube of extent `d` per axis with entries in
/// `{-1, 0, 1}`: zero wherever an index repeats, otherwise the sign of the
/// permutation the index tuple spells out. Entries are stored as `i8` so one
/// cached tensor serves every scalar type. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeviCivitaTensor {
    dim: usize,
    strides: Vec<usize>,
    data: Vec<i8>,
}

impl LeviCivitaTensor {
    /// Build the tensor for `dim` from scratch.
    ///
    /// Zero-fills the `(dim,)^dim` hypercube, then walks all `dim!`
    /// permutations of `0..dim` and writes each permutation's parity at its
    /// own index tuple. Non-permutation tuples stay zero by construction.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero or exceeds [`MAX_DIM`].
    pub fn build(dim: usize) -> Self {
        assert!(
            dim >= 1 && dim <= MAX_DIM,
            "levi-civita dimension must be in 1..={MAX_DIM}, got {dim}"
        );

        let shape = vec![dim; dim];
        let strides = compute_strides(&shape);
        let mut data = vec![0i8; dim.pow(dim as u32)];
        for perm in permutations(dim) {
            data[cartesian_to_linear(&perm, &strides)] = parity(&perm);
        }

        Self { dim, strides, data }
    }

    /// Dimension `d`; the tensor has `d` axes of extent `d`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at a full cartesian index tuple.
    ///
    /// Returns `None` if the tuple has the wrong arity or an index is out of
    /// range.
    pub fn get(&self, indices: &[usize]) -> Option<i8> {
        if indices.len() != self.dim || indices.iter().any(|&i| i >= self.dim) {
            return None;
        }
        Some(self.data[cartesian_to_linear(indices, &self.strides)])
    }

    /// Flat entries in column-major order.
    #[inline]
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Iterate `(index_tuple, entry)` over all entries.
    pub fn entries(&self) -> impl Iterator<Item = (Vec<usize>, i8)> + '_ {
        let shape = vec![self.dim; self.dim];
        self.data
            .iter()
            .enumerate()
            .map(move |(linear, &value)| (linear_to_cartesian(linear, &shape), value))
    }
}

/// Single-slot memoization for Levi-Civita tensors.
///
/// Holds at most one `(dim, tensor)` pair. A request for the cached
/// dimension returns the stored `Arc` without rebuilding; a request for any
/// other dimension evicts the slot and rebuilds. Capacity one is the policy,
/// not an LRU: interleaving two dimensions thrashes, and callers who need
/// that pattern should hold one cache per dimension.
///
/// Replacement is guarded by a mutex; handed-out tensors are immutable
/// `Arc`s, so readers never observe a partially built tensor.
#[derive(Debug, Default)]
pub struct LeviCivitaCache {
    slot: Mutex<Option<(usize, Arc<LeviCivitaTensor>)>>,
}

impl LeviCivitaCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the tensor for `dim`, building it on a miss.
    ///
    /// # Panics
    ///
    /// Panics on the same inputs as [`LeviCivitaTensor::build`].
    pub fn get(&self, dim: usize) -> Arc<LeviCivitaTensor> {
        let mut slot = self.slot.lock().unwrap();
        if let Some((cached_dim, tensor)) = slot.as_ref() {
            if *cached_dim == dim {
                return Arc::clone(tensor);
            }
        }
        let tensor = Arc::new(LeviCivitaTensor::build(dim));
        *slot = Some((dim, Arc::clone(&tensor)));
        tensor
    }
}

static GLOBAL_CACHE: LeviCivitaCache = LeviCivitaCache::new();

/// Process-wide cached Levi-Civita tensor for `dim`.
///
/// Backed by a single [`LeviCivitaCache`] shared by all callers; see the
/// cache type for the eviction policy.
pub fn levi_civita_tensor(dim: usize) -> Arc<LeviCivitaTensor> {
    GLOBAL_CACHE.get(dim)
}
