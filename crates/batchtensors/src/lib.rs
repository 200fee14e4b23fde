//! batchtensors - batched linear-algebra kernels
//!
//! This crate provides the computational kernel layer for numeric pipelines
//! that process large collections ("batches") of small, fixed-dimension
//! vectors and matrices: batched matrix-vector product, batched
//! matrix-matrix product, and a generalized batched cross product built from
//! a cached antisymmetric (Levi-Civita) tensor.
//!
//! # Architecture
//!
//! ```text
//! Level 1: Kernel API (kernels module)
//!     -> batch_matvec, batch_matmul, batch_cross
//!
//! Level 2: Slot dispatch
//!     -> serial loop, or rayon across slots for large batches
//!
//! Level 3: Explicit contraction loops over the small dimension
//!     -> plus the memoized Levi-Civita tensor (levi_civita module)
//! ```
//!
//! Batches are caller-owned and read-only to the kernels; every kernel call
//! allocates a fresh output batch. The only shared mutable state is the
//! lock-guarded single-slot tensor cache.
//!
//! # Example
//!
//! ```
//! use batchtensors::{batch_cross, batch_matvec, MatrixBatch, VectorBatch};
//!
//! // Two slots of 3-vectors.
//! let u = VectorBatch::from_vec(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0], 3, 2).unwrap();
//! let v = VectorBatch::from_vec(vec![0.0, 1.0, 0.0, 0.0, 0.0, 1.0], 3, 2).unwrap();
//!
//! // Slot-wise cross products: e1 x e2 = e3, e2 x e3 = e1.
//! let w = batch_cross(&u, &v).unwrap();
//! assert_eq!(w.slot(0), &[0.0, 0.0, 1.0]);
//! assert_eq!(w.slot(1), &[1.0, 0.0, 0.0]);
//!
//! // Identity matrices leave the batch unchanged.
//! let id = MatrixBatch::identity(3, 2);
//! assert_eq!(batch_matvec(&id, &w).unwrap(), w);
//! ```

pub mod batch;
pub mod error;
pub mod kernels;
pub mod levi_civita;
pub mod permutation;
pub mod scalar;
pub mod strides;

pub use batch::{MatrixBatch, VectorBatch};
pub use error::BatchError;
pub use kernels::{batch_cross, batch_matmul, batch_matvec};
pub use levi_civita::{levi_civita_tensor, LeviCivitaCache, LeviCivitaTensor};
pub use scalar::Scalar;
