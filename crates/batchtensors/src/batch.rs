//! Batch container types.
//!
//! A batch packs `N` independent small vectors or matrices into one
//! contiguous allocation so the kernels can stream over them. Storage is
//! column-major with the slot axis last, which makes every slot a contiguous
//! range of the underlying buffer.

use crate::error::BatchError;
use crate::scalar::Scalar;

/// A batch of `N` independent `dim`-vectors, shape `(dim, N)`.
///
/// Element `[i, k]` is component `i` of the `k`-th vector and lives at
/// linear offset `i + dim * k`, so slot `k` is the contiguous range
/// `[k * dim, (k + 1) * dim)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorBatch<T: Scalar> {
    dim: usize,
    blocksize: usize,
    data: Vec<T>,
}

impl<T: Scalar> VectorBatch<T> {
    /// Create a zero-initialized batch.
    pub fn zeros(dim: usize, blocksize: usize) -> Self {
        Self {
            dim,
            blocksize,
            data: vec![T::zero(); dim * blocksize],
        }
    }

    /// Create a batch from existing data in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::LengthMismatch`] if `data.len() != dim * blocksize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use batchtensors::VectorBatch;
    ///
    /// // Two 3-vectors: [1,2,3] and [4,5,6].
    /// let v = VectorBatch::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    /// assert_eq!(v.get(2, 1), Some(&6.0));
    /// ```
    pub fn from_vec(data: Vec<T>, dim: usize, blocksize: usize) -> Result<Self, BatchError> {
        let expected = dim * blocksize;
        if data.len() != expected {
            return Err(BatchError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dim,
            blocksize,
            data,
        })
    }

    /// Vector dimension `d`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of independent vectors `N`.
    #[inline]
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    /// Shape as `[dim, blocksize]`, for diagnostics.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.dim, self.blocksize]
    }

    /// Component `i` of vector `k`.
    #[inline]
    pub fn get(&self, i: usize, k: usize) -> Option<&T> {
        if i >= self.dim || k >= self.blocksize {
            return None;
        }
        self.data.get(i + self.dim * k)
    }

    /// Mutable component `i` of vector `k`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, k: usize) -> Option<&mut T> {
        if i >= self.dim || k >= self.blocksize {
            return None;
        }
        let dim = self.dim;
        self.data.get_mut(i + dim * k)
    }

    /// Vector `k` as a contiguous slice of length `dim`.
    #[inline]
    pub fn slot(&self, k: usize) -> &[T] {
        &self.data[k * self.dim..(k + 1) * self.dim]
    }

    /// Underlying column-major data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable underlying column-major data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// A batch of `N` independent `dim x dim` matrices, shape `(dim, dim, N)`.
///
/// Element `[i, j, k]` is row `i`, column `j` of the `k`-th matrix and lives
/// at linear offset `i + dim * j + dim * dim * k`; slot `k` is a contiguous
/// `dim * dim` range.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBatch<T: Scalar> {
    dim: usize,
    blocksize: usize,
    data: Vec<T>,
}

impl<T: Scalar> MatrixBatch<T> {
    /// Create a zero-initialized batch.
    pub fn zeros(dim: usize, blocksize: usize) -> Self {
        Self {
            dim,
            blocksize,
            data: vec![T::zero(); dim * dim * blocksize],
        }
    }

    /// Create a batch from existing data in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::LengthMismatch`] if
    /// `data.len() != dim * dim * blocksize`.
    pub fn from_vec(data: Vec<T>, dim: usize, blocksize: usize) -> Result<Self, BatchError> {
        let expected = dim * dim * blocksize;
        if data.len() != expected {
            return Err(BatchError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dim,
            blocksize,
            data,
        })
    }

    /// Batch of identity matrices.
    pub fn identity(dim: usize, blocksize: usize) -> Self {
        let mut batch = Self::zeros(dim, blocksize);
        for k in 0..blocksize {
            for i in 0..dim {
                let offset = i + dim * i + dim * dim * k;
                batch.data[offset] = T::one();
            }
        }
        batch
    }

    /// Matrix dimension `d`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of independent matrices `N`.
    #[inline]
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    /// Shape as `[dim, dim, blocksize]`, for diagnostics.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.dim, self.dim, self.blocksize]
    }

    /// Entry at row `i`, column `j` of matrix `k`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        if i >= self.dim || j >= self.dim || k >= self.blocksize {
            return None;
        }
        self.data.get(i + self.dim * j + self.dim * self.dim * k)
    }

    /// Mutable entry at row `i`, column `j` of matrix `k`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Option<&mut T> {
        if i >= self.dim || j >= self.dim || k >= self.blocksize {
            return None;
        }
        let dim = self.dim;
        self.data.get_mut(i + dim * j + dim * dim * k)
    }

    /// Matrix `k` as a contiguous column-major slice of length `dim * dim`.
    #[inline]
    pub fn slot(&self, k: usize) -> &[T] {
        let size = self.dim * self.dim;
        &self.data[k * size..(k + 1) * size]
    }

    /// Underlying column-major data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable underlying column-major data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
