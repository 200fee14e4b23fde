//! Batched matrix-vector product.

use crate::batch::{MatrixBatch, VectorBatch};
use crate::error::BatchError;
use crate::kernels::for_each_slot;
use crate::scalar::Scalar;

/// Batched matrix-vector product: `out[i,k] = sum_j m[i,j,k] * v[j,k]`.
///
/// Every slot `k` is an ordinary matrix-vector product, computed
/// independently into a freshly allocated output batch. Inputs are
/// read-only.
///
/// # Errors
///
/// Returns [`BatchError::ShapeMismatch`] when the operands disagree on
/// dimension or block size.
///
/// # Examples
///
/// ```
/// use batchtensors::{batch_matvec, MatrixBatch, VectorBatch};
///
/// // One slot: the 2x2 matrix [[1,3],[2,4]] applied to [1, 1].
/// let m = MatrixBatch::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 1).unwrap();
/// let v = VectorBatch::from_vec(vec![1.0, 1.0], 2, 1).unwrap();
///
/// let out = batch_matvec(&m, &v).unwrap();
/// assert_eq!(out.slot(0), &[4.0, 6.0]);
/// ```
pub fn batch_matvec<T: Scalar>(
    matrices: &MatrixBatch<T>,
    vectors: &VectorBatch<T>,
) -> Result<VectorBatch<T>, BatchError> {
    if matrices.dim() != vectors.dim() || matrices.blocksize() != vectors.blocksize() {
        return Err(BatchError::ShapeMismatch {
            expected: vec![matrices.dim(), matrices.blocksize()],
            actual: vectors.shape(),
        });
    }

    let dim = matrices.dim();
    let m = matrices.data();
    let v = vectors.data();

    let mut out = VectorBatch::zeros(dim, matrices.blocksize());
    for_each_slot(out.data_mut(), dim, |k, out_slot| {
        let mat = &m[k * dim * dim..(k + 1) * dim * dim];
        let rhs = &v[k * dim..(k + 1) * dim];
        for (i, out_i) in out_slot.iter_mut().enumerate() {
            let mut sum = T::zero();
            for j in 0..dim {
                sum = sum + mat[i + dim * j] * rhs[j];
            }
            *out_i = sum;
        }
    });

    Ok(out)
}
