//! Batched matrix-matrix product.

use crate::batch::MatrixBatch;
use crate::error::BatchError;
use crate::kernels::for_each_slot;
use crate::scalar::Scalar;

/// Batched matrix-matrix product: `out[i,l,k] = sum_j a[i,j,k] * b[j,l,k]`.
///
/// Every slot `k` is an ordinary matrix product, computed independently into
/// a freshly allocated output batch. Inputs are read-only.
///
/// # Errors
///
/// Returns [`BatchError::ShapeMismatch`] when the operands disagree on
/// dimension or block size.
///
/// # Examples
///
/// ```
/// use batchtensors::{batch_matmul, MatrixBatch};
///
/// let a = MatrixBatch::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 1).unwrap();
/// let id = MatrixBatch::identity(2, 1);
///
/// let out = batch_matmul(&a, &id).unwrap();
/// assert_eq!(out, a);
/// ```
pub fn batch_matmul<T: Scalar>(
    a: &MatrixBatch<T>,
    b: &MatrixBatch<T>,
) -> Result<MatrixBatch<T>, BatchError> {
    if a.dim() != b.dim() || a.blocksize() != b.blocksize() {
        return Err(BatchError::ShapeMismatch {
            expected: a.shape(),
            actual: b.shape(),
        });
    }

    let dim = a.dim();
    let size = dim * dim;
    let a_data = a.data();
    let b_data = b.data();

    let mut out = MatrixBatch::zeros(dim, a.blocksize());
    for_each_slot(out.data_mut(), size, |k, out_slot| {
        let lhs = &a_data[k * size..(k + 1) * size];
        let rhs = &b_data[k * size..(k + 1) * size];
        for l in 0..dim {
            for i in 0..dim {
                let mut sum = T::zero();
                for j in 0..dim {
                    sum = sum + lhs[i + dim * j] * rhs[j + dim * l];
                }
                out_slot[i + dim * l] = sum;
            }
        }
    });

    Ok(out)
}
