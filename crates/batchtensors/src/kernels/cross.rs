//! Generalized batched cross product.

use crate::batch::VectorBatch;
use crate::error::BatchError;
use crate::kernels::for_each_slot;
use crate::levi_civita::{levi_civita_tensor, LeviCivitaTensor};
use crate::scalar::Scalar;

/// Generalized batched cross product:
/// `out[i,k] = sum_{j,l} eps[i,j,l] * u[j,k] * v[l,k]`.
///
/// `eps` is the cached Levi-Civita tensor for `d = u.dim()` (see
/// [`levi_civita_tensor`] for the caching behavior). For `d = 3` this is the
/// conventional cross product. For `d > 3` the rank-`d` tensor is collapsed
/// onto its first three indices by summing the trailing ones, which extends
/// the identical contraction pattern; only `d = 3` carries the usual
/// geometric meaning.
///
/// # Errors
///
/// Returns [`BatchError::ShapeMismatch`] when `u` and `v` disagree on
/// dimension or block size, or when `d < 3` (the contraction pins three
/// tensor indices, which a rank-2 tensor cannot supply).
///
/// # Examples
///
/// ```
/// use batchtensors::{batch_cross, VectorBatch};
///
/// let e1 = VectorBatch::from_vec(vec![1.0, 0.0, 0.0], 3, 1).unwrap();
/// let e2 = VectorBatch::from_vec(vec![0.0, 1.0, 0.0], 3, 1).unwrap();
///
/// let e3 = batch_cross(&e1, &e2).unwrap();
/// assert_eq!(e3.slot(0), &[0.0, 0.0, 1.0]);
/// ```
pub fn batch_cross<T: Scalar>(
    u: &VectorBatch<T>,
    v: &VectorBatch<T>,
) -> Result<VectorBatch<T>, BatchError> {
    if u.dim() != v.dim() || u.blocksize() != v.blocksize() {
        return Err(BatchError::ShapeMismatch {
            expected: u.shape(),
            actual: v.shape(),
        });
    }

    let dim = u.dim();
    if dim < 3 {
        return Err(BatchError::ShapeMismatch {
            expected: vec![3, u.blocksize()],
            actual: u.shape(),
        });
    }

    let eps = levi_civita_tensor(dim);
    let terms = cross_terms(&eps);
    let u_data = u.data();
    let v_data = v.data();

    let mut out = VectorBatch::zeros(dim, u.blocksize());
    for_each_slot(out.data_mut(), dim, |k, out_slot| {
        let a = &u_data[k * dim..(k + 1) * dim];
        let b = &v_data[k * dim..(k + 1) * dim];
        for &(i, j, l, sign) in &terms {
            let prod = a[j] * b[l];
            out_slot[i] = if sign > 0 {
                out_slot[i] + prod
            } else {
                out_slot[i] - prod
            };
        }
    });

    Ok(out)
}

/// Collapse the rank-`d` tensor onto its first three indices and collect the
/// nonzero entries as `(i, j, l, sign)` terms.
///
/// For `d = 3` this is the tensor itself (six terms). For `d > 3` each
/// collapsed entry sums the trailing indices; antisymmetry in any trailing
/// pair cancels the sum outright for `d >= 5`, so the result stays in
/// `{-1, 0, 1}`.
fn cross_terms(eps: &LeviCivitaTensor) -> Vec<(usize, usize, usize, i8)> {
    let dim = eps.dim();
    debug_assert!(dim >= 3);

    let mut collapsed = vec![0i32; dim * dim * dim];
    for (indices, value) in eps.entries() {
        if value != 0 {
            let offset = indices[0] + dim * indices[1] + dim * dim * indices[2];
            collapsed[offset] += i32::from(value);
        }
    }

    let mut terms = Vec::new();
    for l in 0..dim {
        for j in 0..dim {
            for i in 0..dim {
                let sum = collapsed[i + dim * j + dim * dim * l];
                if sum != 0 {
                    terms.push((i, j, l, sum as i8));
                }
            }
        }
    }
    terms
}
