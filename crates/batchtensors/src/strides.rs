//! Column-major stride helpers.
//!
//! Batches store the slot axis last, so column-major order keeps each slot
//! (one vector or one matrix) contiguous in memory.

/// Compute column-major strides for a shape.
///
/// For shape `[d0, d1, d2, ...]` the strides are `[1, d0, d0*d1, ...]`.
///
/// # Examples
///
/// ```
/// use batchtensors::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 3, 100]), vec![1, 3, 9]);
/// assert_eq!(compute_strides(&[3, 100]), vec![1, 3]);
/// assert_eq!(compute_strides(&[]), vec![]);
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut stride = 1;
    for &dim in shape {
        strides.push(stride);
        stride *= dim;
    }
    strides
}

/// Convert cartesian indices to a linear index using the given strides.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Convert a linear index back to cartesian indices for a shape.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(shape.len());
    for &dim in shape {
        indices.push(linear % dim);
        linear /= dim;
    }
    indices
}
