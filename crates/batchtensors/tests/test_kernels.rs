//! End-to-end tests for the batched kernels, covering:
//! - linearity of batch_matvec
//! - composability of batch_matmul with batch_matvec
//! - anticommutativity and orthogonality of batch_cross
//! - Levi-Civita cache behavior, including under concurrent access

use approx::assert_relative_eq;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use batchtensors::{
    batch_cross, batch_matmul, batch_matvec, levi_civita_tensor, BatchError, MatrixBatch,
    VectorBatch,
};

fn random_vectors(rng: &mut StdRng, dim: usize, blocksize: usize) -> VectorBatch<f64> {
    let data = (0..dim * blocksize)
        .map(|_| rng.sample::<f64, _>(StandardUniform) - 0.5)
        .collect();
    VectorBatch::from_vec(data, dim, blocksize).unwrap()
}

fn random_matrices(rng: &mut StdRng, dim: usize, blocksize: usize) -> MatrixBatch<f64> {
    let data = (0..dim * dim * blocksize)
        .map(|_| rng.sample::<f64, _>(StandardUniform) - 0.5)
        .collect();
    MatrixBatch::from_vec(data, dim, blocksize).unwrap()
}

/// Slot-wise a*x + b*y.
fn axpby(a: f64, x: &VectorBatch<f64>, b: f64, y: &VectorBatch<f64>) -> VectorBatch<f64> {
    let data = x
        .data()
        .iter()
        .zip(y.data())
        .map(|(&xi, &yi)| a * xi + b * yi)
        .collect();
    VectorBatch::from_vec(data, x.dim(), x.blocksize()).unwrap()
}

#[test]
fn test_matvec_linearity() {
    let mut rng = StdRng::seed_from_u64(7);
    let (dim, blocksize) = (3, 17);

    let m = random_matrices(&mut rng, dim, blocksize);
    let v1 = random_vectors(&mut rng, dim, blocksize);
    let v2 = random_vectors(&mut rng, dim, blocksize);
    let (a, b) = (2.5, -0.75);

    let lhs = batch_matvec(&m, &axpby(a, &v1, b, &v2)).unwrap();
    let rhs = axpby(
        a,
        &batch_matvec(&m, &v1).unwrap(),
        b,
        &batch_matvec(&m, &v2).unwrap(),
    );

    for (l, r) in lhs.data().iter().zip(rhs.data()) {
        assert_relative_eq!(*l, *r, epsilon = 1e-13);
    }
}

#[test]
fn test_matmul_matvec_composability() {
    // (A * B) v == A (B v), per slot, within floating-point tolerance.
    let mut rng = StdRng::seed_from_u64(11);
    for dim in 2..=4 {
        let blocksize = 23;
        let a = random_matrices(&mut rng, dim, blocksize);
        let b = random_matrices(&mut rng, dim, blocksize);
        let v = random_vectors(&mut rng, dim, blocksize);

        let fused = batch_matvec(&batch_matmul(&a, &b).unwrap(), &v).unwrap();
        let chained = batch_matvec(&a, &batch_matvec(&b, &v).unwrap()).unwrap();

        for (l, r) in fused.data().iter().zip(chained.data()) {
            assert_relative_eq!(*l, *r, epsilon = 1e-13);
        }
    }
}

#[test]
fn test_cross_anticommutativity() {
    let mut rng = StdRng::seed_from_u64(13);
    let u = random_vectors(&mut rng, 3, 31);
    let v = random_vectors(&mut rng, 3, 31);

    let uv = batch_cross(&u, &v).unwrap();
    let vu = batch_cross(&v, &u).unwrap();

    for (l, r) in uv.data().iter().zip(vu.data()) {
        assert_relative_eq!(*l, -*r, epsilon = 1e-15);
    }
}

#[test]
fn test_cross_orthogonality_d3() {
    let mut rng = StdRng::seed_from_u64(17);
    let (dim, blocksize) = (3, 29);
    let u = random_vectors(&mut rng, dim, blocksize);
    let v = random_vectors(&mut rng, dim, blocksize);

    let w = batch_cross(&u, &v).unwrap();
    for k in 0..blocksize {
        let dot_u: f64 = (0..dim).map(|i| w.slot(k)[i] * u.slot(k)[i]).sum();
        let dot_v: f64 = (0..dim).map(|i| w.slot(k)[i] * v.slot(k)[i]).sum();
        assert_relative_eq!(dot_u, 0.0, epsilon = 1e-14);
        assert_relative_eq!(dot_v, 0.0, epsilon = 1e-14);
    }
}

#[test]
fn test_cross_basis_scenario() {
    // d=3, N=1: [1,0,0] x [0,1,0] = [0,0,1].
    let u = VectorBatch::from_vec(vec![1.0, 0.0, 0.0], 3, 1).unwrap();
    let v = VectorBatch::from_vec(vec![0.0, 1.0, 0.0], 3, 1).unwrap();
    let w = batch_cross(&u, &v).unwrap();
    assert_eq!(w.slot(0), &[0.0, 0.0, 1.0]);
}

#[test]
fn test_matvec_shape_mismatch_scenario() {
    // matrices (3,3,5) with vectors (3,4) must fail with both shapes attached.
    let m: MatrixBatch<f64> = MatrixBatch::zeros(3, 5);
    let v: VectorBatch<f64> = VectorBatch::zeros(3, 4);
    let err = batch_matvec(&m, &v).unwrap_err();
    assert_eq!(
        err,
        BatchError::ShapeMismatch {
            expected: vec![3, 5],
            actual: vec![3, 4],
        }
    );
    assert_eq!(
        err.to_string(),
        "shape mismatch: expected shape [3, 5], got [3, 4]"
    );
}

#[test]
fn test_large_batch_matches_slotwise_formula() {
    // Large enough to take the parallel path; spot-check slots against the
    // scalar cross-product formula.
    let mut rng = StdRng::seed_from_u64(19);
    let blocksize = 5000;
    let u = random_vectors(&mut rng, 3, blocksize);
    let v = random_vectors(&mut rng, 3, blocksize);

    let w = batch_cross(&u, &v).unwrap();
    for &k in &[0, 1, 2047, blocksize - 1] {
        let (a, b) = (u.slot(k), v.slot(k));
        assert_relative_eq!(w.slot(k)[0], a[1] * b[2] - a[2] * b[1], epsilon = 1e-15);
        assert_relative_eq!(w.slot(k)[1], a[2] * b[0] - a[0] * b[2], epsilon = 1e-15);
        assert_relative_eq!(w.slot(k)[2], a[0] * b[1] - a[1] * b[0], epsilon = 1e-15);
    }
}

#[test]
fn test_tensor_cache_rebuild_is_exact() {
    // d1 -> d2 -> d1: the rebuilt tensor must be bit-identical to the first.
    let first = levi_civita_tensor(3);
    let evicted = levi_civita_tensor(4);
    assert_eq!(evicted.dim(), 4);

    let rebuilt = levi_civita_tensor(3);
    assert_eq!(rebuilt.dim(), 3);
    assert_eq!(first.data(), rebuilt.data());
}

#[test]
fn test_tensor_cache_concurrent_access() {
    // Threads hammering different dimensions race on the single slot; every
    // handed-out tensor must still be complete and correct for its dimension.
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                for round in 0..50 {
                    let dim = 2 + (t + round) % 3;
                    let eps = levi_civita_tensor(dim);
                    assert_eq!(eps.dim(), dim);
                    let identity: Vec<usize> = (0..dim).collect();
                    assert_eq!(eps.get(&identity), Some(1));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_f32_kernels() {
    // Kernels are generic over the scalar type; exercise the f32 path.
    let m = MatrixBatch::<f32>::identity(3, 2);
    let v = VectorBatch::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    assert_eq!(batch_matvec(&m, &v).unwrap(), v);

    let u = VectorBatch::from_vec(vec![1.0f32, 0.0, 0.0], 3, 1).unwrap();
    let w = VectorBatch::from_vec(vec![0.0f32, 1.0, 0.0], 3, 1).unwrap();
    assert_eq!(batch_cross(&u, &w).unwrap().slot(0), &[0.0, 0.0, 1.0]);
}
