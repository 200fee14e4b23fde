//! Permutation enumeration and parity.
//!
//! The Levi-Civita generator consumes both halves of this module: it walks
//! every permutation of `0..d` and stamps each one with its sign.

/// Sign of a permutation of `0..perm.len()`.
///
/// Returns `+1` for even permutations and `-1` for odd ones, computed from
/// the cycle decomposition: a cycle of length `m` contributes `m - 1`
/// transpositions.
///
/// The input must be a permutation of `0..perm.len()`; this is a caller
/// contract, not a checked error.
///
/// # Examples
///
/// ```
/// use batchtensors::permutation::parity;
///
/// assert_eq!(parity(&[0, 1, 2]), 1);
/// assert_eq!(parity(&[1, 0, 2]), -1);
/// assert_eq!(parity(&[1, 2, 0]), 1);
/// ```
pub fn parity(perm: &[usize]) -> i8 {
    debug_assert!(is_permutation(perm), "parity input must be a permutation");

    let mut visited = vec![false; perm.len()];
    let mut sign = 1i8;
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut cycle_len = 0;
        let mut j = start;
        while !visited[j] {
            visited[j] = true;
            j = perm[j];
            cycle_len += 1;
        }
        // Even-length cycle = odd number of transpositions.
        if cycle_len % 2 == 0 {
            sign = -sign;
        }
    }
    sign
}

/// All `d!` permutations of `0..d`, generated with Heap's algorithm.
///
/// Order is unspecified; callers only rely on every permutation appearing
/// exactly once.
pub fn permutations(d: usize) -> Vec<Vec<usize>> {
    let mut items: Vec<usize> = (0..d).collect();
    let mut out = Vec::with_capacity(factorial(d));
    generate(d.max(1), &mut items, &mut out);
    out
}

fn generate(k: usize, items: &mut [usize], out: &mut Vec<Vec<usize>>) {
    if k == 1 {
        out.push(items.to_vec());
        return;
    }
    for i in 0..k - 1 {
        generate(k - 1, items, out);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
    generate(k - 1, items, out);
}

fn factorial(d: usize) -> usize {
    (1..=d).product::<usize>().max(1)
}

fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &p in perm {
        if p >= perm.len() || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}
