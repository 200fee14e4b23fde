//! Batched contraction kernels.
//!
//! Every kernel has the same shape:
//!
//! ```text
//! Level 1: validate operand shapes, allocate the output batch
//! Level 2: split the output into disjoint per-slot chunks
//! Level 3: explicit nested loops over the small dimension (2-5)
//! ```
//!
//! Slots are independent and outputs write-disjoint, so level 2 may hand
//! chunks to rayon with no synchronization; below a slot-count threshold the
//! fork/join overhead dominates and the loop runs serially.

mod cross;
mod matmul;
mod matvec;

pub use cross::batch_cross;
pub use matmul::batch_matmul;
pub use matvec::batch_matvec;

use rayon::prelude::*;

use crate::scalar::Scalar;

/// Slot count at which kernels switch from the serial loop to rayon.
const PAR_MIN_SLOTS: usize = 4096;

/// Run `f` once per slot, handing it the slot index and that slot's output
/// chunk of length `slot_len`.
pub(crate) fn for_each_slot<T, F>(out: &mut [T], slot_len: usize, f: F)
where
    T: Scalar,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if slot_len == 0 || out.is_empty() {
        return;
    }
    if out.len() >= PAR_MIN_SLOTS * slot_len {
        out.par_chunks_mut(slot_len)
            .enumerate()
            .for_each(|(k, slot)| f(k, slot));
    } else {
        for (k, slot) in out.chunks_mut(slot_len).enumerate() {
            f(k, slot);
        }
    }
}
