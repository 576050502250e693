// Reliability recursion over the polarization tree.
//
// The tree of depth `order` is never materialized: each call owns a window
// of leaves, applies one polarization step, and hands the first half of the
// window to the minus channel and the second half to the plus channel. The
// halves are disjoint `&mut` sub-slices, so with the `parallel` feature the
// two subtrees are filled concurrently with `rayon::join`.

use crate::probability::ErasureProbability;
use crate::sequence::MAX_ORDER;

/// Smallest window split across rayon tasks. Below this the fork overhead
/// outweighs the arithmetic even at 2048 bits.
#[cfg(feature = "parallel")]
pub const PARALLEL_MIN_SPAN: usize = 64;

/// Erasure probability of every leaf of a tree of depth `order`, starting
/// from the channel probability `pe`.
///
/// Leaf `i` is reached by taking the minus branch at depth `d` when bit
/// `order - 1 - d` of `i` is clear and the plus branch when it is set.
///
/// # Panics
///
/// If `order` exceeds [`MAX_ORDER`].
pub fn leaf_probabilities<P: ErasureProbability>(pe: P, order: u32) -> Vec<P> {
    #[cfg(feature = "parallel")]
    let min_parallel_span = PARALLEL_MIN_SPAN;
    #[cfg(not(feature = "parallel"))]
    let min_parallel_span = usize::MAX;

    leaf_probabilities_with(pe, order, min_parallel_span)
}

pub(crate) fn leaf_probabilities_with<P: ErasureProbability>(
    pe: P,
    order: u32,
    min_parallel_span: usize,
) -> Vec<P> {
    assert!(order <= MAX_ORDER, "order {order} exceeds {MAX_ORDER}");
    let mut leaves = vec![pe; 1usize << order];
    fill(pe, &mut leaves, min_parallel_span);
    leaves
}

fn fill<P: ErasureProbability>(pe: P, leaves: &mut [P], min_parallel_span: usize) {
    if let [leaf] = leaves {
        *leaf = pe;
        return;
    }
    let span = leaves.len() / 2;
    let (minus, plus) = pe.polarize();
    let (first, second) = leaves.split_at_mut(span);
    fork(
        span >= min_parallel_span,
        || fill(minus, first, min_parallel_span),
        || fill(plus, second, min_parallel_span),
    );
}

#[cfg(feature = "parallel")]
fn fork<A, B>(concurrent: bool, a: A, b: B)
where
    A: FnOnce() + Send,
    B: FnOnce() + Send,
{
    if concurrent {
        rayon::join(a, b);
    } else {
        a();
        b();
    }
}

#[cfg(not(feature = "parallel"))]
fn fork<A: FnOnce(), B: FnOnce()>(_concurrent: bool, a: A, b: B) {
    a();
    b();
}
