//! Permutation-based genetic operators.
//!
//! Initialization, crossover, and mutation operators for
//! permutation-encoded chromosomes. These operate on `&[usize]` index
//! vectors and know nothing about cities or distances.
//!
//! # Crossover
//!
//! - [`prefix_order_crossover`]: single-point order crossover: keeps a
//!   prefix of one parent and fills the rest in the other parent's order
//!
//! # Mutation
//!
//! - [`per_gene_swap_mutation`]: each position swaps with a random position
//!   with independent probability, O(n)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::{GaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Uniformly random permutation of `0..n` (Fisher–Yates shuffle).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point order crossover for permutations.
///
/// Preserves the **relative order** of the donor parent behind a copied
/// prefix.
///
/// # Algorithm
///
/// 1. Pick a cut point `k` uniformly in `[1, n - 2]` (`k = 1` when `n = 2`)
/// 2. Child 1 = `parent1[..k]`, then every gene of `parent2` in order,
///    skipping values already in the prefix
/// 3. Child 2 is symmetric, with the parents swapped
///
/// Both parents contain every value exactly once, so the filter leaves
/// neither duplicates nor omissions.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn prefix_order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = random_cut_point(n, rng);
    (
        prefix_child(parent1, parent2, cut),
        prefix_child(parent2, parent1, cut),
    )
}

/// Build one child: `head[..cut]` followed by the unused genes of `donor`.
fn prefix_child(head: &[usize], donor: &[usize], cut: usize) -> Vec<usize> {
    let n = head.len();
    let mut child = Vec::with_capacity(n);
    let mut taken = vec![false; n];

    for &gene in &head[..cut] {
        taken[gene] = true;
        child.push(gene);
    }
    child.extend(donor.iter().copied().filter(|&gene| !taken[gene]));

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-gene swap mutation.
///
/// Every position `i` swaps with a uniformly random position `j` with
/// independent probability `rate`. `j` may equal `i`, which is a no-op.
///
/// # Complexity
/// O(n)
pub fn per_gene_swap_mutation<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) {
    let n = perm.len();
    if n < 2 || rate <= 0.0 {
        return;
    }
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            perm.swap(i, j);
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Checks that `perm` is a permutation of `0..n`.
pub fn check_permutation(perm: &[usize], n: usize) -> Result<()> {
    let invalid = |reason: String| GaError::InvalidPermutation {
        expected_len: n,
        reason,
    };

    if perm.len() != n {
        return Err(invalid(format!("length {} != {n}", perm.len())));
    }
    let mut seen = vec![false; n];
    for &value in perm {
        if value >= n {
            return Err(invalid(format!("value {value} out of range")));
        }
        if seen[value] {
            return Err(invalid(format!("duplicate value {value}")));
        }
        seen[value] = true;
    }
    Ok(())
}

/// Returns `true` if `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    check_permutation(perm, n).is_ok()
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a cut point in `[1, n - 2]`, or `1` when `n == 2`.
fn random_cut_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    let hi = n.saturating_sub(2).max(1);
    rng.random_range(1..=hi)
}

// ============================================================================
// Tests
// ============================================================================
