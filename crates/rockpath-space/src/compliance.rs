//! Lattice compliance test helpers.
//!
//! These functions verify that a [`Lattice3`] satisfies the invariants
//! every grid-walking stage relies on. Reused across the connectivity
//! variants in the lattice test module.

use crate::lattice::Lattice3;
use indexmap::IndexSet;

/// Assert that no cell lists itself as a neighbour.
pub fn assert_neighbours_irreflexive(lattice: &Lattice3) {
    for coord in lattice.canonical_ordering() {
        assert!(
            lattice.neighbours(coord).iter().all(|&(nb, _)| nb != coord),
            "{coord} lists itself as a neighbour"
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)` with the
/// same step cost.
pub fn assert_neighbours_symmetric(lattice: &Lattice3) {
    for coord in lattice.canonical_ordering() {
        for (nb, cost) in lattice.neighbours(coord) {
            let back = lattice.neighbours(nb);
            assert!(
                back.iter()
                    .any(|&(b, bc)| b == coord && (bc - cost).abs() < f64::EPSILON),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds and unique.
pub fn assert_neighbours_in_bounds_and_unique(lattice: &Lattice3) {
    let dims = lattice.dims();
    for coord in lattice.canonical_ordering() {
        let nbs = lattice.neighbours(coord);
        let unique: IndexSet<_> = nbs.iter().map(|&(nb, _)| nb).collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {coord}");
        for &(nb, _) in &nbs {
            assert!(dims.contains(nb), "neighbour {nb} of {coord} outside {dims}");
        }
    }
}

/// Assert that every step cost equals the Euclidean distance between the
/// two cell centres.
pub fn assert_costs_euclidean(lattice: &Lattice3) {
    for coord in lattice.canonical_ordering() {
        for (nb, cost) in lattice.neighbours(coord) {
            let d2 = [
                nb.x as f64 - coord.x as f64,
                nb.y as f64 - coord.y as f64,
                nb.z as f64 - coord.z as f64,
            ]
            .iter()
            .map(|d| d * d)
            .sum::<f64>();
            assert!(
                (cost - d2.sqrt()).abs() < 1e-12,
                "cost {coord} -> {nb} = {cost}, expected {}",
                d2.sqrt()
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(lattice: &Lattice3) {
    let a = lattice.canonical_ordering();
    let b = lattice.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(lattice: &Lattice3) {
    let ordering = lattice.canonical_ordering();
    assert_eq!(
        ordering.len(),
        lattice.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        lattice.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        lattice.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &Lattice3) {
    assert_neighbours_irreflexive(lattice);
    assert_neighbours_symmetric(lattice);
    assert_neighbours_in_bounds_and_unique(lattice);
    assert_costs_euclidean(lattice);
    assert_canonical_ordering_deterministic(lattice);
    assert_canonical_ordering_complete(lattice);
}
