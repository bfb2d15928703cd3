//! Canonical test volumes.
//!
//! - [`centered_block_with_sample`]: the 5×5×5 end-to-end scenario.
//! - [`solid_cube_with_fluid_corner`]: 3×3×3 optimality check.
//! - [`parallel_slabs`]: two separated rock walls with one sample each.
//! - [`random_volume`]: seeded noise for property and stress tests.

use crate::VolumeBuilder;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rockpath_core::{Coord3, Dims, Volume};

/// Sample value planted in the scenario fixtures.
pub const SAMPLE_VALUE: u8 = 42;

/// Sample corner of the centred block.
pub const BLOCK_SAMPLE: Coord3 = Coord3::new(1, 1, 1);

/// Corner of the centred block opposite [`BLOCK_SAMPLE`].
pub const BLOCK_OPPOSITE: Coord3 = Coord3::new(3, 3, 3);

/// Centre of the centred block; the only fully interior cell.
pub const BLOCK_CENTRE: Coord3 = Coord3::new(2, 2, 2);

/// 5×5×5 fluid volume holding a centred 3×3×3 solid block whose
/// `(1,1,1)` corner is a sample.
pub fn centered_block_with_sample() -> Volume {
    VolumeBuilder::fluid(5, 5, 5)
        .block([1, 1, 1], [3, 3, 3], 0)
        .cell(BLOCK_SAMPLE.to_array(), SAMPLE_VALUE)
        .build()
}

/// 3×3×3 all-solid cube with a fluid `(2,2,2)` corner and a sample at
/// the `(0,0,0)` corner.
pub fn solid_cube_with_fluid_corner() -> Volume {
    VolumeBuilder::new(Dims::new(3, 3, 3), 0)
        .cell([2, 2, 2], 1)
        .cell([0, 0, 0], SAMPLE_VALUE)
        .build()
}

/// `n`×`n`×`n` fluid volume with a rock wall at each end of the x axis.
///
/// The low wall spans the first fifth of x, the high wall the last tenth.
/// Two samples sit on the low wall: value 10 at the origin and value 5 at
/// `(0, 3n/10, n-1)`. Requires `n >= 10`.
pub fn parallel_slabs(n: usize) -> Volume {
    assert!(n >= 10, "parallel_slabs needs n >= 10, got {n}");
    let low = n / 5;
    let high = n - n / 10;
    VolumeBuilder::fluid(n, n, n)
        .block([0, 0, 0], [low - 1, n - 1, n - 1], 0)
        .block([high, 0, 0], [n - 1, n - 1, n - 1], 0)
        .cell([0, 0, 0], 10)
        .cell([0, 3 * n / 10, n - 1], 5)
        .build()
}

/// Seeded random volume.
///
/// Each cell is solid with probability `solid_pct`%, and each solid cell
/// is upgraded to a sample (values 2..=255) with probability `sample_pct`%.
/// Everything else is fluid (1). Identical seeds give identical volumes.
pub fn random_volume(dims: Dims, seed: u64, solid_pct: u32, sample_pct: u32) -> Volume {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..dims.cell_count())
        .map(|_| {
            if rng.next_u32() % 100 >= solid_pct {
                1
            } else if rng.next_u32() % 100 < sample_pct {
                2 + (rng.next_u32() % 254) as u8
            } else {
                0
            }
        })
        .collect();
    Volume::from_raw(dims, cells).expect("random volume dims must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockpath_core::CellValues;

    #[test]
    fn centred_block_census() {
        let census = centered_block_with_sample().census(&CellValues::default());
        assert_eq!(census.sample, 1);
        assert_eq!(census.solid, 26);
        assert_eq!(census.fluid, 125 - 27);
    }

    #[test]
    fn slabs_layout() {
        let v = parallel_slabs(20);
        assert_eq!(v.get(Coord3::new(0, 0, 0)), Some(10));
        assert_eq!(v.get(Coord3::new(0, 6, 19)), Some(5));
        assert_eq!(v.get(Coord3::new(3, 10, 10)), Some(0));
        assert_eq!(v.get(Coord3::new(4, 10, 10)), Some(1));
        assert_eq!(v.get(Coord3::new(18, 0, 0)), Some(0));
        assert_eq!(v.get(Coord3::new(17, 0, 0)), Some(1));
    }

    #[test]
    fn random_volume_is_seeded() {
        let dims = Dims::new(6, 6, 6);
        assert_eq!(random_volume(dims, 7, 50, 10), random_volume(dims, 7, 50, 10));
        assert_ne!(random_volume(dims, 7, 50, 10), random_volume(dims, 8, 50, 10));
    }

    #[test]
    fn random_volume_extremes() {
        let dims = Dims::new(4, 4, 4);
        let values = CellValues::default();
        assert_eq!(random_volume(dims, 1, 0, 50).census(&values).fluid, 64);
        let all_solid = random_volume(dims, 1, 100, 0).census(&values);
        assert_eq!(all_solid.solid, 64);
    }
}
