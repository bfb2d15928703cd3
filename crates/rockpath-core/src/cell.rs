//! Cell semantics: fluid, solid, and sample voxels.

use std::fmt;

/// Semantic class of a single voxel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Passable, non-informative pore space.
    Fluid,
    /// Impassable, non-informative rock.
    Solid,
    /// Impassable rock carrying a measured value (e.g. a contact angle).
    Sample,
}

/// The pair of reserved values that give a volume its meaning.
///
/// Every value other than `fluid` and `solid` is a sample. Samples are
/// never overwritten by segmentation, surface reduction, or interpolation
/// fill; only fluid- and solid-default cells may change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellValues {
    /// Value marking fluid (pore) cells. Default: 1.
    pub fluid: u8,
    /// Value marking plain solid cells. Default: 0.
    pub solid: u8,
}

impl Default for CellValues {
    fn default() -> Self {
        Self { fluid: 1, solid: 0 }
    }
}

impl CellValues {
    /// Reserved values with a custom fluid marker and the default solid marker.
    pub fn with_fluid(fluid: u8) -> Self {
        Self {
            fluid,
            ..Self::default()
        }
    }

    /// Classify a raw cell value.
    #[inline]
    pub fn classify(&self, value: u8) -> CellClass {
        if value == self.fluid {
            CellClass::Fluid
        } else if value == self.solid {
            CellClass::Solid
        } else {
            CellClass::Sample
        }
    }

    /// `true` for any value that is not fluid (solid or sample).
    #[inline]
    pub fn is_occupied(&self, value: u8) -> bool {
        value != self.fluid
    }

    /// `true` for measurement cells.
    #[inline]
    pub fn is_sample(&self, value: u8) -> bool {
        value != self.fluid && value != self.solid
    }
}

/// Per-class cell counts of a volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VolumeCensus {
    /// Number of fluid cells.
    pub fluid: usize,
    /// Number of plain solid cells.
    pub solid: usize,
    /// Number of sample cells.
    pub sample: usize,
}

impl VolumeCensus {
    /// Solid plus sample cells.
    pub fn occupied(&self) -> usize {
        self.solid + self.sample
    }

    /// Total cells counted.
    pub fn total(&self) -> usize {
        self.fluid + self.solid + self.sample
    }

    pub(crate) fn record(&mut self, class: CellClass) {
        match class {
            CellClass::Fluid => self.fluid += 1,
            CellClass::Solid => self.solid += 1,
            CellClass::Sample => self.sample += 1,
        }
    }
}

impl fmt::Display for VolumeCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fluid={} solid={} sample={}",
            self.fluid, self.solid, self.sample
        )
    }
}
