// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major, two-dimensional grid.
//!
//! The grayscale cache, the energy map and the seam lattice are all
//! one of these with a different cell type.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of cells: `f32` luminance
/// for the grayscale cache, `f64` for the energy map, or a cost and
/// parent pair for the seam lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

/// The grayscale cache the carver keeps alongside the color image.
pub type GrayMap = TwoDimensionalMap<f32>;

/// Per-pixel gradient energy.
pub type EnergyMap = TwoDimensionalMap<f64>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given size with every cell at `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector must hold
    /// exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell count does not match a {}x{} map",
            width,
            height
        );
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    // Keep the index math in exactly one place.  Same layout as
    // image.rs uses for its buffers.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, in the order `GenericImageView` uses.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
