// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam
//!
//! A single top-to-bottom dynamic programming pass over the energy
//! map builds a lattice where every cell holds the cheapest
//! cumulative cost of reaching it from the top row, and the column in
//! the row above that cost came through.  Walking the parents back up
//! from the cheapest cell of the bottom row yields the seam.

use crate::energy::calculate_energy;
use crate::twodmap::{EnergyMap, GrayMap, TwoDimensionalMap};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for other energy
/// functions or for caching.
pub trait SeamFinder {
    /// Request the minimum-cost top-to-bottom seam: one column index
    /// per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// One cell of the seam lattice: the cumulative cost of the cheapest
/// path reaching it, and the column of its parent in the row above.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct CostAndParent {
    pub cost: f64,
    pub parent: u32,
}

/// The cost grid and backtrack grid of a single seam search.
#[derive(Debug)]
pub struct SeamLattice {
    cells: TwoDimensionalMap<CostAndParent>,
}

// Among columns lo..=hi of the row above, the cheapest one.  The strict
// comparison keeps the lowest column on ties.
#[inline]
fn cheapest_parent(above: &[CostAndParent], lo: u32, hi: u32) -> u32 {
    (lo + 1..=hi).fold(lo, |best, x| {
        cq!(
            above[x as usize].cost < above[best as usize].cost,
            x,
            best
        )
    })
}

impl SeamLattice {
    /// Run the forward pass over an energy map.  The map must be at
    /// least one pixel in each direction.
    pub fn new(energy: &EnergyMap) -> Self {
        let (width, height) = energy.dimensions();
        let mut cells: TwoDimensionalMap<CostAndParent> = TwoDimensionalMap::new(width, height);

        // The first row costs exactly its own energy.
        for x in 0..width {
            cells[(x, 0)].cost = energy[(x, 0)];
        }

        let maxwidth = width - 1;
        // For every subsequent row, the cell's cost is its own energy
        // plus the cheapest of the (up to) three cells touching it from
        // above.
        for y in 1..height {
            let above = cells.row(y - 1).to_vec();
            for x in 0..width {
                let lo = cq!(x == 0, 0, x - 1);
                let hi = cq!(x == maxwidth, maxwidth, x + 1);
                let parent = cheapest_parent(&above, lo, hi);
                cells[(x, y)] = CostAndParent {
                    cost: energy[(x, y)] + above[parent as usize].cost,
                    parent,
                };
            }
        }

        SeamLattice { cells }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.cells.dimensions()
    }

    /// Cumulative cost of the cheapest path from the top row to (x, y).
    pub fn cost(&self, x: u32, y: u32) -> f64 {
        self.cells[(x, y)].cost
    }

    /// The column in row `y - 1` that the cheapest path to (x, y)
    /// passes through.  Meaningless for row 0.
    pub fn parent(&self, x: u32, y: u32) -> u32 {
        self.cells[(x, y)].parent
    }

    /// The x coordinates, top row first, of the cheapest seam.
    pub fn vertical_seam(&self) -> Vec<u32> {
        let (_, height) = self.dimensions();
        let bottom = self.cells.row(height - 1);

        // Find the x coordinate of the bottommost cell with the least
        // cost.
        let mut seam_col = cheapest_parent(bottom, 0, bottom.len() as u32 - 1);

        // Working backwards, generate a vec of x coordinates that map to
        // the seam, reverse and return.
        (0..height)
            .rev()
            .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
                acc.push(seam_col);
                seam_col = self.parent(seam_col, y);
                acc
            })
            .into_iter()
            .rev()
            .collect()
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Vec<u32> {
    SeamLattice::new(energy).vertical_seam()
}

/// The gradient-magnitude seam engine: holds onto a grayscale cache
/// and recomputes its energy on request.
pub struct GradientSeams<'a> {
    pub gray: &'a GrayMap,
}

impl<'a> GradientSeams<'a> {
    pub fn new(gray: &'a GrayMap) -> Self {
        GradientSeams { gray }
    }
}

impl<'a> SeamFinder for GradientSeams<'a> {
    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(&calculate_energy(self.gray))
    }
}
