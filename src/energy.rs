// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given the grayscale cache of an image, calculate the energy of
//! every pixel as the sum of the absolute horizontal and vertical
//! derivatives.  Interior pixels use the two-pixel-wide central
//! difference (not halved); border pixels use the one-sided
//! difference against their only neighbor.  No normalization, no
//! clamping.

use crate::twodmap::{EnergyMap, GrayMap};
#[cfg(not(feature = "threaded"))]
use itertools::iproduct;

// The derivative along one axis at `i` of `n` samples, where `at`
// fetches the sample at a position on that axis.  A single sample has
// no neighbor and therefore no gradient.
#[inline]
fn derivative<F: Fn(u32) -> f32>(i: u32, n: u32, at: F) -> f32 {
    if n < 2 {
        return 0.0;
    }
    let last = n - 1;
    let (lo, hi) = (cq!(i == 0, 0, i - 1), cq!(i == last, last, i + 1));
    at(hi) - at(lo)
}

/// The energy of a single pixel: |dx| + |dy|.
#[inline]
pub fn energy_at(gray: &GrayMap, x: u32, y: u32) -> f64 {
    let (width, height) = gray.dimensions();
    let dx = derivative(x, width, |xx| gray[(xx, y)]);
    let dy = derivative(y, height, |yy| gray[(x, yy)]);
    f64::from(dx.abs() + dy.abs())
}

// Image -> Energy Map

/// Compute the energy of every pixel in the grayscale cache.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy(gray: &GrayMap) -> EnergyMap {
    let (width, height) = gray.dimensions();
    EnergyMap::from_vec(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| energy_at(gray, x, y))
            .collect(),
    )
}

// Rows have no dependency on one another, so the map is cut into
// horizontal bands with chunks_mut and each band gets its own thread.

/// Compute the energy of every pixel in the grayscale cache, one band
/// of rows per CPU.
#[cfg(feature = "threaded")]
pub fn calculate_energy(gray: &GrayMap) -> EnergyMap {
    let (width, height) = gray.dimensions();
    let row = width as usize;
    let cpus = num_cpus::get().max(1);
    let band_rows = ((height as usize + cpus - 1) / cpus).max(1);
    let mut energy = vec![0.0; row * height as usize];

    crossbeam::scope(|scope| {
        for (band, cells) in energy.chunks_mut((band_rows * row).max(1)).enumerate() {
            scope.spawn(move |_| {
                let top = band * band_rows;
                for (i, cell) in cells.iter_mut().enumerate() {
                    let (x, y) = (i % row, top + i / row);
                    *cell = energy_at(gray, x as u32, y as u32);
                }
            });
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

    EnergyMap::from_vec(width, height, energy)
}
