// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a grayscale image, brightest where the
//! energy is highest.

use crate::twodmap::EnergyMap;
use image::{GrayImage, ImageBuffer, Luma};
use num_traits::{clamp, NumCast};

/// Scale the map so that its maximum lands on 255.  A map with no
/// energy at all renders black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    let scale = cq!(factor > 0.0, 255.0 / factor, 0.0);

    ImageBuffer::from_fn(width, height, |x, y| {
        let level = clamp((energy[(x, y)] * scale).round(), 0.0, 255.0);
        Luma([<u8 as NumCast>::from(level).unwrap_or(u8::max_value())])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightest_cell_is_white() {
        let energy = EnergyMap::from_vec(3, 1, vec![0.0, 40.0, 80.0]);
        assert_eq!(energy_to_image(&energy).into_raw(), vec![0, 128, 255]);
    }

    #[test]
    fn flat_map_is_black() {
        let energy = EnergyMap::from_vec(2, 2, vec![0.0; 4]);
        assert_eq!(energy_to_image(&energy).into_raw(), vec![0; 4]);
    }
}
