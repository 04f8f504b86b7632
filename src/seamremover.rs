// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a vertical seam
//!
//! Both the color image and its grayscale cache lose the same seam,
//! so they go through the same row-slicing routine and stay
//! pixel-aligned.

use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Pixel, Primitive};

// Each row is copied in two runs, left of the seam and right of it,
// skipping the `stride` samples of the seam pixel itself.
fn remove_from_rows<T: Copy>(samples: &[T], width: u32, stride: usize, seam: &[u32]) -> Vec<T> {
    let row_len = width as usize * stride;
    let mut out = Vec::with_capacity(samples.len() - seam.len() * stride);
    for (row, &col) in samples.chunks_exact(row_len).zip(seam) {
        let cut = col as usize * stride;
        out.extend_from_slice(&row[..cut]);
        out.extend_from_slice(&row[cut + stride..]);
    }
    out
}

/// Return a copy of `image` one column narrower, with the pixel at
/// `seam[y]` dropped from every row `y`.
pub fn remove_vertical_seam<P, S>(image: &ImageBuffer<P, Vec<S>>, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let samples = remove_from_rows(image.as_raw(), width, P::CHANNEL_COUNT as usize, seam);
    ImageBuffer::from_raw(width - 1, height, samples)
        .expect("seam removal drops exactly one pixel per row")
}

/// The same operation on a two-dimensional map, for the grayscale
/// cache.
pub fn remove_vertical_seam_from_map<T>(map: &TwoDimensionalMap<T>, seam: &[u32]) -> TwoDimensionalMap<T>
where
    T: Default + Copy,
{
    let (width, height) = map.dimensions();
    TwoDimensionalMap::from_vec(width - 1, height, remove_from_rows(map.as_slice(), width, 1, seam))
}
