// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Unweighted luminance.
//!
//! Every channel counts the same, unlike `Pixel::to_luma()` which
//! applies Rec. 709 weights.

use crate::twodmap::GrayMap;
use image::{ImageBuffer, Pixel};

// (Pixel) -> Luminance
#[inline]
fn mean_of_channels<P>(p: &P) -> f32
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let channels = p.channels();
    let sum: f64 = channels.iter().map(|c| f64::from(*c)).sum();
    (sum / channels.len() as f64) as f32
}

/// Build the grayscale cache for an image.  Callers are expected to
/// have checked the channel count already.
pub fn grayscale<P>(image: &ImageBuffer<P, Vec<u8>>) -> GrayMap
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    GrayMap::from_vec(width, height, image.pixels().map(mean_of_channels).collect())
}
