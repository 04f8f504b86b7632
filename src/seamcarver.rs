// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Repeatedly find and remove the cheapest vertical seam until the
//! image reaches the requested fraction of its width, painting every
//! removed seam onto a full-width copy of the input as it goes.

use crate::errors::CarveError;
use crate::grayscale::grayscale;
use crate::seamfinder::{GradientSeams, SeamFinder};
use crate::seamremover::{remove_vertical_seam, remove_vertical_seam_from_map};
use image::{ImageBuffer, Pixel};
use log::{debug, info};

/// The color seams are painted in on the visualization.  Single
/// channel images get the first component.
pub const SEAM_MARKER: [u8; 3] = [255, 0, 0];

/// The carved image and the seam visualization, in that order.
pub type Carved<P> = (ImageBuffer<P, Vec<u8>>, ImageBuffer<P, Vec<u8>>);

/// How many seams take `width` columns down to `floor(width * scale)`.
/// A scale outside (0, 1) asks for nothing to be removed; this carver
/// never widens.
pub fn seams_to_remove(width: u32, scale: f64) -> u32 {
    if !(scale > 0.0 && scale < 1.0) {
        return 0;
    }
    let target = (f64::from(width) * scale).floor() as u32;
    width.saturating_sub(target)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    image: &'a ImageBuffer<P, Vec<u8>>,
}

impl<'a, P> SeamCarver<'a, P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a ImageBuffer<P, Vec<u8>>) -> Self {
        Self { image }
    }

    /// Refuse empty images and pixel layouts without a defined
    /// grayscale.
    pub fn validate(&self) -> Result<(), CarveError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimension { width, height });
        }
        match P::CHANNEL_COUNT {
            1 | 3 => Ok(()),
            channels => Err(CarveError::ChannelMismatch { channels }),
        }
    }

    /// Carve the image down to `floor(width * scale)` columns.
    pub fn carve(&self, scale: f64) -> Result<Carved<P>, CarveError> {
        self.validate()?;
        Ok(self.carve_seams(seams_to_remove(self.image.width(), scale)))
    }

    // The whole energy map and seam lattice are rebuilt for every
    // seam.  Only a band around the last seam actually changes, but a
    // partial rebuild must pick exactly the same seams.
    fn carve_seams(&self, count: u32) -> Carved<P> {
        let (width, height) = self.image.dimensions();
        let marker = *P::from_slice(&SEAM_MARKER[..P::CHANNEL_COUNT as usize]);

        let mut scratch = self.image.clone();
        let mut seams = self.image.clone();
        let mut gray = grayscale(&scratch);

        info!(
            "carving {}x{} to {}x{}: {} seams",
            width,
            height,
            width - count,
            height,
            count
        );

        for n in 0..count {
            let seam = GradientSeams::new(&gray).find_vertical_seam();
            debug!(
                "seam {} of {}: width {}, entering at column {}",
                n + 1,
                count,
                scratch.width(),
                seam[0]
            );

            for (y, x) in seam.iter().enumerate() {
                seams.put_pixel(*x, y as u32, marker);
            }

            scratch = remove_vertical_seam(&scratch, &seam);
            gray = remove_vertical_seam_from_map(&gray, &seam);
        }

        info!("carved to {}x{}", scratch.width(), scratch.height());
        (scratch, seams)
    }

    /// Carve the image down to `new_width` columns.  A target at or
    /// above the current width removes nothing.
    pub fn carve_to_width(&self, new_width: u32) -> Result<Carved<P>, CarveError> {
        self.validate()?;
        Ok(self.carve_seams(self.image.width().saturating_sub(new_width)))
    }
}

/// Carve `image` to `floor(width * scale)` columns, returning the
/// carved image and a copy of the input with every removed seam
/// painted in `SEAM_MARKER`.
pub fn seamcarve<P>(image: &ImageBuffer<P, Vec<u8>>, scale: f64) -> Result<Carved<P>, CarveError>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    SeamCarver::new(image).carve(scale)
}
