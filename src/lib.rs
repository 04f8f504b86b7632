// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware width reduction.
//!
//! The cheapest top-to-bottom seam of pixels, by gradient energy, is
//! found and removed one at a time until the image is narrow enough.

// #![deny(missing_docs)]

extern crate image;

// A ternary.  Rust's `if` is already an expression, but `cargo fmt`
// spreads it over five lines, and the border rules read far better on
// one.
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod dump;
pub mod energy;
pub mod errors;
pub mod grayscale;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod twodmap;

pub use energy::calculate_energy;
pub use errors::CarveError;
pub use grayscale::grayscale;
pub use seamcarver::{seamcarve, seams_to_remove, Carved, SeamCarver, SEAM_MARKER};
pub use seamfinder::{energy_to_vertical_seam, GradientSeams, SeamFinder, SeamLattice};
pub use seamremover::{remove_vertical_seam, remove_vertical_seam_from_map};
pub use twodmap::{EnergyMap, GrayMap, TwoDimensionalMap};
