// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Fail;

/// The ways an image can be refused by the carver.  Both are checked
/// once, before any seam is searched for.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    #[fail(display = "cannot carve a {}x{} image", width, height)]
    InvalidDimension { width: u32, height: u32 },

    #[fail(display = "grayscale needs 1 or 3 channels, found {}", channels)]
    ChannelMismatch { channels: u8 },
}
