use std::path::Path;

use anyhow::Context as _;
use image::{Rgba, RgbaImage};

use crate::bbox::trim_transparent_border;
use crate::composite::blit_over;
use crate::error::FavsquareResult;

/// Opaque white canvas fill.
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Square canvas side and paste offsets for a trimmed source size.
///
/// Padding is 10% of the larger dimension per side, with floor semantics:
/// `max / 10` in integer arithmetic. Offsets use floor division, so an odd
/// remainder leaves the extra pixel on the bottom/right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadGeometry {
    pub side: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

pub fn pad_geometry(width: u32, height: u32) -> PadGeometry {
    let max_dim = width.max(height);
    let padding = max_dim / 10;
    let side = max_dim + 2 * padding;
    PadGeometry {
        side,
        offset_x: (side - width) / 2,
        offset_y: (side - height) / 2,
    }
}

/// Trims transparent borders and centers the remainder on an opaque white
/// square. Re-running on the output grows it again: the output has no
/// transparency left to trim, so padding is recomputed against the already
/// padded square.
pub fn squarify(img: &RgbaImage) -> FavsquareResult<RgbaImage> {
    let trimmed = trim_transparent_border(img);
    let geo = pad_geometry(trimmed.width(), trimmed.height());

    let mut canvas = RgbaImage::from_pixel(geo.side, geo.side, Rgba(BACKGROUND));
    blit_over(&mut canvas, &trimmed, geo.offset_x, geo.offset_y)?;
    Ok(canvas)
}

/// Decodes `input`, squarifies it, and writes a PNG at `output`, overwriting
/// any existing file there.
#[tracing::instrument]
pub fn normalize(input: &Path, output: &Path) -> FavsquareResult<()> {
    let decoded =
        image::open(input).with_context(|| format!("open image '{}'", input.display()))?;

    let squared = squarify(&decoded.to_rgba8())?;

    squared
        .save_with_format(output, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_geometry_pins_floor_semantics() {
        // 100x60: padding floor(10.0) = 10, canvas 120, offsets (10, 30).
        assert_eq!(
            pad_geometry(100, 60),
            PadGeometry {
                side: 120,
                offset_x: 10,
                offset_y: 30
            }
        );

        // Below the truncation boundary the padding collapses to zero.
        assert_eq!(
            pad_geometry(9, 9),
            PadGeometry {
                side: 9,
                offset_x: 0,
                offset_y: 0
            }
        );
        assert_eq!(
            pad_geometry(10, 10),
            PadGeometry {
                side: 12,
                offset_x: 1,
                offset_y: 1
            }
        );
    }

    #[test]
    fn pad_geometry_odd_remainder_favors_top_left_offset() {
        // side 4, height 3: offset_y = floor(1/2) = 0, extra pixel at bottom.
        assert_eq!(
            pad_geometry(4, 3),
            PadGeometry {
                side: 4,
                offset_x: 0,
                offset_y: 0
            }
        );
    }
}
